//! Stateless tessellation helpers for render callbacks.
//!
//! These produce [`Mesh`](crate::surface::Mesh)es only; they never touch
//! engine state.

mod ellipse;

pub use ellipse::{ellipse, EllipseDesc, EllipseMesh, Outline};
