//! Geometry, diagnostics and the collaborator interfaces of boxglue.
//!
//! This crate defines everything the layout engine shares with its host:
//! lengths and insets, sizing policies, text styles with the measurement
//! oracle, images, and the drawing backend.

pub mod diag;
pub mod engine;
pub mod layout;
pub mod render;
pub mod text;
pub mod visualize;
