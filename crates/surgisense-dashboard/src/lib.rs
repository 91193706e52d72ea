//! surgisense-dashboard library root.
//!
//! The dashboard's view state lives here rather than in the binary so that
//! integration tests can drive the views against a stub backend.

pub mod config;
pub mod error;
pub mod gate;
pub mod render;
pub mod state;
pub mod views;
