//! surgisense-core
//!
//! Pure domain types shared by the SurgiSense dashboard: backend payloads,
//! chat messages and the patient recovery profile. No HTTP dependency.

pub mod error;
pub mod models;
