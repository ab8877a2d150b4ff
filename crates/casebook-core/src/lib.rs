//! Casebook Core Library
//!
//! Case-based diagnosis: weighted similarity retrieval over stored cases and
//! retention of confirmed cases into per-domain tables.

pub mod case;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod evaluation;
pub mod format;
pub mod history;
pub mod id;
pub mod logging;
pub mod records;
pub mod similarity;
pub mod store;
