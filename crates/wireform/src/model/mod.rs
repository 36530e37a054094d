//! Data model for wireform.
//!
//! This module contains the types every codec shares:
//! - Values (the in-memory tree)
//! - Records (named, ordered field lists)
//! - Payloads (encoded output, tagged text vs bytes)

pub mod payload;
pub mod value;

pub use payload::Payload;
pub use value::{Record, Value, ValueKind};
