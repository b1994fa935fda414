//! Export validation
//!
//! Reads back the files written by a run to check they are well formed
//! and agree with each other.

mod roundtrip;

pub use roundtrip::{read_sequences, validate_export};
