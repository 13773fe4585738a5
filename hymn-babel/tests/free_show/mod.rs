//! FreeShow export tests
//!
//! Tests for the `.show` slide-deck export.

mod export;
mod structure;
