//! Line-level parsing utilities.
//!
//! This module contains the pieces shared by the in-memory parser and the
//! streaming parser: header recognition and the line fold that turns
//! classified lines into records.

pub mod assembler;
pub mod header;

pub use assembler::Assembler;
pub use header::{Header, HeaderMatcher, LineKind, split_author};
