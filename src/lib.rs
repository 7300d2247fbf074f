//! # tabmark
//!
//! A front end for the tabmark structured-text format: line classification, inline
//! stylizing, structural parsing, export to a typed document model, and rendering
//! back to text.
//!
//! ## Testing
//!
//! Document-level tests use the fluent assertions in the
//! [testing module](tabmark::testing).

pub mod tabmark;
