//! Common types and utilities for the clast clang AST decoder.
//!
//! This crate provides foundational types used across all clast crates:
//! - String interning (`Atom`, `Interner`)
//! - Source locations as clang dumps them (`Loc`, `SourceRange`)
//! - Flat type descriptors attached to typed nodes (`TypeDesc`)
//! - Decoder limits and capacity hints

// String interning for kind/id/file deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Loc / SourceRange / TypeDesc value types
pub mod location;
pub use location::{Loc, SourceRange, TypeDesc};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod interner_tests;

#[cfg(test)]
#[path = "../tests/location_tests.rs"]
mod location_tests;
