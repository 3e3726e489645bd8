//! # Orthos
//!
//! A BK-tree based approximate word matching and spell checking library for Rust.
//!
//! ## Features
//!
//! - Damerau-Levenshtein edit distance (restricted/OSA variant)
//! - BK-tree metric index with triangle-inequality pruning
//! - Case-insensitive dictionary with ranked suggestions
//! - Line-oriented text scanner with proper-noun heuristics
//! - Human and JSON report output

pub mod checker;
pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
