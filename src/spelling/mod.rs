//! Approximate word matching for Orthos.
//!
//! This module contains the metric core of the library: edit-distance
//! functions, the BK-tree index built on top of them, and the dictionary
//! that combines exact membership with ranked suggestion retrieval.

pub mod bktree;
pub mod dictionary;
pub mod distance;
