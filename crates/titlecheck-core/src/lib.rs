//! Titlecheck Core Library
//!
//! Title vectorization, similarity ranking and the plagiarism decision rule
//! for thesis title screening.

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod records;
pub mod similarity;
pub mod text;
pub mod vectorize;
