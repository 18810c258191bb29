//! Chart-related types and input loading.
//!
//! This module contains types for representing charts (songs + difficulties):
//! - `Difficulty` - difficulty tags (easy, normal, hard, expert, master, append)
//! - `ChartKey` - chart identifier
//! - `ChartMetadata` - per-chart metadata from the music meta feed

mod difficulty;
mod metadata;

pub use difficulty::*;
pub use metadata::*;
