//! Game rules for Pente
//!
//! This module implements the pattern scanning the game is built on:
//! - Directional scanning from an origin (8 compass directions)
//! - Capture rules (pair capture)
//! - Line-length detection along the 4 axes

pub mod capture;
pub mod line;
pub mod scan;

// Re-exports for convenient access
pub use capture::{capture_credit, find_captures, CapturedPip};
pub use line::{max_along_axis, max_line_length};
pub use scan::{run_length, scan_direction, AXES, DIRECTIONS};
