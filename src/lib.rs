//! Strictly Knights - shortest knight paths on an 8x8 chessboard.
//!
//! The search itself lives in [`strictly_knights_core`]; this crate adds
//! configuration and presentation for the command-line tool.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for output format and log filter
//! - **Render**: classic text, algebraic, and JSON path listings plus distance grids
//!
//! # Example
//!
//! ```
//! use strictly_knights::{find_shortest_knight_path, render_path, OutputFormat};
//!
//! let path = find_shortest_knight_path((0, 7), (1, 3))?;
//! let text = render_path(&path, OutputFormat::Text)?;
//! assert!(text.starts_with("You made it in 3 moves!"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;

// Crate-level exports - Configuration
pub use config::{ConfigError, KnightsConfig, OutputFormat};

// Crate-level exports - Presentation
pub use render::{RenderError, render_distances, render_path};

// Crate-level exports - Search
pub use strictly_knights_core::{
    DistanceMap, InvalidSquareError, KnightPath, ParseSquareError, Square, distances_from,
    find_shortest_knight_path, shortest_path,
};

/// The sample queries run by the `demo` command.
pub const DEMO_QUERIES: [((i32, i32), (i32, i32)); 3] =
    [((0, 0), (3, 3)), ((0, 7), (1, 3)), ((7, 7), (7, 6))];
