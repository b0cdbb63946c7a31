//! Pure knight-path logic for an 8x8 chessboard.
//!
//! # Architecture
//!
//! - **Board**: validated [`Square`] values and knight-move generation
//! - **Search**: breadth-first shortest paths with parent-pointer reconstruction
//! - **Invariants**: properties every returned [`KnightPath`] satisfies
//!
//! # Example
//!
//! ```
//! use strictly_knights_core::find_shortest_knight_path;
//!
//! let path = find_shortest_knight_path((0, 0), (3, 3)).unwrap();
//! assert_eq!(path.move_count(), Some(2));
//! assert!(find_shortest_knight_path((-1, 0), (3, 3)).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod path;
mod search;

pub use board::{BOARD_SIZE, KnightOffset, SQUARE_COUNT, Square, is_on_board, knight_moves};
pub use error::{InvalidSquareError, ParseSquareError};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, KnightPathInvariants,
    within_diameter::KNIGHT_GRAPH_DIAMETER,
};
pub use path::{DistanceMap, KnightPath};
pub use search::{distances_from, find_shortest_knight_path, shortest_path};
