//! Presentation of finished paths and distance maps.
//!
//! Rendering only consumes search results; nothing here feeds back into the
//! search.

use crate::config::OutputFormat;
use derive_more::{Display, Error, From};
use std::fmt::Write;
use strictly_knights_core::{DistanceMap, KnightPath, Square};
use tracing::instrument;

/// Failure to render a path.
#[derive(Debug, Display, Error, From)]
#[display("Failed to render path as JSON: {}", _0)]
pub struct RenderError(serde_json::Error);

/// Renders a path in the requested format.
#[instrument(skip(path), fields(moves = ?path.move_count()))]
pub fn render_path(path: &KnightPath, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_listing(path, |square| square.to_string())),
        OutputFormat::Algebraic => Ok(render_listing(path, Square::algebraic)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(path)?),
    }
}

fn render_listing(path: &KnightPath, label: impl Fn(Square) -> String) -> String {
    let Some(moves) = path.move_count() else {
        return "No path found.\n".to_string();
    };

    let mut out = format!("You made it in {} moves! Here's your path:\n", moves);
    for square in path {
        out.push_str(&label(*square));
        out.push('\n');
    }
    out
}

/// Renders an 8x8 grid of knight distances, rank 8 at the top.
///
/// Unreachable squares print as `-` and the start square as `N`.
#[instrument(skip(map), fields(start = %map.start()))]
pub fn render_distances(map: &DistanceMap) -> String {
    let mut out = format!("Knight distances from {}:\n", map.start());
    for (row, cells) in map.rows().enumerate() {
        let rank = 8 - row;
        let _ = write!(out, "{} ", rank);
        for cell in cells {
            let glyph = match cell {
                Some(0) => "N".to_string(),
                Some(d) => d.to_string(),
                None => "-".to_string(),
            };
            let _ = write!(out, " {}", glyph);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_knights_core::{distances_from, find_shortest_knight_path};

    #[test]
    fn test_text_matches_classic_output() {
        let path = find_shortest_knight_path((0, 0), (3, 3)).unwrap();
        let text = render_path(&path, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "You made it in 2 moves! Here's your path:\n[0,0]\n[2,1]\n[3,3]\n"
        );
    }

    #[test]
    fn test_algebraic_listing() {
        let path = find_shortest_knight_path((0, 0), (3, 3)).unwrap();
        let text = render_path(&path, OutputFormat::Algebraic).unwrap();
        assert!(text.ends_with("a1\nc2\nd4\n"));
    }

    #[test]
    fn test_empty_path_message() {
        let text = render_path(&KnightPath::empty(), OutputFormat::Text).unwrap();
        assert_eq!(text, "No path found.\n");
    }

    #[test]
    fn test_json_contains_moves_and_path() {
        let path = find_shortest_knight_path((7, 7), (7, 6)).unwrap();
        let json = render_path(&path, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["moves"], 3);
        assert_eq!(value["path"].as_array().unwrap().len(), 4);
        assert_eq!(value["path"][0], serde_json::json!([7, 7]));
    }

    #[test]
    fn test_distance_grid_layout() {
        let map = distances_from((0, 0)).unwrap();
        let grid = render_distances(&map);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Knight distances from [0,0]:");
        assert!(lines[1].starts_with("8 "));
        assert!(lines[1].ends_with(" 6"));
        assert_eq!(lines[8], "1  N 3 2 3 2 3 4 5");
    }
}
