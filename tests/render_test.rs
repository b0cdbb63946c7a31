//! Tests for rendering the sample queries.

use strictly_knights::{DEMO_QUERIES, OutputFormat, find_shortest_knight_path, render_path};

#[test]
fn test_demo_queries_render_move_counts() {
    let headers: Vec<String> = DEMO_QUERIES
        .iter()
        .map(|(start, end)| {
            let path = find_shortest_knight_path(*start, *end).unwrap();
            let text = render_path(&path, OutputFormat::Text).unwrap();
            text.lines().next().unwrap().to_string()
        })
        .collect();

    assert_eq!(
        headers,
        [
            "You made it in 2 moves! Here's your path:",
            "You made it in 3 moves! Here's your path:",
            "You made it in 3 moves! Here's your path:",
        ]
    );
}

#[test]
fn test_text_listing_has_one_line_per_square() {
    let path = find_shortest_knight_path((7, 7), (7, 6)).unwrap();
    let text = render_path(&path, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), path.len() + 1);
    assert_eq!(lines[1], "[7,7]");
    assert_eq!(lines[lines.len() - 1], "[7,6]");
}

#[test]
fn test_single_square_is_zero_moves() {
    let path = find_shortest_knight_path((4, 4), (4, 4)).unwrap();
    let text = render_path(&path, OutputFormat::Algebraic).unwrap();
    assert_eq!(text, "You made it in 0 moves! Here's your path:\ne5\n");
}
