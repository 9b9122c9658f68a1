//! Loading grids from disk and rendering a [`ParseResult`] back into text.
//! Neither of these is part of the core parsing/extraction algorithms, but
//! the grid reconstruction half is also the fixture idempotence is checked
//! against, so it lives here rather than inline in a test.

use crate::error::CoreError;
use crate::model::{AnchorKind, DrawStyle, ParseResult, SegmentKind};
use crate::point::Point;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and splits it into lines for [`crate::parser::parse_text_lines`].
///
/// # Example
/// ```ignore
/// use planargrid::fileoperation::*;
///
/// let lines = load_lines("diagram.txt")?;
/// let result = planargrid::parser::parse_text_lines(&lines);
/// ```
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, CoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Reads every line available on stdin until EOF, for piped input
/// (`cat diagram.txt | asciiplane`) and interactive redirection alike.
pub fn read_stdin_lines() -> Result<Vec<String>, CoreError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| CoreError::Stdin { source })?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Writes `lines` to `path`, one per row.
pub fn save_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<(), CoreError> {
    let path = path.as_ref();
    fs::write(path, lines.join("\n")).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Rebuilds the ASCII grid implied by a [`ParseResult`]: segments are drawn
/// back as runs of their draw-style character, anchors and bullets as
/// their glyph, everything else left blank.
pub fn render_lines(result: &ParseResult) -> Vec<String> {
    let width = result
        .segments
        .iter()
        .flat_map(|s| [s.start.column, s.end.column])
        .chain(result.anchors.keys().map(|p| p.column))
        .map(|c| c + 1)
        .max()
        .unwrap_or(0);
    let height = result
        .segments
        .iter()
        .flat_map(|s| [s.start.row, s.end.row])
        .chain(result.anchors.keys().map(|p| p.row))
        .map(|r| r + 1)
        .max()
        .unwrap_or(0);

    let mut grid: Vec<Vec<char>> = vec![vec![' '; width]; height];

    for seg in &result.segments {
        let ch = match (seg.kind, seg.draw) {
            (SegmentKind::Horizontal, DrawStyle::Solid) => '-',
            (SegmentKind::Horizontal, DrawStyle::Dashed) => '=',
            (SegmentKind::Vertical, DrawStyle::Solid) => '|',
            (SegmentKind::Vertical, DrawStyle::Dashed) => ':',
        };
        for Point { column, row } in seg.cells() {
            grid[row][column] = ch;
        }
    }

    for (p, kind) in &result.anchors {
        let ch = match kind {
            AnchorKind::Multi => '+',
            AnchorKind::FirstDiagonal => '/',
            AnchorKind::SecondDiagonal => '\\',
        };
        grid[p.row][p.column] = ch;
    }

    for p in &result.bullets {
        grid[p.row][p.column] = '*';
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}
