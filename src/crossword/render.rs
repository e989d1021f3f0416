#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Turning an assignment back into a picture of the grid.

use crate::crossword::error::CrosswordError;
use crate::crossword::structure::Crossword;
use crate::csp::assignment::Assignment;
use crate::csp::geometry::Geometry;
use std::fmt::Write;
use std::path::Path;

/// Character printed for blocked cells in the terminal rendering.
pub const BLOCK: char = '█';

/// Side length of one cell in the SVG rendering.
pub const CELL_SIZE: usize = 100;

/// Gap between neighbouring cells in the SVG rendering.
pub const CELL_BORDER: usize = 2;

/// Letters by cell. `None` for blocked cells and open cells no word covers.
pub type LetterGrid = Vec<Vec<Option<char>>>;

/// Writes every assigned word across the cells of its slot.
#[must_use]
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> LetterGrid {
    let mut letters = vec![vec![None; crossword.width()]; crossword.height()];

    for (var, word) in assignment.iter() {
        for ((row, col), c) in var.cells().zip(word.chars()) {
            if let Some(cell) = letters.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(c);
            }
        }
    }

    letters
}

/// Renders the grid as text: letters in open cells, [`BLOCK`] elsewhere.
#[must_use]
pub fn render_text(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);
    let mut out = String::with_capacity(crossword.height() * (crossword.width() * 3 + 1));

    for (row, cells) in letters.iter().enumerate() {
        for (col, letter) in cells.iter().enumerate() {
            let c = if crossword.is_open(row, col) {
                letter.unwrap_or(' ')
            } else {
                BLOCK
            };
            out.push(c);
        }
        out.push('\n');
    }

    out
}

/// Renders the grid as an SVG image.
#[must_use]
pub fn render_svg(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);
    let width = crossword.width() * CELL_SIZE;
    let height = crossword.height() * CELL_SIZE;
    let inner = CELL_SIZE - 2 * CELL_BORDER;
    let font_size = CELL_SIZE * 4 / 5;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="black"/>"#
    );

    for (row, cells) in letters.iter().enumerate() {
        for (col, letter) in cells.iter().enumerate() {
            if !crossword.is_open(row, col) {
                continue;
            }
            let x = col * CELL_SIZE + CELL_BORDER;
            let y = row * CELL_SIZE + CELL_BORDER;
            let _ = writeln!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{inner}" height="{inner}" fill="white"/>"#
            );

            if let Some(c) = letter {
                let cx = col * CELL_SIZE + CELL_SIZE / 2;
                let cy = row * CELL_SIZE + CELL_SIZE / 2;
                let _ = writeln!(
                    svg,
                    r#"<text x="{cx}" y="{cy}" font-family="sans-serif" font-size="{font_size}" text-anchor="middle" dominant-baseline="central" fill="black">{}</text>"#,
                    escape(*c)
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape(c: char) -> String {
    match c {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        '\'' => "&apos;".to_string(),
        _ => c.to_string(),
    }
}

/// One `row,col direction length: WORD` line per assigned slot, in canonical order.
#[must_use]
pub fn render_listing(crossword: &Crossword, assignment: &Assignment) -> String {
    let mut out = String::new();
    for var in crossword.variables() {
        if let Some(word) = assignment.get(var) {
            let _ = writeln!(
                out,
                "{},{} {} {}: {word}",
                var.row, var.col, var.direction, var.length
            );
        }
    }
    out
}

/// Saves the grid to `path`: SVG if the extension is `svg`, text otherwise.
///
/// # Errors
///
/// Returns [`CrosswordError::Io`] if the file cannot be written.
pub fn save<P: AsRef<Path>>(
    crossword: &Crossword,
    assignment: &Assignment,
    path: P,
) -> Result<(), CrosswordError> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let contents = if is_svg {
        render_svg(crossword, assignment)
    } else {
        render_text(crossword, assignment)
    };

    std::fs::write(path, contents).map_err(|e| CrosswordError::io(path, e))
}
