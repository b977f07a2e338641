//! Display formatting for grids of displayable values
//!
//! A presentation convenience outside the core contract: cells render
//! centered in per-column fields, rows separated by newlines. The empty
//! marker renders as a middle dot.

use std::fmt;

use crate::geometry::Vector;
use crate::grid::Grid;

/// Placeholder rendered for empty cells
const EMPTY_CELL: &str = "·";

/// Center `text` in a field of `width` characters, extra space to the right
fn center(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }
    let pad = width - length;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.map(|value, _| {
            Some(value.map_or_else(|| EMPTY_CELL.to_string(), ToString::to_string))
        });
        let column_widths: Vec<usize> = (0..rendered.width())
            .map(|x| {
                (0..rendered.height())
                    .filter_map(|y| rendered.get(Vector::new(x as i32, y as i32)))
                    .map(|text| text.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        if self.height() > 1 {
            writeln!(f)?;
        }
        for y in 0..rendered.height() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = column_widths
                .iter()
                .enumerate()
                .map(|(x, &width)| {
                    rendered
                        .get(Vector::new(x as i32, y as i32))
                        .map_or_else(String::new, |text| center(text, width))
                })
                .collect();
            write!(f, "{}", line.join(", "))?;
        }
        Ok(())
    }
}
