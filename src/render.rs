//! Textual grid rendering. Styling is cosmetic only and never feeds back
//! into the simulation.

use crossterm::style::Stylize;

use crate::simulation::Grid;

/// Display options for [`render`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintOptions {
    /// Highlight freshly reset cells (energy 0) on a yellow background and
    /// print everything else in blue
    pub fancy: bool,
}

/// Render a grid as text, one row per line and one digit per cell.
pub fn render(grid: &Grid, options: PrintOptions) -> String {
    let mut out = String::new();

    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for &energy in row {
            let digit = energy.to_string();
            if options.fancy {
                let styled = if energy == 0 {
                    digit.on_yellow()
                } else {
                    digit.blue()
                };
                out.push_str(&styled.to_string());
            } else {
                out.push_str(&digit);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let grid = Grid::parse("123\n456").unwrap();
        let text = render(&grid, PrintOptions::default());
        assert_eq!(text, "123\n456");
    }

    #[test]
    fn test_render_roundtrips_through_parse() {
        let grid = Grid::parse("905\n312").unwrap();
        let text = render(&grid, PrintOptions { fancy: false });
        assert_eq!(Grid::parse(&text).unwrap(), grid);
    }

    #[test]
    fn test_render_fancy_styles_cells() {
        let grid = Grid::parse("05").unwrap();
        let text = render(&grid, PrintOptions { fancy: true });
        // Styled output carries ANSI escapes but still shows every digit.
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('0'));
        assert!(text.contains('5'));
    }
}
