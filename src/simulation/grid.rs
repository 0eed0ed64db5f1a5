use crate::error::ParseError;

/// Rectangular grid of cell energies.
///
/// Stored as a flat vector indexed by `y * width + x`, so the dimensions are
/// fixed at construction and rectangularity holds by representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse a grid from newline-separated rows of digits.
    ///
    /// Whitespace-only lines are skipped, as is whitespace inside a row.
    /// Every remaining row must have the same width as the first.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (line_no, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut row_len = 0;
            for ch in line.chars() {
                if ch.is_whitespace() {
                    continue;
                }
                let energy = ch.to_digit(10).ok_or(ParseError::InvalidDigit {
                    line: line_no + 1,
                    found: ch,
                })?;
                cells.push(energy as u8);
                row_len += 1;
            }

            if height == 0 {
                width = row_len;
            } else if row_len != width {
                return Err(ParseError::RaggedRow {
                    line: line_no + 1,
                    expected: width,
                    found: row_len,
                });
            }
            height += 1;
        }

        if cells.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Energies in row-major order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Energy at column `x`, row `y`
    pub fn energy(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// Flat indices of the Moore neighborhood of the cell at `idx`.
    ///
    /// Visits neighbor rows top to bottom and columns left to right,
    /// skipping the cell itself and anything out of bounds.
    pub(crate) fn neighbors(&self, idx: usize) -> Vec<usize> {
        let x = (idx % self.width) as isize;
        let y = (idx / self.width) as isize;
        let mut out = Vec::with_capacity(8);

        for ny in (y - 1)..=(y + 1) {
            for nx in (x - 1)..=(x + 1) {
                if nx == x && ny == y {
                    continue;
                }
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if nx < self.width && ny < self.height {
                    out.push(ny * self.width + nx);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        let grid = Grid::parse("123\n456\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Grid::parse("\n12\n\n34\n\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Grid::parse(""), Err(ParseError::Empty));
        assert_eq!(Grid::parse("\n  \n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            Grid::parse("12\n3x"),
            Err(ParseError::InvalidDigit {
                line: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            Grid::parse("123\n45"),
            Err(ParseError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_energy_indexing() {
        let grid = Grid::parse("123\n456").unwrap();
        assert_eq!(grid.energy(0, 0), 1);
        assert_eq!(grid.energy(2, 0), 3);
        assert_eq!(grid.energy(1, 1), 5);
    }

    #[test]
    fn test_neighbors_corner_edge_interior() {
        let grid = Grid::parse("123\n456\n789").unwrap();
        // Top-left corner has 3 neighbors
        assert_eq!(grid.neighbors(0), vec![1, 3, 4]);
        // Top edge has 5
        assert_eq!(grid.neighbors(1), vec![0, 2, 3, 4, 5]);
        // Center has all 8
        assert_eq!(grid.neighbors(4), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_neighbors_single_cell() {
        let grid = Grid::parse("5").unwrap();
        assert!(grid.neighbors(0).is_empty());
    }
}
