//! Braille canvas
//!
//! Each terminal cell carries a 2x4 dot grid (Unicode Braille patterns,
//! U+2800..U+28FF), giving the map and pie chart an effective resolution of
//! twice the width and four times the height of their screen area.

/// Dot-addressable drawing surface sized in terminal cells.
#[derive(Clone)]
pub struct BrailleCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<u8>,
}

// Braille dot bits per in-cell position:
//   (0,0)=0x01 (1,0)=0x08
//   (0,1)=0x02 (1,1)=0x10
//   (0,2)=0x04 (1,2)=0x20
//   (0,3)=0x40 (1,3)=0x80
const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

impl BrailleCanvas {
    /// Canvas sized in terminal cells; dot resolution is `cols*2` x `rows*4`.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![0u8; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows_len(&self) -> usize {
        self.rows
    }

    /// Dot-space width.
    pub fn width(&self) -> usize {
        self.cols * 2
    }

    /// Dot-space height.
    pub fn height(&self) -> usize {
        self.rows * 4
    }

    /// Set a dot at dot-space coordinates. Out-of-range is ignored.
    pub fn set(&mut self, x: usize, y: usize) {
        let col = x / 2;
        let row = y / 4;
        if col >= self.cols || row >= self.rows {
            return;
        }
        self.cells[row * self.cols + col] |= DOT_BITS[y % 4][x % 2];
    }

    /// Set a dot using signed coordinates; negatives are ignored.
    pub fn set_signed(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set(x as usize, y as usize);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&b| b == 0)
    }

    /// One terminal row as Braille characters. Empty cells map to U+2800.
    pub fn row_string(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
            .collect()
    }

    /// All terminal rows, top to bottom.
    pub fn row_strings(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(|row| self.row_string(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(canvas: &BrailleCanvas) -> String {
        canvas.row_strings().collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn single_dot() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set(0, 0);
        assert_eq!(render(&canvas), "\u{2801}");
    }

    #[test]
    fn full_cell() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for x in 0..2 {
            for y in 0..4 {
                canvas.set(x, y);
            }
        }
        assert_eq!(render(&canvas), "\u{28FF}");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set(100, 100);
        canvas.set_signed(-1, 0);
        assert!(canvas.is_empty());
    }

    #[test]
    fn dot_resolution() {
        let canvas = BrailleCanvas::new(3, 2);
        assert_eq!(canvas.width(), 6);
        assert_eq!(canvas.height(), 8);
    }
}
