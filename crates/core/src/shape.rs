//! Shape module - tetromino occupancy grids and 90° rotation
//!
//! A shape is a rectangular grid of at most 4x4 cells packed into a 16-bit
//! mask, row-major with a fixed stride of 4 (bit `y * 4 + x`). Shapes are
//! `Copy`, so every piece owns an independent grid and rotating it can never
//! touch the template it came from.
//!
//! Rotation has no notion of SRS states or wall kicks: it is the plain matrix
//! transform, and each template simply cycles through its 4 orientations.

use crate::types::PieceKind;

/// Largest width or height a shape can have
pub const MAX_SIDE: u8 = 4;

/// A rectangular occupancy grid
///
/// Invariants: `1 <= width, height <= 4`, at least one cell is occupied, and
/// no bit outside `width x height` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    bits: u16,
}

const fn bit(x: u8, y: u8) -> u16 {
    1 << (y * MAX_SIDE + x)
}

impl Shape {
    /// Build a template from literal rows. Only used for the constants below.
    const fn from_template_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u8;
        let width = rows[0].len() as u8;
        let mut bits = 0u16;
        let mut y = 0;
        while y < rows.len() {
            let mut x = 0;
            while x < rows[y].len() {
                if rows[y][x] != 0 {
                    bits |= bit(x as u8, y as u8);
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Build a shape from rows of 0/1 cells (any non-zero cell is occupied)
    ///
    /// Returns `None` if the grid is empty, jagged, larger than 4x4, or has
    /// no occupied cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use touch_tetris_core::Shape;
    ///
    /// let t = Shape::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    ///
    /// assert!(Shape::from_rows(&[vec![1u8, 1], vec![1]]).is_none());
    /// assert!(Shape::from_rows(&[[0u8, 0]]).is_none());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if width == 0 || width > MAX_SIDE as usize || height > MAX_SIDE as usize {
            return None;
        }

        let mut bits = 0u16;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    bits |= bit(x as u8, y as u8);
                }
            }
        }

        if bits == 0 {
            return None;
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            bits,
        })
    }

    /// Number of columns
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Number of rows
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Whether cell (x, y) is occupied; out-of-grid cells are empty
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return false;
        }
        self.bits & bit(x as u8, y as u8) != 0
    }

    /// Number of occupied cells
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Occupied cells as (x, y) offsets from the top-left, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height())
            .flat_map(move |y| (0..self.width()).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.get(x, y))
    }

    /// The grid as rows of 0/1 cells
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self.get(x, y) as u8).collect())
            .collect()
    }

    /// Rotate 90° clockwise
    ///
    /// For an `R x C` grid the result is `C x R` with
    /// `out[y][x] = in[R-1-x][y]`.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.height;
        let cols = self.width;
        let mut bits = 0u16;
        for y in 0..cols {
            for x in 0..rows {
                // in[rows-1-x][y]: column y, row rows-1-x
                if self.bits & bit(y, rows - 1 - x) != 0 {
                    bits |= bit(x, y);
                }
            }
        }
        Shape {
            width: rows,
            height: cols,
            bits,
        }
    }

    /// Rotate 90° counter-clockwise
    ///
    /// For an `R x C` grid the result is `C x R` with
    /// `out[y][x] = in[x][C-1-y]`.
    pub fn rotate_ccw(&self) -> Shape {
        let rows = self.height;
        let cols = self.width;
        let mut bits = 0u16;
        for y in 0..cols {
            for x in 0..rows {
                // in[x][cols-1-y]: column cols-1-y, row x
                if self.bits & bit(cols - 1 - y, x) != 0 {
                    bits |= bit(x, y);
                }
            }
        }
        Shape {
            width: rows,
            height: cols,
            bits,
        }
    }
}

/// Rotate a grid 90° clockwise (pure, see [`Shape::rotate_cw`])
pub fn rotate_cw(shape: &Shape) -> Shape {
    shape.rotate_cw()
}

/// Rotate a grid 90° counter-clockwise (pure, see [`Shape::rotate_ccw`])
pub fn rotate_ccw(shape: &Shape) -> Shape {
    shape.rotate_ccw()
}

/// I template: 1x4 bar
pub const I_SHAPE: Shape = Shape::from_template_rows(&[&[1, 1, 1, 1]]);
/// O template: 2x2 square
pub const O_SHAPE: Shape = Shape::from_template_rows(&[&[1, 1], &[1, 1]]);
/// T template
pub const T_SHAPE: Shape = Shape::from_template_rows(&[&[0, 1, 0], &[1, 1, 1]]);
/// S template
pub const S_SHAPE: Shape = Shape::from_template_rows(&[&[0, 1, 1], &[1, 1, 0]]);
/// Z template
pub const Z_SHAPE: Shape = Shape::from_template_rows(&[&[1, 1, 0], &[0, 1, 1]]);
/// L template
pub const L_SHAPE: Shape = Shape::from_template_rows(&[&[1, 0, 0], &[1, 1, 1]]);
/// J template
pub const J_SHAPE: Shape = Shape::from_template_rows(&[&[0, 0, 1], &[1, 1, 1]]);

/// Get the spawn-orientation template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_layout_uses_fixed_stride() {
        assert_eq!(bit(0, 0), 0b1);
        assert_eq!(bit(3, 0), 0b1000);
        assert_eq!(bit(0, 1), 0b1_0000);
        assert_eq!(bit(3, 3), 1 << 15);
    }

    #[test]
    fn test_const_templates_match_runtime_parse() {
        assert_eq!(Some(T_SHAPE), Shape::from_rows(&[[0u8, 1, 0], [1, 1, 1]]));
        assert_eq!(Some(I_SHAPE), Shape::from_rows(&[[1u8, 1, 1, 1]]));
        assert_eq!(T_SHAPE.bits, 0b0111_0010);
    }

    #[test]
    fn test_rotation_keeps_bits_inside_grid() {
        for kind in PieceKind::ALL {
            let mut shape = template(kind);
            for _ in 0..4 {
                shape = shape.rotate_cw();
                let inside: u16 = shape.cells().map(|(x, y)| bit(x as u8, y as u8)).sum();
                assert_eq!(shape.bits, inside, "{:?} leaked bits", kind);
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_oversized() {
        assert!(Shape::from_rows(&[[1u8, 1, 1, 1, 1]]).is_none());
        assert!(Shape::from_rows(&[[1u8], [1], [1], [1], [1]]).is_none());
        let empty: [[u8; 2]; 0] = [];
        assert!(Shape::from_rows(&empty).is_none());
        assert!(Shape::from_rows(&[[0u8; 0]]).is_none());
    }
}
