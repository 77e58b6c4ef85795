use serde::{Deserialize, Serialize};

use super::OffsetCoordinate;

/// A square, non-wrapping grid. Legacy maps are always as wide as they are high.
///
/// This is the only place where a position index is converted to or from a coordinate:
/// `index = y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareGrid {
    width: u32,
}

impl SquareGrid {
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Always equal to [`SquareGrid::width`].
    pub const fn height(&self) -> u32 {
        self.width
    }

    /// Number of cells in the grid, `width²`.
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.width as usize
    }

    /// Checks a raw legacy position against `[0, width²)`.
    ///
    /// The upper bound is exclusive: `pos == width²` is rejected.
    pub fn checked_index(&self, pos: i32) -> Option<usize> {
        usize::try_from(pos)
            .ok()
            .filter(|&index| index < self.cell_count())
    }

    /// Whether `offset_coordinate` names a cell of this grid.
    pub fn contains(&self, offset_coordinate: OffsetCoordinate) -> bool {
        let [x, y] = offset_coordinate.to_array();
        let width = self.width as i64;
        (0..width).contains(&(x as i64)) && (0..width).contains(&(y as i64))
    }

    /// Converts a coordinate to a cell index.
    ///
    /// `x` and `y` are checked separately, so a coordinate that runs off the end of a row never
    /// wraps into the next one.
    pub fn offset_to_index(&self, offset_coordinate: OffsetCoordinate) -> Option<usize> {
        if !self.contains(offset_coordinate) {
            return None;
        }
        let [x, y] = offset_coordinate.to_array();
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Converts a cell index back to its coordinate, or `None` when the index is out of range.
    pub fn index_to_offset(&self, index: usize) -> Option<OffsetCoordinate> {
        if index >= self.cell_count() {
            return None;
        }
        let width = self.width as usize;
        Some(OffsetCoordinate::new(
            (index % width) as i32,
            (index / width) as i32,
        ))
    }
}
