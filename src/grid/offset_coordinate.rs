use core::convert::From;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::RelativeOffset;

/// An absolute coordinate on the map grid.
///
/// The origin `(0, 0)` is the first cell of the first row, `x` grows along a row and `y` grows
/// from row to row. Valid coordinates satisfy `x ∈ [0, width)` and `y ∈ [0, height)`, but the type
/// itself is unbounded: legacy start positions and spiral cursors can point outside the grid, and
/// it is up to [`SquareGrid`](super::SquareGrid) to decide whether a coordinate resolves to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetCoordinate(pub IVec2);

impl OffsetCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    pub const fn into_inner(self) -> IVec2 {
        self.0
    }

    pub const fn to_array(self) -> [i32; 2] {
        [self.0.x, self.0.y]
    }

    /// Returns the coordinate reached by moving `offset` away from `self`.
    ///
    /// Uses wrapping arithmetic so that hostile legacy coordinates near `i32::MAX` resolve to some
    /// (off-grid) coordinate instead of overflowing.
    pub const fn offset_by(self, offset: RelativeOffset) -> Self {
        Self::new(
            self.0.x.wrapping_add(offset.dx()),
            self.0.y.wrapping_add(offset.dy()),
        )
    }

    /// Chebyshev distance, i.e. the number of king moves between two coordinates.
    pub fn chebyshev_distance_to(self, rhs: Self) -> u32 {
        let delta = self.0 - rhs.0;
        delta.x.unsigned_abs().max(delta.y.unsigned_abs())
    }
}

impl From<[i32; 2]> for OffsetCoordinate {
    fn from(value: [i32; 2]) -> Self {
        OffsetCoordinate::new(value[0], value[1])
    }
}
