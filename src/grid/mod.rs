mod offset_coordinate;
mod relative_offset;
mod square_grid;

pub use offset_coordinate::OffsetCoordinate;
pub use relative_offset::RelativeOffset;
pub use square_grid::SquareGrid;
