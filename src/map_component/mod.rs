//! This module contains the vocabulary stored in map cells.
//! It includes the cell's LandscapeType, the MapObject occupying it, and the Nation of a player.

pub mod landscape_type;
pub mod map_object;
pub mod nation;

pub use landscape_type::LandscapeType;
pub use map_object::{BuildingType, MapObject, Material, MovableType, ObjectKind};
pub use nation::Nation;
