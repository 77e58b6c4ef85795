//! Turns the per-cell fields of a legacy square map into a queryable [`MapData`], placing every
//! player's tower, goods and settlers on the way.
//!
//! ```no_run
//! use legacy_map::{GridStore, PlayerStartInfo, load_placement_config_from_env};
//!
//! let mut store = GridStore::new(64);
//! store.set_landscape(0, 16);
//! store.set_landscape_height(0, 12);
//!
//! let players = [PlayerStartInfo::new(20, 20, "Player 1", 0)];
//! let map = store.finish(players, &load_placement_config_from_env());
//! assert_eq!(map.player_count(), 1);
//! ```

pub mod grid;
pub mod grid_store;
pub mod legacy_codec;
pub mod map_component;
pub mod map_data;
pub mod placement_config;
pub mod player;
pub mod start_resources;

pub use grid::*;
pub use grid_store::{GridStore, StartAssetPlacer};
pub use legacy_codec::{Decoded, UnrecognizedCode, decode_landscape, decode_nation, decode_object};
pub use map_component::*;
pub use map_data::MapData;
pub use placement_config::{ConfigError, PlacementConfig, load_placement_config_from_env};
pub use player::PlayerStartInfo;
pub use start_resources::StartResources;
