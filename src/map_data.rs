//! The read-only view of a finished legacy map.
//!
//! [`MapData`] is produced by [`GridStore::finish`](crate::grid_store::GridStore::finish) once start
//! assets are placed and offers no way to mutate it afterwards. It only owns plain vectors, so it
//! can be put behind an `Arc` and read from a render thread and a simulation thread at the same
//! time.
//!
//! Every query is bounds-checked: coordinates outside the grid answer with the same defaults as
//! [`GridStore`](crate::grid_store::GridStore) instead of panicking.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;
use enum_map::{EnumMap, enum_map};
use serde::Serialize;

use crate::{
    grid::{OffsetCoordinate, SquareGrid},
    grid_store::GridStore,
    legacy_codec::UnrecognizedCode,
    map_component::{LandscapeType, MapObject},
    player::PlayerStartInfo,
};

pub type PlayerList = ArrayVec<PlayerStartInfo, { MapData::MAX_PLAYERS }>;

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct MapData {
    grid: SquareGrid,
    /// Landscape of each cell. The index of the landscape is equal to the cell index.
    landscape_type_list: Vec<Option<LandscapeType>>,
    height_list: Vec<u8>,
    object_list: Vec<Option<MapObject>>,
    claim_list: Vec<u8>,
    accessible_list: Vec<u8>,
    resource_list: Vec<u8>,
    players: PlayerList,
    unrecognized_codes: BTreeSet<UnrecognizedCode>,
}

impl MapData {
    /// The most players a map can have. Players listed after that are ignored.
    pub const MAX_PLAYERS: usize = 32;

    pub(crate) fn new(store: GridStore, players: PlayerList) -> Self {
        let GridStore {
            grid,
            landscape_type_list,
            height_list,
            object_list,
            claim_list,
            accessible_list,
            resource_list,
            unrecognized_codes,
            start_assets_placed: _,
        } = store;

        Self {
            grid,
            landscape_type_list,
            height_list,
            object_list,
            claim_list,
            accessible_list,
            resource_list,
            players,
            unrecognized_codes,
        }
    }

    pub const fn grid(&self) -> SquareGrid {
        self.grid
    }

    pub const fn width(&self) -> u32 {
        self.grid.width()
    }

    pub const fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.grid.offset_to_index(OffsetCoordinate::new(x, y))
    }

    /// Landscape of the cell at `(x, y)`.
    ///
    /// Returns [`GridStore::UNSET_LANDSCAPE`] for a cell the map never set and
    /// [`GridStore::OUT_OF_RANGE_LANDSCAPE`] outside the grid.
    pub fn landscape_at(&self, x: i32, y: i32) -> LandscapeType {
        match self.index(x, y) {
            Some(index) => self.landscape_type_list[index].unwrap_or(GridStore::UNSET_LANDSCAPE),
            None => GridStore::OUT_OF_RANGE_LANDSCAPE,
        }
    }

    pub fn object_at(&self, x: i32, y: i32) -> Option<MapObject> {
        self.index(x, y).and_then(|index| self.object_list[index])
    }

    pub fn terrain_height_at(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |index| self.height_list[index])
    }

    /// The id of the player claiming the cell, `0` when nobody does.
    pub fn partition_claim_at(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |index| self.claim_list[index])
    }

    pub fn accessibility_at(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |index| self.accessible_list[index])
    }

    pub fn resource_at(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |index| self.resource_list[index])
    }

    /// The start tile of `player`, or `None` if the map has no such player.
    pub fn start_point_of(&self, player: usize) -> Option<OffsetCoordinate> {
        self.players.get(player).map(|info| info.start)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, player: usize) -> Option<&PlayerStartInfo> {
        self.players.get(player)
    }

    pub fn players(&self) -> &[PlayerStartInfo] {
        &self.players
    }

    /// Every distinct legacy code that could not be decoded while building this map.
    pub fn unrecognized_codes(&self) -> &BTreeSet<UnrecognizedCode> {
        &self.unrecognized_codes
    }

    /// Number of cells of each landscape type, unset cells counted as [`GridStore::UNSET_LANDSCAPE`].
    pub fn landscape_histogram(&self) -> EnumMap<LandscapeType, usize> {
        let mut histogram: EnumMap<LandscapeType, usize> = enum_map! {
            _ => 0,
        };
        for landscape_type in &self.landscape_type_list {
            histogram[landscape_type.unwrap_or(GridStore::UNSET_LANDSCAPE)] += 1;
        }
        histogram
    }

    /// Returns an iterator over all occupied cells and their objects, in index order.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn objects(&self) -> impl Iterator<Item = (OffsetCoordinate, MapObject)> + '_ {
        let grid = self.grid;
        self.object_list
            .iter()
            .enumerate()
            .filter_map(move |(index, object)| Some((grid.index_to_offset(index)?, (*object)?)))
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::MapData;
    use crate::{
        grid::OffsetCoordinate,
        grid_store::GridStore,
        legacy_codec::UnrecognizedCode,
        map_component::{LandscapeType, MapObject, Nation},
        placement_config::PlacementConfig,
        player::PlayerStartInfo,
        start_resources::StartResources,
    };

    fn no_goods() -> PlacementConfig {
        PlacementConfig::default().with_start_resources(StartResources::NoGoods)
    }

    fn sample_map() -> MapData {
        let mut store = GridStore::new(8);
        for pos in 0..64 {
            store.set_landscape(pos, if pos < 8 { 7 } else { 16 });
            store.set_landscape_height(pos, (pos % 8) as u8);
        }
        store.set_landscape(20, 32);
        store.set_player_claim(20, 1);
        store.set_accessible(20, 1);
        store.set_resources(20, 9);
        store.set_map_object(21, 4);
        store.set_landscape(22, 4242);

        store.finish(
            [
                PlayerStartInfo::with_nation(2, 5, "Player 1", Nation::Roman),
                PlayerStartInfo::new(6, 6, "Player 2", 9),
            ],
            &no_goods(),
        )
    }

    #[test]
    fn test_queries_read_the_cell_fields() {
        let map = sample_map();

        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 8);
        assert_eq!(map.landscape_at(4, 2), LandscapeType::Mountain);
        assert_eq!(map.landscape_at(3, 0), LandscapeType::DeepWater);
        assert_eq!(map.landscape_at(5, 5), LandscapeType::Grass);
        assert_eq!(map.terrain_height_at(5, 7), 5);
        assert_eq!(map.partition_claim_at(4, 2), 1);
        assert_eq!(map.accessibility_at(4, 2), 1);
        assert_eq!(map.resource_at(4, 2), 9);
        assert_eq!(map.object_at(5, 2), Some(MapObject::Stone { capacity: 4 }));
    }

    #[test]
    fn test_out_of_range_queries_return_defaults() {
        let map = sample_map();

        for (x, y) in [(-1, 0), (8, 0), (0, 8), (0, -1), (8, 2), (i32::MAX, i32::MAX)] {
            assert_eq!(map.landscape_at(x, y), LandscapeType::DeepWater, "({x}, {y})");
            assert_eq!(map.object_at(x, y), None);
            assert_eq!(map.terrain_height_at(x, y), 0);
            assert_eq!(map.partition_claim_at(x, y), 0);
            assert_eq!(map.accessibility_at(x, y), 0);
            assert_eq!(map.resource_at(x, y), 0);
        }
    }

    #[test]
    fn test_unrecognized_landscape_reads_as_unset() {
        let map = sample_map();

        assert_eq!(map.landscape_at(6, 2), LandscapeType::Grass);
        assert!(map.unrecognized_codes().contains(&UnrecognizedCode::Landscape(4242)));
        assert!(map.unrecognized_codes().contains(&UnrecognizedCode::Nation(9)));
    }

    #[test]
    fn test_players() {
        let map = sample_map();

        assert_eq!(map.player_count(), 2);
        assert_eq!(map.start_point_of(0), Some(OffsetCoordinate::new(2, 5)));
        assert_eq!(map.start_point_of(1), Some(OffsetCoordinate::new(6, 6)));
        assert_eq!(map.start_point_of(2), None);
        assert_eq!(map.player(0).map(|p| p.name.as_str()), Some("Player 1"));
        assert!(map.player(5).is_none());
    }

    #[test]
    fn test_landscape_histogram() {
        let map = sample_map();
        let histogram = map.landscape_histogram();

        assert_eq!(histogram[LandscapeType::DeepWater], 8);
        assert_eq!(histogram[LandscapeType::Mountain], 1);
        assert_eq!(histogram[LandscapeType::Grass], 55);
        assert_eq!(histogram.values().sum::<usize>(), 64);
    }

    #[test]
    fn test_objects_lists_towers_and_legacy_objects() {
        let map = sample_map();
        let objects: Vec<_> = map.objects().collect();

        assert_eq!(objects.len(), 3);
        assert_eq!(
            objects[0],
            (OffsetCoordinate::new(5, 2), MapObject::Stone { capacity: 4 })
        );
        assert_eq!(objects[1].0, OffsetCoordinate::new(2, 5));
        assert_eq!(objects[2].0, OffsetCoordinate::new(6, 6));
    }

    #[test]
    fn test_map_data_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MapData>();

        let map = Arc::new(sample_map());
        thread::scope(|scope| {
            for _ in 0..2 {
                let map = Arc::clone(&map);
                scope.spawn(move || {
                    assert_eq!(map.landscape_at(4, 2), LandscapeType::Mountain);
                });
            }
        });
    }

    #[test]
    fn test_empty_map() {
        let map = GridStore::new(0).finish(Vec::<PlayerStartInfo>::new(), &no_goods());

        assert_eq!(map.width(), 0);
        assert_eq!(map.landscape_at(0, 0), LandscapeType::DeepWater);
        assert_eq!(map.objects().count(), 0);
        assert_eq!(map.player_count(), 0);
    }
}
