use std::collections::HashSet;

use crate::{
    grid::{OffsetCoordinate, RelativeOffset},
    grid_store::GridStore,
    legacy_codec::{Decoded, UnrecognizedCode},
    map_component::{BuildingType, MapObject},
    map_data::{MapData, PlayerList},
    placement_config::PlacementConfig,
    player::PlayerStartInfo,
};

/// Lays out every player's tower, goods and settlers around their start tile.
///
/// For each player the tower goes on the start tile, then a cursor walks the square spiral (see
/// [`RelativeOffset::next_on_spiral`]) from the configured initial offset. Each pending object is
/// put on the first cell the cursor reaches that is empty and not part of the protected
/// footprint. The result depends only on the start tile, the initial cursor and the order of the
/// pending objects.
///
/// A cell outside the grid counts as empty: the object is consumed but nothing is written, so
/// players starting close to an edge may end up with fewer objects than they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartAssetPlacer {
    tower: BuildingType,
    initial_cursor: RelativeOffset,
    protected_footprint: HashSet<RelativeOffset>,
}

/// What happened to one player's pending objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PlacementOutcome {
    pub(crate) placed: usize,
    /// Objects whose spiral cell fell outside the grid or that the spiral never reached.
    pub(crate) dropped: usize,
}

impl StartAssetPlacer {
    pub fn new(
        tower: BuildingType,
        initial_cursor: RelativeOffset,
        protected_footprint: impl IntoIterator<Item = RelativeOffset>,
    ) -> Self {
        Self {
            tower,
            initial_cursor,
            protected_footprint: protected_footprint.into_iter().collect(),
        }
    }

    pub fn from_config(config: &PlacementConfig) -> Self {
        Self::new(
            config.tower,
            config.initial_cursor,
            config.protected_footprint.iter().copied(),
        )
    }

    pub fn is_protected(&self, offset: RelativeOffset) -> bool {
        self.protected_footprint.contains(&offset)
    }

    /// Places the start assets of every player. `pending[i]` belongs to `players[i]`; a player
    /// without an entry only gets a tower.
    ///
    /// Runs at most once per store. Later calls return without touching the store.
    pub(crate) fn place(
        &self,
        store: &mut GridStore,
        players: &[PlayerStartInfo],
        pending: &[Vec<MapObject>],
    ) {
        if store.start_assets_placed {
            tracing::debug!(target: "legacy_map::placement", "start_assets.already_placed");
            return;
        }
        store.start_assets_placed = true;

        for (player_id, player) in players.iter().enumerate() {
            let objects = pending.get(player_id).map_or(&[][..], Vec::as_slice);
            let outcome = self.place_for_player(store, player_id as u8, player.start, objects);

            tracing::debug!(
                target: "legacy_map::placement",
                player = player_id,
                name = %player.name,
                x = player.start.x(),
                y = player.start.y(),
                placed = outcome.placed,
                dropped = outcome.dropped,
                "start_assets.player_done"
            );
        }
    }

    fn place_for_player(
        &self,
        store: &mut GridStore,
        player: u8,
        start: OffsetCoordinate,
        objects: &[MapObject],
    ) -> PlacementOutcome {
        let grid = store.grid;

        match grid.offset_to_index(start) {
            Some(index) if store.object_list[index].is_none() => {
                store.object_list[index] = Some(MapObject::Building {
                    building_type: self.tower,
                    player,
                });
            }
            Some(index) => tracing::warn!(
                target: "legacy_map::placement",
                player,
                x = start.x(),
                y = start.y(),
                occupant = ?store.object_list[index],
                "start_assets.tower_tile_occupied"
            ),
            None => tracing::warn!(
                target: "legacy_map::placement",
                player,
                x = start.x(),
                y = start.y(),
                "start_assets.start_off_grid"
            ),
        }

        let mut outcome = PlacementOutcome::default();
        let mut cursor = self.initial_cursor.spiral();

        for &object in objects {
            let slot = cursor.by_ref().find_map(|offset| {
                if self.is_protected(offset) {
                    return None;
                }
                match grid.offset_to_index(start.offset_by(offset)) {
                    Some(index) if store.object_list[index].is_some() => None,
                    slot => Some(slot),
                }
            });

            // An exhausted spiral has long left the grid, so it drops the object too.
            match slot.flatten() {
                Some(index) => {
                    store.object_list[index] = Some(object);
                    outcome.placed += 1;
                }
                None => outcome.dropped += 1,
            }
        }

        outcome
    }
}

impl GridStore {
    /// Places the towers and the configured start resources of `players`, and freezes the map.
    pub fn finish(
        self,
        players: impl IntoIterator<Item = PlayerStartInfo>,
        config: &PlacementConfig,
    ) -> MapData {
        let players: Vec<_> = players.into_iter().collect();
        let pending: Vec<_> = (0..players.len().min(MapData::MAX_PLAYERS))
            .map(|player_id| config.start_resources.start_objects(player_id as u8))
            .collect();

        self.place_start_assets(players, &pending, &StartAssetPlacer::from_config(config))
    }

    /// Places towers and the given `pending` objects, and freezes the map.
    ///
    /// `pending[i]` is the ordered list of objects for `players[i]`.
    pub fn place_start_assets(
        mut self,
        players: impl IntoIterator<Item = PlayerStartInfo>,
        pending: &[Vec<MapObject>],
        placer: &StartAssetPlacer,
    ) -> MapData {
        let players = self.bounded_players(players);
        placer.place(&mut self, &players, pending);

        tracing::info!(
            target: "legacy_map::placement",
            width = self.grid.width(),
            players = players.len(),
            unrecognized_codes = self.unrecognized_codes.len(),
            "map_data.ready"
        );
        MapData::new(self, players)
    }

    /// Keeps at most [`MapData::MAX_PLAYERS`] players and records their unknown nation codes.
    fn bounded_players(
        &mut self,
        players: impl IntoIterator<Item = PlayerStartInfo>,
    ) -> PlayerList {
        let mut bounded = PlayerList::new();

        for player in players {
            if bounded.is_full() {
                tracing::warn!(
                    target: "legacy_map::placement",
                    max_players = MapData::MAX_PLAYERS,
                    name = %player.name,
                    "players.over_capacity"
                );
                break;
            }
            if let Decoded::Unrecognized(code) = player.nation {
                if self.unrecognized_codes.insert(UnrecognizedCode::Nation(code)) {
                    tracing::warn!(
                        target: "legacy_map::decode",
                        code,
                        player = %player.name,
                        "legacy_code.unrecognized"
                    );
                }
            }
            bounded.push(player);
        }

        bounded
    }
}
