//! This module defines the [`GridStore`] struct, the mutable half of a legacy map.
//!
//! A decoder fills the store one cell at a time through the `set_*` methods, in any order.
//! Positions come straight from the legacy file and are not trusted: every setter ignores a
//! position outside `[0, width²)`, and every getter answers it with a fixed default.
//!
//! Once the players are known the store is consumed by [`GridStore::finish`] (or
//! [`GridStore::place_start_assets`]), which lays out each player's tower, goods and settlers and
//! returns the read-only [`MapData`](crate::map_data::MapData). There is no way back from
//! `MapData` to a `GridStore`, so start assets cannot be placed twice.
//!
//! Its method contains 2 parts:
//! 1. The storage and the lenient setters/getters, included in the `mod.rs` file.
//! 2. The start asset placement, defined in the [`impls`] module.

use std::collections::BTreeSet;

use crate::{
    grid::SquareGrid,
    legacy_codec::{Decoded, UnrecognizedCode, decode_landscape, decode_object},
    map_component::{LandscapeType, MapObject},
};

mod impls;

pub use impls::*;

#[derive(PartialEq, Debug)]
pub struct GridStore {
    pub(crate) grid: SquareGrid,
    /// Landscape of each cell, `None` until the decoder sets it.
    pub(crate) landscape_type_list: Vec<Option<LandscapeType>>,
    pub(crate) height_list: Vec<u8>,
    pub(crate) object_list: Vec<Option<MapObject>>,
    /// Owner claim of each cell. `0` is unclaimed, `1` is the first player and so on.
    pub(crate) claim_list: Vec<u8>,
    pub(crate) accessible_list: Vec<u8>,
    pub(crate) resource_list: Vec<u8>,
    /// Every distinct legacy code that could not be decoded.
    pub(crate) unrecognized_codes: BTreeSet<UnrecognizedCode>,
    /// Latch for the placement pass, see [`StartAssetPlacer::place`].
    pub(crate) start_assets_placed: bool,
}

impl GridStore {
    /// Landscape reported for a cell outside the grid.
    pub const OUT_OF_RANGE_LANDSCAPE: LandscapeType = LandscapeType::DeepWater;
    /// Landscape reported for a cell inside the grid whose landscape was never set.
    pub const UNSET_LANDSCAPE: LandscapeType = LandscapeType::Grass;

    /// Creates an empty `width` × `width` store.
    pub fn new(width: u32) -> Self {
        let grid = SquareGrid::new(width);
        let size = grid.cell_count();

        Self {
            grid,
            landscape_type_list: vec![None; size],
            height_list: vec![0; size],
            object_list: vec![None; size],
            claim_list: vec![0; size],
            accessible_list: vec![0; size],
            resource_list: vec![0; size],
            unrecognized_codes: BTreeSet::new(),
            start_assets_placed: false,
        }
    }

    /// Changes the size of the store. All cells are reset, nothing is carried over.
    pub fn resize(&mut self, width: u32) {
        *self = Self::new(width);
    }

    pub const fn grid(&self) -> SquareGrid {
        self.grid
    }

    pub const fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn unrecognized_codes(&self) -> &BTreeSet<UnrecognizedCode> {
        &self.unrecognized_codes
    }

    pub fn set_landscape_height(&mut self, pos: i32, height: u8) {
        if let Some(index) = self.grid.checked_index(pos) {
            self.height_list[index] = height;
        }
    }

    /// Sets the landscape from its legacy code.
    ///
    /// An unknown code leaves the cell unset, so it reads as [`GridStore::UNSET_LANDSCAPE`].
    pub fn set_landscape(&mut self, pos: i32, code: i32) {
        let Some(index) = self.grid.checked_index(pos) else {
            return;
        };
        let decoded = decode_landscape(code);
        if let Decoded::Unrecognized(code) = decoded {
            self.record_unrecognized(pos, UnrecognizedCode::Landscape(code));
        }
        self.landscape_type_list[index] = decoded.known();
    }

    pub fn set_landscape_type(&mut self, pos: i32, landscape_type: LandscapeType) {
        if let Some(index) = self.grid.checked_index(pos) {
            self.landscape_type_list[index] = Some(landscape_type);
        }
    }

    /// Sets the object from its legacy code.
    ///
    /// An unknown code empties the slot.
    pub fn set_map_object(&mut self, pos: i32, code: i32) {
        let Some(index) = self.grid.checked_index(pos) else {
            return;
        };
        let decoded = decode_object(code);
        if let Decoded::Unrecognized(code) = decoded {
            self.record_unrecognized(pos, UnrecognizedCode::Object(code));
        }
        self.object_list[index] = decoded.known().and_then(|kind| kind.into_map_object());
    }

    pub fn set_object(&mut self, pos: i32, object: Option<MapObject>) {
        if let Some(index) = self.grid.checked_index(pos) {
            self.object_list[index] = object;
        }
    }

    pub fn set_player_claim(&mut self, pos: i32, player: u8) {
        if let Some(index) = self.grid.checked_index(pos) {
            self.claim_list[index] = player;
        }
    }

    pub fn set_accessible(&mut self, pos: i32, accessible: u8) {
        if let Some(index) = self.grid.checked_index(pos) {
            self.accessible_list[index] = accessible;
        }
    }

    pub fn set_resources(&mut self, pos: i32, resources: u8) {
        if let Some(index) = self.grid.checked_index(pos) {
            self.resource_list[index] = resources;
        }
    }

    pub fn landscape_at(&self, pos: i32) -> LandscapeType {
        match self.grid.checked_index(pos) {
            Some(index) => self.landscape_type_list[index].unwrap_or(Self::UNSET_LANDSCAPE),
            None => Self::OUT_OF_RANGE_LANDSCAPE,
        }
    }

    pub fn object_at(&self, pos: i32) -> Option<MapObject> {
        self.grid
            .checked_index(pos)
            .and_then(|index| self.object_list[index])
    }

    pub fn height_at(&self, pos: i32) -> u8 {
        self.byte_at(&self.height_list, pos)
    }

    pub fn claim_at(&self, pos: i32) -> u8 {
        self.byte_at(&self.claim_list, pos)
    }

    pub fn accessibility_at(&self, pos: i32) -> u8 {
        self.byte_at(&self.accessible_list, pos)
    }

    pub fn resource_at(&self, pos: i32) -> u8 {
        self.byte_at(&self.resource_list, pos)
    }

    fn byte_at(&self, list: &[u8], pos: i32) -> u8 {
        self.grid
            .checked_index(pos)
            .map_or(0, |index| list[index])
    }

    /// Remembers `code` and logs it the first time it is seen.
    pub(crate) fn record_unrecognized(&mut self, pos: i32, code: UnrecognizedCode) {
        if self.unrecognized_codes.insert(code) {
            let width = self.grid.width().max(1) as i32;
            tracing::warn!(
                target: "legacy_map::decode",
                ?code,
                x = pos % width,
                y = pos / width,
                "legacy_code.unrecognized"
            );
        }
    }
}
