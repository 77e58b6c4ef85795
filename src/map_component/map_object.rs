use serde::{Deserialize, Serialize};

/// The content of a cell's object slot. An empty slot is `Option::<MapObject>::None`.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum MapObject {
    Tree,
    /// A quarryable stone block. `capacity` is how many stones can still be cut from it.
    Stone { capacity: u8 },
    Decoration,
    Building {
        building_type: BuildingType,
        player: u8,
    },
    /// A pile of material lying on the ground.
    Stack { material: Material, count: u8 },
    Movable {
        movable_type: MovableType,
        player: u8,
    },
}

impl MapObject {
    /// The player owning this object, if it has an owner.
    pub const fn player(&self) -> Option<u8> {
        match self {
            MapObject::Building { player, .. } | MapObject::Movable { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Whether this object is a stockpile or a unit, the two kinds handed out as starting assets.
    pub const fn is_start_asset(&self) -> bool {
        matches!(self, MapObject::Stack { .. } | MapObject::Movable { .. })
    }
}

/// The kinds of object a legacy map can carry in its per-cell object field.
///
/// Player-owned objects never appear in that field, they are created by start asset placement.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum ObjectKind {
    Empty,
    Tree,
    Stone { capacity: u8 },
    Decoration,
}

impl ObjectKind {
    pub const fn into_map_object(self) -> Option<MapObject> {
        match self {
            ObjectKind::Empty => None,
            ObjectKind::Tree => Some(MapObject::Tree),
            ObjectKind::Stone { capacity } => Some(MapObject::Stone { capacity }),
            ObjectKind::Decoration => Some(MapObject::Decoration),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum BuildingType {
    Tower,
    Castle,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum Material {
    Plank,
    Stone,
    Trunk,
    Coal,
    IronOre,
    GoldOre,
    Iron,
    Gold,
    Fish,
    Bread,
    Meat,
    Wine,
    Axe,
    Saw,
    Pick,
    Hammer,
    Scythe,
    FishingRod,
    Blade,
    Bow,
    Spear,
}

impl Material {
    /// The most items of one material a single stack can hold.
    pub const MAX_STACK_SIZE: u8 = 8;
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum MovableType {
    Bearer,
    Digger,
    Builder,
    Geologist,
    Pioneer,
    Swordsman,
    Bowman,
    Pikeman,
}
