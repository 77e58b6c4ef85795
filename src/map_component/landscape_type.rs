use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum LandscapeType {
    ShallowWater,
    Water,
    /// Also what every query outside the grid reports.
    DeepWater,
    /// Also what an in-range cell whose landscape was never set reports.
    Grass,
    DryGrass,
    GrassToMountain,
    Mountain,
    MountainBorder,
    Sand,
    Desert,
    Swamp,
    River,
    Snow,
    Mud,
}

impl LandscapeType {
    pub const fn name(&self) -> &'static str {
        match self {
            LandscapeType::ShallowWater => "Shallow Water",
            LandscapeType::Water => "Water",
            LandscapeType::DeepWater => "Deep Water",
            LandscapeType::Grass => "Grass",
            LandscapeType::DryGrass => "Dry Grass",
            LandscapeType::GrassToMountain => "Grass To Mountain",
            LandscapeType::Mountain => "Mountain",
            LandscapeType::MountainBorder => "Mountain Border",
            LandscapeType::Sand => "Sand",
            LandscapeType::Desert => "Desert",
            LandscapeType::Swamp => "Swamp",
            LandscapeType::River => "River",
            LandscapeType::Snow => "Snow",
            LandscapeType::Mud => "Mud",
        }
    }

    pub const fn is_water(&self) -> bool {
        matches!(
            self,
            LandscapeType::ShallowWater
                | LandscapeType::Water
                | LandscapeType::DeepWater
                | LandscapeType::River
        )
    }
}
