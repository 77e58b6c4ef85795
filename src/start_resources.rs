use serde::{Deserialize, Serialize};

use crate::map_component::{MapObject, Material, MovableType};

/// The amount of goods and settlers each player receives around their tower.
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Debug)]
pub enum StartResources {
    NoGoods,
    LowGoods,
    MediumGoods,
    #[default]
    HighGoods,
}

impl StartResources {
    /// Stacks handed out by this setting. Every entry becomes one stack on the ground.
    const fn stacks(self) -> &'static [(Material, u8)] {
        match self {
            StartResources::NoGoods => &[],
            StartResources::LowGoods => &[
                (Material::Plank, 8),
                (Material::Plank, 8),
                (Material::Stone, 8),
                (Material::Fish, 4),
                (Material::Hammer, 2),
                (Material::Axe, 2),
            ],
            StartResources::MediumGoods => &[
                (Material::Plank, 8),
                (Material::Plank, 8),
                (Material::Plank, 8),
                (Material::Stone, 8),
                (Material::Stone, 8),
                (Material::Fish, 8),
                (Material::Bread, 4),
                (Material::Hammer, 4),
                (Material::Axe, 3),
                (Material::Saw, 2),
                (Material::Pick, 2),
            ],
            StartResources::HighGoods => &[
                (Material::Plank, 8),
                (Material::Plank, 8),
                (Material::Plank, 8),
                (Material::Plank, 8),
                (Material::Stone, 8),
                (Material::Stone, 8),
                (Material::Stone, 8),
                (Material::Coal, 8),
                (Material::IronOre, 8),
                (Material::GoldOre, 4),
                (Material::Fish, 8),
                (Material::Bread, 8),
                (Material::Meat, 8),
                (Material::Hammer, 6),
                (Material::Axe, 4),
                (Material::Saw, 2),
                (Material::Pick, 4),
                (Material::Scythe, 2),
                (Material::FishingRod, 2),
                (Material::Blade, 2),
            ],
        }
    }

    /// Settlers handed out by this setting, as `(type, how many)`.
    const fn movables(self) -> &'static [(MovableType, u8)] {
        match self {
            StartResources::NoGoods => &[],
            StartResources::LowGoods => &[
                (MovableType::Bearer, 10),
                (MovableType::Digger, 2),
                (MovableType::Builder, 2),
                (MovableType::Swordsman, 1),
            ],
            StartResources::MediumGoods => &[
                (MovableType::Bearer, 20),
                (MovableType::Digger, 4),
                (MovableType::Builder, 4),
                (MovableType::Geologist, 1),
                (MovableType::Swordsman, 3),
                (MovableType::Bowman, 2),
            ],
            StartResources::HighGoods => &[
                (MovableType::Bearer, 30),
                (MovableType::Digger, 6),
                (MovableType::Builder, 6),
                (MovableType::Geologist, 2),
                (MovableType::Pioneer, 2),
                (MovableType::Swordsman, 5),
                (MovableType::Bowman, 4),
                (MovableType::Pikeman, 2),
            ],
        }
    }

    pub fn stack_objects(self) -> Vec<MapObject> {
        self.stacks()
            .iter()
            .map(|&(material, count)| MapObject::Stack {
                material,
                count: count.min(Material::MAX_STACK_SIZE),
            })
            .collect()
    }

    pub fn movable_objects(self, player: u8) -> Vec<MapObject> {
        self.movables()
            .iter()
            .flat_map(|&(movable_type, count)| {
                (0..count).map(move |_| MapObject::Movable {
                    movable_type,
                    player,
                })
            })
            .collect()
    }

    /// Everything `player` starts with, stacks first and settlers after, in placement order.
    pub fn start_objects(self, player: u8) -> Vec<MapObject> {
        let mut objects = self.stack_objects();
        objects.extend(self.movable_objects(player));
        objects
    }
}
