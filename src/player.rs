use serde::{Deserialize, Serialize};

use crate::{
    grid::OffsetCoordinate,
    legacy_codec::{Decoded, decode_nation},
    map_component::Nation,
};

/// What a legacy map says about one player: where they start, their name and their nation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStartInfo {
    pub start: OffsetCoordinate,
    pub name: String,
    pub nation: Decoded<Nation>,
}

impl PlayerStartInfo {
    /// Creates the start info from the raw values of a legacy player record.
    pub fn new(x: i32, y: i32, name: impl Into<String>, nation_code: i32) -> Self {
        Self {
            start: OffsetCoordinate::new(x, y),
            name: name.into(),
            nation: decode_nation(nation_code),
        }
    }

    pub fn with_nation(x: i32, y: i32, name: impl Into<String>, nation: Nation) -> Self {
        Self {
            start: OffsetCoordinate::new(x, y),
            name: name.into(),
            nation: Decoded::Known(nation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerStartInfo;
    use crate::{grid::OffsetCoordinate, legacy_codec::Decoded, map_component::Nation};

    #[test]
    fn test_nation_code_is_decoded() {
        let player = PlayerStartInfo::new(12, 40, "Octavianus", 1);
        assert_eq!(player.start, OffsetCoordinate::new(12, 40));
        assert_eq!(player.nation, Decoded::Known(Nation::Egyptian));

        let player = PlayerStartInfo::new(0, 0, "Unknown", 42);
        assert_eq!(player.nation, Decoded::Unrecognized(42));
    }
}
