//! Decoding of the numeric codes found in legacy map files.
//!
//! Every decoder is a total function over `i32`: a code outside the known table becomes
//! [`Decoded::Unrecognized`] instead of an error, and the caller decides whether to substitute a
//! fallback or report it.

use serde::{Deserialize, Serialize};

use crate::map_component::{LandscapeType, Nation, ObjectKind};

/// The result of decoding a legacy code.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum Decoded<T> {
    Known(T),
    /// The code is not part of the legacy table. The raw code is kept for diagnostics.
    Unrecognized(i32),
}

impl<T> Decoded<T> {
    pub fn known(self) -> Option<T> {
        match self {
            Decoded::Known(value) => Some(value),
            Decoded::Unrecognized(_) => None,
        }
    }

    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Decoded::Unrecognized(_))
    }

    /// Returns the decoded value, or `fallback` if the code was not recognized.
    pub fn unwrap_or(self, fallback: T) -> T {
        self.known().unwrap_or(fallback)
    }
}

/// A legacy code that failed to decode, tagged with the field it was read from.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum UnrecognizedCode {
    Landscape(i32),
    Object(i32),
    Nation(i32),
}

/// Maps a legacy landscape code to a [`LandscapeType`].
pub const fn decode_landscape(code: i32) -> Decoded<LandscapeType> {
    let landscape_type = match code {
        0 => LandscapeType::ShallowWater,
        1..=6 => LandscapeType::Water,
        7 => LandscapeType::DeepWater,
        16 => LandscapeType::Grass,
        17 => LandscapeType::GrassToMountain,
        18 => LandscapeType::DryGrass,
        32 => LandscapeType::Mountain,
        33 => LandscapeType::MountainBorder,
        48 => LandscapeType::Sand,
        64 => LandscapeType::Desert,
        80 => LandscapeType::Swamp,
        96..=99 => LandscapeType::River,
        128 => LandscapeType::Snow,
        144 => LandscapeType::Mud,
        _ => return Decoded::Unrecognized(code),
    };
    Decoded::Known(landscape_type)
}

/// Maps a legacy object code to an [`ObjectKind`].
///
/// Codes `1..=12` are stone blocks whose code is their remaining capacity.
pub const fn decode_object(code: i32) -> Decoded<ObjectKind> {
    let object_kind = match code {
        0 => ObjectKind::Empty,
        1..=12 => ObjectKind::Stone {
            capacity: code as u8,
        },
        64..=95 => ObjectKind::Tree,
        112..=127 => ObjectKind::Decoration,
        _ => return Decoded::Unrecognized(code),
    };
    Decoded::Known(object_kind)
}

/// Maps a legacy nation code to a [`Nation`].
pub const fn decode_nation(code: i32) -> Decoded<Nation> {
    let nation = match code {
        0 => Nation::Roman,
        1 => Nation::Egyptian,
        2 => Nation::Asian,
        3 => Nation::Amazon,
        _ => return Decoded::Unrecognized(code),
    };
    Decoded::Known(nation)
}

#[cfg(test)]
mod tests {
    use super::{Decoded, decode_landscape, decode_nation, decode_object};
    use crate::map_component::{LandscapeType, Nation, ObjectKind};

    #[test]
    fn test_unused_landscape_code_is_unrecognized() {
        let decoded = decode_landscape(9999);
        assert_eq!(decoded, Decoded::Unrecognized(9999));
        assert_ne!(decoded, Decoded::Known(LandscapeType::Grass));
        assert!(decoded.is_unrecognized());
    }

    #[test]
    fn test_known_landscape_codes() {
        assert_eq!(decode_landscape(16), Decoded::Known(LandscapeType::Grass));
        assert_eq!(decode_landscape(7), Decoded::Known(LandscapeType::DeepWater));
        assert_eq!(decode_landscape(97), Decoded::Known(LandscapeType::River));
        assert_eq!(decode_landscape(144), Decoded::Known(LandscapeType::Mud));
    }

    #[test]
    fn test_decoders_are_total_over_extremes() {
        for code in [i32::MIN, -1, 8, 15, 255, 256, i32::MAX] {
            assert!(decode_landscape(code).is_unrecognized(), "landscape {code}");
        }
        for code in [i32::MIN, -1, 13, 63, 96, 128, i32::MAX] {
            assert!(decode_object(code).is_unrecognized(), "object {code}");
        }
        for code in [i32::MIN, -1, 4, i32::MAX] {
            assert!(decode_nation(code).is_unrecognized(), "nation {code}");
        }
    }

    #[test]
    fn test_object_codes() {
        assert_eq!(decode_object(0), Decoded::Known(ObjectKind::Empty));
        assert_eq!(
            decode_object(5),
            Decoded::Known(ObjectKind::Stone { capacity: 5 })
        );
        assert_eq!(decode_object(70), Decoded::Known(ObjectKind::Tree));
        assert_eq!(decode_object(120), Decoded::Known(ObjectKind::Decoration));
    }

    #[test]
    fn test_nation_codes() {
        assert_eq!(decode_nation(0), Decoded::Known(Nation::Roman));
        assert_eq!(decode_nation(3), Decoded::Known(Nation::Amazon));
        assert_eq!(decode_nation(-7).unwrap_or(Nation::Roman), Nation::Roman);
    }
}
