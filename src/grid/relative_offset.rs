use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A signed `(dx, dy)` displacement from some anchor cell, usually a player's start tile.
///
/// Relative offsets describe building footprints and drive the spiral walk used when starting
/// assets are laid out around a tower. They are never stored in the map itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct RelativeOffset(IVec2);

impl RelativeOffset {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self(IVec2::new(dx, dy))
    }

    pub const fn dx(&self) -> i32 {
        self.0.x
    }

    pub const fn dy(&self) -> i32 {
        self.0.y
    }

    /// The index of the square ring this offset lies on, `max(|dx|, |dy|)`.
    #[inline]
    pub const fn ring(&self) -> u32 {
        let (dx, dy) = (self.0.x.unsigned_abs(), self.0.y.unsigned_abs());
        if dx > dy { dx } else { dy }
    }

    /// Returns the offset that follows `self` on the outward square spiral.
    ///
    /// The rules are checked in order, with `basis` being [`RelativeOffset::ring`]:
    ///
    /// 1. `dx == basis && dy > -basis` steps to `(dx, dy - 1)`
    /// 2. `dx == -basis && dy <= basis` steps to `(dx, dy + 1)`
    /// 3. `dx < basis && dy == basis` steps to `(dx + 1, dy)`
    /// 4. `dx > -basis && dy == -basis` steps to `(dx - 1, dy)`
    ///
    /// Every offset lies on the border of its ring, so one of the rules always matches. Walking
    /// up the left edge past the ring's corner moves the cursor onto the next ring, which is how
    /// the walk grows outward. The origin is handled by rule 2 and steps to `(0, 1)`.
    ///
    /// Returns `None` once the next offset would leave the `i32` range.
    pub fn next_on_spiral(self) -> Option<Self> {
        let (x, y) = (i64::from(self.dx()), i64::from(self.dy()));
        let basis = i64::from(self.ring());

        let (x, y) = if x == basis && y > -basis {
            (x, y - 1)
        } else if x == -basis && y <= basis {
            (x, y + 1)
        } else if x < basis && y == basis {
            (x + 1, y)
        } else {
            debug_assert!(x > -basis && y == -basis);
            (x - 1, y)
        };

        Some(Self::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }

    /// Returns an iterator over the spiral, starting with `self`.
    ///
    /// The walk only ends at the edge of the `i32` range.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn spiral(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |offset| offset.next_on_spiral())
    }
}

impl From<[i32; 2]> for RelativeOffset {
    fn from(value: [i32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<RelativeOffset> for [i32; 2] {
    fn from(value: RelativeOffset) -> Self {
        [value.dx(), value.dy()]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::RelativeOffset;

    #[test]
    fn test_spiral_from_default_cursor() {
        let expected = [
            RelativeOffset::new(0, 2),
            RelativeOffset::new(1, 2),
            RelativeOffset::new(2, 2),
            RelativeOffset::new(2, 1),
            RelativeOffset::new(2, 0),
            RelativeOffset::new(2, -1),
            RelativeOffset::new(2, -2),
            RelativeOffset::new(1, -2),
        ];

        let produced: Vec<_> = RelativeOffset::new(-1, 2).spiral().skip(1).take(8).collect();
        assert_eq!(produced, expected, "FAIL spiral_from_default_cursor");
    }

    #[test]
    fn test_spiral_from_origin() {
        let produced: Vec<_> = RelativeOffset::ZERO.spiral().take(6).collect();
        assert_eq!(
            produced,
            vec![
                RelativeOffset::new(0, 0),
                RelativeOffset::new(0, 1),
                RelativeOffset::new(1, 1),
                RelativeOffset::new(1, 0),
                RelativeOffset::new(1, -1),
                RelativeOffset::new(0, -1),
            ]
        );
    }

    #[test]
    fn test_spiral_leaves_ring_through_left_edge() {
        assert_eq!(
            RelativeOffset::new(-2, 2).next_on_spiral(),
            Some(RelativeOffset::new(-2, 3))
        );
        assert_eq!(
            RelativeOffset::new(-2, 3).next_on_spiral(),
            Some(RelativeOffset::new(-1, 3))
        );
    }

    #[test]
    fn test_spiral_at_i32_limits() {
        let min = RelativeOffset::new(i32::MIN, 0);
        assert_eq!(min.ring(), 1 << 31);
        assert_eq!(min.next_on_spiral(), Some(RelativeOffset::new(i32::MIN, 1)));

        assert_eq!(RelativeOffset::new(-i32::MAX, i32::MAX).next_on_spiral(), None);
        assert_eq!(RelativeOffset::new(i32::MIN, i32::MAX).next_on_spiral(), None);
        assert_eq!(RelativeOffset::new(i32::MIN, i32::MAX - 1).spiral().count(), 2);
    }

    #[test]
    fn test_spiral_covers_every_offset_of_a_square() {
        // Starting at the origin, every offset with ring <= 3 must be visited before ring 5 is
        // entered, and none of them twice.
        let mut visited = HashSet::new();
        for offset in RelativeOffset::ZERO.spiral().take_while(|o| o.ring() < 5) {
            assert!(visited.insert(offset), "offset {offset:?} visited twice");
        }
        for dx in -3..=3 {
            for dy in -3..=3 {
                assert!(visited.contains(&RelativeOffset::new(dx, dy)));
            }
        }
    }

    #[test]
    fn test_serde_as_pair() {
        let offset: RelativeOffset = serde_json::from_str("[-1, 2]").unwrap();
        assert_eq!(offset, RelativeOffset::new(-1, 2));
        assert_eq!(serde_json::to_string(&offset).unwrap(), "[-1,2]");
    }
}
