//! Tile handles.

use std::fmt::{self, Display};

use crate::{GROUP_COUNT, GROUP_SIZE, TILE_COUNT};

/// A stable handle to one of the sixteen tile slots of a puzzle.
///
/// A tile is identified by the solution group it was authored in and its
/// word slot within that group, never by its text. Two groups may contain the
/// same word and their tiles are still distinct. The word itself is looked up
/// through [`Puzzle::word`](crate::Puzzle::word).
///
/// # Examples
///
/// ```
/// use quartets_core::TileId;
///
/// let tile = TileId::new(2, 1);
/// assert_eq!(tile.group(), 2);
/// assert_eq!(tile.slot(), 1);
/// assert_eq!(tile.index(), 9);
/// assert_eq!(TileId::from_index(9), tile);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u8);

impl TileId {
    /// All tile handles in group-major order.
    pub const ALL: [Self; TILE_COUNT] = {
        let mut all = [Self(0); TILE_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < TILE_COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates the handle for word `slot` of group `group`.
    ///
    /// # Panics
    ///
    /// Panics if `group` or `slot` is not in the range 0-3.
    #[must_use]
    #[inline]
    pub const fn new(group: u8, slot: u8) -> Self {
        assert!((group as usize) < GROUP_COUNT);
        assert!((slot as usize) < GROUP_SIZE);
        #[expect(clippy::cast_possible_truncation)]
        let index = group * GROUP_SIZE as u8 + slot;
        Self(index)
    }

    /// Creates a handle from its arena index (0-15).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-15.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < TILE_COUNT);
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self(index)
    }

    /// Returns the arena index (0-15).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the index of the solution group this tile belongs to (0-3).
    #[must_use]
    #[inline]
    pub const fn group(self) -> usize {
        self.index() / GROUP_SIZE
    }

    /// Returns the word slot within the group (0-3).
    #[must_use]
    #[inline]
    pub const fn slot(self) -> usize {
        self.index() % GROUP_SIZE
    }

    /// Returns the four tiles of group `group` in word order.
    ///
    /// # Panics
    ///
    /// Panics if `group` is not in the range 0-3.
    #[must_use]
    pub fn group_tiles(group: usize) -> [Self; GROUP_SIZE] {
        assert!(group < GROUP_COUNT);
        std::array::from_fn(|slot| Self::from_index(group * GROUP_SIZE + slot))
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tiles_are_distinct_and_ordered() {
        for (i, tile) in TileId::ALL.into_iter().enumerate() {
            assert_eq!(tile.index(), i);
            let group = u8::try_from(tile.group()).unwrap();
            let slot = u8::try_from(tile.slot()).unwrap();
            assert_eq!(TileId::new(group, slot), tile);
        }
    }

    #[test]
    fn test_group_tiles() {
        assert_eq!(
            TileId::group_tiles(3),
            [
                TileId::from_index(12),
                TileId::from_index(13),
                TileId::from_index(14),
                TileId::from_index(15),
            ]
        );
    }

    #[test]
    #[should_panic]
    fn test_from_index_out_of_range_panics() {
        let _ = TileId::from_index(TILE_COUNT);
    }
}
