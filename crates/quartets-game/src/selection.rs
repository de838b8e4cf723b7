use quartets_core::{GROUP_SIZE, TileId};
use tinyvec::ArrayVec;

use crate::{SelectionOperation, ToggleBlockReason};

/// The player's in-progress choice of up to four tiles.
///
/// Tiles are kept in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tiles: ArrayVec<[TileId; GROUP_SIZE]>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of selected tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns `true` if four tiles are selected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() == GROUP_SIZE
    }

    /// Returns `true` if `tile` is selected.
    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.tiles.contains(&tile)
    }

    /// Returns the selected tiles in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[TileId] {
        self.tiles.as_slice()
    }

    /// Returns the selected tiles in selection order.
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().copied()
    }

    /// Returns the four selected tiles, or `None` unless the selection is full.
    #[must_use]
    pub fn to_array(&self) -> Option<[TileId; GROUP_SIZE]> {
        self.as_slice().try_into().ok()
    }

    pub(crate) fn toggle_capability(
        &self,
        tile: TileId,
    ) -> Result<SelectionOperation, ToggleBlockReason> {
        if self.contains(tile) {
            Ok(SelectionOperation::Deselected)
        } else if self.is_full() {
            Err(ToggleBlockReason::SelectionFull)
        } else {
            Ok(SelectionOperation::Selected)
        }
    }

    pub(crate) fn toggle(&mut self, tile: TileId) -> Result<SelectionOperation, ToggleBlockReason> {
        let operation = self.toggle_capability(tile)?;
        match operation {
            SelectionOperation::Selected => self.tiles.push(tile),
            SelectionOperation::Deselected => self.tiles.retain(|t| *t != tile),
        }
        Ok(operation)
    }

    pub(crate) fn clear(&mut self) {
        self.tiles.clear();
    }
}
