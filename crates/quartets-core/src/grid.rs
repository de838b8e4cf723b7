//! Tile rows and the tile grid.
//!
//! The grid holds all sixteen tiles in rows of four. Unsolved rows can be
//! shuffled; solved rows are fixed once created and keep their position at the
//! top of the grid in the order the groups were found.

use rand::{Rng, seq::SliceRandom as _};

use crate::{Difficulty, GROUP_COUNT, GROUP_SIZE, TILE_COUNT, TileId};

/// A row of four tiles, either unsolved or solved with a difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRow {
    tiles: [TileId; GROUP_SIZE],
    solved: Option<Difficulty>,
}

impl TileRow {
    /// Creates an unsolved row.
    #[must_use]
    pub const fn unsolved(tiles: [TileId; GROUP_SIZE]) -> Self {
        Self {
            tiles,
            solved: None,
        }
    }

    /// Creates a row solved with the given difficulty.
    #[must_use]
    pub const fn solved(tiles: [TileId; GROUP_SIZE], difficulty: Difficulty) -> Self {
        Self {
            tiles,
            solved: Some(difficulty),
        }
    }

    /// Returns the tiles of the row, left to right.
    #[must_use]
    pub const fn tiles(&self) -> &[TileId; GROUP_SIZE] {
        &self.tiles
    }

    /// Returns the difficulty the row was solved with, or `None` if unsolved.
    #[must_use]
    pub const fn solved_difficulty(&self) -> Option<Difficulty> {
        self.solved
    }

    /// Returns `true` if the row is solved.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved.is_some()
    }

    /// Returns `true` if the row holds `tile`.
    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.tiles.contains(&tile)
    }
}

/// The layout of all sixteen tiles.
///
/// # Invariants
///
/// - Every [`TileId`] appears exactly once.
/// - There are exactly four rows of four tiles.
/// - Solved rows come first, in the order they were solved, and never change.
///
/// # Examples
///
/// ```
/// use quartets_core::{Difficulty, TileGrid, TileId};
///
/// let mut grid = TileGrid::new();
/// assert_eq!(grid.unsolved_tiles().len(), 16);
///
/// grid.solve_row(TileId::group_tiles(2), Difficulty::Blue);
/// assert_eq!(grid.rows()[0].solved_difficulty(), Some(Difficulty::Blue));
/// assert_eq!(grid.unsolved_tiles().len(), 12);
/// assert_eq!(grid.tile_count(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: [TileRow; GROUP_COUNT],
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TileGrid {
    /// Creates a grid with every group laid out in its own unsolved row,
    /// in authoring order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: std::array::from_fn(|group| TileRow::unsolved(TileId::group_tiles(group))),
        }
    }

    /// Returns the rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[TileRow; GROUP_COUNT] {
        &self.rows
    }

    /// Returns the solved rows in the order they were solved.
    pub fn solved_rows(&self) -> impl Iterator<Item = &TileRow> {
        self.rows.iter().filter(|row| row.is_solved())
    }

    /// Returns the unsolved rows, top to bottom.
    pub fn unsolved_rows(&self) -> impl Iterator<Item = &TileRow> {
        self.rows.iter().filter(|row| !row.is_solved())
    }

    /// Returns all tiles, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.rows.iter().flat_map(|row| row.tiles.iter().copied())
    }

    /// Returns the tiles of unsolved rows, row by row.
    #[must_use]
    pub fn unsolved_tiles(&self) -> Vec<TileId> {
        self.unsolved_rows()
            .flat_map(|row| row.tiles.iter().copied())
            .collect()
    }

    /// Returns the number of tiles in the grid. Always [`TILE_COUNT`].
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows.len() * GROUP_SIZE
    }

    /// Returns the number of solved rows.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.solved_rows().count()
    }

    /// Returns `true` once every row is solved.
    #[must_use]
    pub fn is_all_solved(&self) -> bool {
        self.rows.iter().all(TileRow::is_solved)
    }

    /// Returns the row holding `tile`.
    #[must_use]
    pub fn row_of(&self, tile: TileId) -> &TileRow {
        self.rows
            .iter()
            .find(|row| row.contains(tile))
            .unwrap_or_else(|| unreachable!("every tile is placed in the grid"))
    }

    /// Returns `true` if `tile` sits in an unsolved row.
    #[must_use]
    pub fn is_unsolved_tile(&self, tile: TileId) -> bool {
        !self.row_of(tile).is_solved()
    }

    /// Randomly redistributes the tiles of all unsolved rows.
    ///
    /// The tiles of unsolved rows are pooled, permuted uniformly, and dealt
    /// back four at a time into the same row positions. Solved rows are left
    /// untouched. With no unsolved rows this does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use quartets_core::{Difficulty, TileGrid, TileId};
    /// use rand::SeedableRng as _;
    ///
    /// let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
    /// let mut grid = TileGrid::new();
    /// grid.solve_row(TileId::group_tiles(0), Difficulty::Yellow);
    /// let solved = grid.rows()[0];
    ///
    /// grid.shuffle_unsolved(&mut rng);
    /// assert_eq!(grid.rows()[0], solved);
    /// assert_eq!(grid.unsolved_tiles().len(), 12);
    /// ```
    pub fn shuffle_unsolved<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let mut pool = self.unsolved_tiles();
        if pool.is_empty() {
            return;
        }
        pool.shuffle(rng);

        let mut chunks = pool.chunks_exact(GROUP_SIZE);
        for row in self.rows.iter_mut().filter(|row| !row.is_solved()) {
            let chunk = chunks
                .next()
                .unwrap_or_else(|| unreachable!("pool holds four tiles per unsolved row"));
            row.tiles.copy_from_slice(chunk);
        }
    }

    /// Moves `tiles` into a new solved row.
    ///
    /// The new grid consists of the existing solved rows in their order, then
    /// the new solved row holding `tiles` in the given order, then the
    /// remaining unsolved tiles repacked into rows of four in their previous
    /// relative order.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` contains a duplicate or a tile that is not in an
    /// unsolved row.
    pub fn solve_row(&mut self, tiles: [TileId; GROUP_SIZE], difficulty: Difficulty) {
        for (i, tile) in tiles.iter().enumerate() {
            assert!(!tiles[..i].contains(tile), "duplicate tile {tile}");
            assert!(self.is_unsolved_tile(*tile), "tile {tile} is already solved");
        }

        let solved_count = self.solved_count();
        let remaining: Vec<TileId> = self
            .unsolved_tiles()
            .into_iter()
            .filter(|tile| !tiles.contains(tile))
            .collect();

        self.rows[solved_count] = TileRow::solved(tiles, difficulty);
        for (row, chunk) in self.rows[solved_count + 1..]
            .iter_mut()
            .zip(remaining.chunks_exact(GROUP_SIZE))
        {
            *row = TileRow::unsolved(
                chunk
                    .try_into()
                    .unwrap_or_else(|_| unreachable!("chunk has four tiles")),
            );
        }
        debug_assert_eq!(self.tile_count(), TILE_COUNT);
    }
}
