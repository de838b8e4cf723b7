use std::time::Instant;

use quartets_core::{Difficulty, GROUP_SIZE, Puzzle, SolutionGroup, TileGrid, TileId, TileRow};
use rand_pcg::Pcg64;

use crate::{
    GameOptions, GameSeed, Lockout, Selection, SelectionOperation, SubmitBlockReason,
    SubmitOutcome, ToggleBlockReason,
};

/// A word-grouping game session.
///
/// Owns the tile layout, the player's selection, the lockout clock and the
/// won flag. All mutations go through the methods below; operations that do
/// not apply in the current state are ignored and report why.
///
/// # Example
///
/// ```
/// use std::time::Instant;
///
/// use quartets_core::{Difficulty, Puzzle};
/// use quartets_game::{Game, GameOptions, SubmitOutcome};
///
/// let puzzle = Puzzle::canonical();
/// let mut game = Game::new(puzzle, &GameOptions::default());
///
/// for word in ["MARK", "PATSY", "PIGEON", "SAP"] {
///     let tile = game.puzzle().tiles_with_word(word).next().unwrap();
///     game.toggle_tile(tile).unwrap();
/// }
///
/// let outcome = game.submit(Instant::now()).unwrap();
/// assert_eq!(
///     outcome,
///     SubmitOutcome::Solved {
///         difficulty: Difficulty::Yellow,
///         won: false
///     }
/// );
/// assert!(game.selection().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    grid: TileGrid,
    selection: Selection,
    lockout: Lockout,
    won: bool,
    seed: GameSeed,
    rng: Pcg64,
}

impl Game {
    /// Starts a session for `puzzle`.
    ///
    /// Tiles start laid out by group and are shuffled once unless
    /// [`GameOptions::initial_shuffle`] is disabled.
    #[must_use]
    pub fn new(puzzle: Puzzle, options: &GameOptions) -> Self {
        let seed = options.seed.unwrap_or_else(GameSeed::random);
        let mut this = Self {
            puzzle,
            grid: TileGrid::new(),
            selection: Selection::new(),
            lockout: Lockout::new(options.unit_penalty),
            won: false,
            seed,
            rng: seed.rng(),
        };
        if options.initial_shuffle {
            this.grid.shuffle_unsolved(&mut this.rng);
        }
        log::debug!("new session, seed={seed}");
        this
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the current tile layout.
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the lockout clock.
    #[must_use]
    pub fn lockout(&self) -> &Lockout {
        &self.lockout
    }

    /// Returns the seed of the shuffle random source.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Returns `true` once every group has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns `true` if `tile` is selected.
    #[must_use]
    pub fn is_selected(&self, tile: TileId) -> bool {
        self.selection.contains(tile)
    }

    /// Returns the solution group shown by a solved row.
    #[must_use]
    pub fn solved_group(&self, row: &TileRow) -> Option<&SolutionGroup> {
        row.solved_difficulty()
            .and_then(|difficulty| self.puzzle.group_by_difficulty(difficulty))
    }

    /// Returns `true` while submissions are locked at `now`.
    #[must_use]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.lockout.is_locked(now)
    }

    /// Returns the lockout left at `now` in whole minutes, rounded up.
    #[must_use]
    pub fn remaining_minutes(&self, now: Instant) -> u64 {
        self.lockout.remaining_minutes(now)
    }

    /// Returns what toggling `tile` would do without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleBlockReason::GameWon`] after the win,
    /// [`ToggleBlockReason::SolvedTile`] if the tile is in a solved row, and
    /// [`ToggleBlockReason::SelectionFull`] if the tile is not selected and
    /// four others are.
    pub fn toggle_tile_capability(
        &self,
        tile: TileId,
    ) -> Result<SelectionOperation, ToggleBlockReason> {
        if self.won {
            return Err(ToggleBlockReason::GameWon);
        }
        if !self.grid.is_unsolved_tile(tile) {
            return Err(ToggleBlockReason::SolvedTile);
        }
        self.selection.toggle_capability(tile)
    }

    /// Selects `tile`, or deselects it if it is already selected.
    ///
    /// Deselecting is always allowed. Selecting a fifth tile is ignored.
    ///
    /// # Errors
    ///
    /// Returns the same reasons as [`Game::toggle_tile_capability`]; the
    /// state is unchanged in that case.
    pub fn toggle_tile(&mut self, tile: TileId) -> Result<SelectionOperation, ToggleBlockReason> {
        self.toggle_tile_capability(tile)
            .and_then(|_| self.selection.toggle(tile))
            .inspect_err(|reason| log::debug!("ignored toggle of {tile}: {reason}"))
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Randomly redistributes the tiles of all unsolved rows.
    ///
    /// Solved rows and the selection are unchanged. Returns the number of
    /// tiles that were redistributed, which is zero once the puzzle is won.
    pub fn shuffle(&mut self) -> usize {
        if self.won {
            return 0;
        }
        self.grid.shuffle_unsolved(&mut self.rng);
        let count = self.grid.unsolved_tiles().len();
        log::debug!("shuffled {count} tiles");
        count
    }

    /// Returns whether a submission at `now` would be evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlockReason::GameWon`] after the win,
    /// [`SubmitBlockReason::IncompleteSelection`] unless exactly four tiles
    /// are selected, and [`SubmitBlockReason::Locked`] while locked out.
    pub fn submit_capability(&self, now: Instant) -> Result<(), SubmitBlockReason> {
        self.submittable_tiles(now).map(|_| ())
    }

    fn submittable_tiles(&self, now: Instant) -> Result<[TileId; GROUP_SIZE], SubmitBlockReason> {
        if self.won {
            return Err(SubmitBlockReason::GameWon);
        }
        let tiles = self
            .selection
            .to_array()
            .ok_or(SubmitBlockReason::IncompleteSelection {
                selected: self.selection.len(),
            })?;
        if self.lockout.is_locked(now) {
            return Err(SubmitBlockReason::Locked {
                remaining: self.lockout.remaining(now),
            });
        }
        Ok(tiles)
    }

    /// Checks the selection against the solution groups.
    ///
    /// On a match, the selected tiles become a new solved row below the
    /// existing ones, the remaining tiles are repacked in their current order,
    /// and the selection is cleared. Finding the last group wins the game.
    ///
    /// On a mismatch, a failure is recorded at `now` and submissions are
    /// locked; the grid and the selection are left as they are.
    ///
    /// # Errors
    ///
    /// Returns the same reasons as [`Game::submit_capability`]; nothing is
    /// evaluated or recorded in that case.
    pub fn submit(&mut self, now: Instant) -> Result<SubmitOutcome, SubmitBlockReason> {
        let tiles = self
            .submittable_tiles(now)
            .inspect_err(|reason| log::debug!("ignored submission: {reason}"))?;
        let tiers = tiles.map(|tile| self.puzzle.difficulty_of(tile));

        if let Some(difficulty) = common_tier(&tiers) {
            self.grid.solve_row(tiles, difficulty);
            self.selection.clear();
            self.won = self.grid.is_all_solved();
            log::info!(
                "found group {:?} ({difficulty})",
                self.puzzle
                    .group_by_difficulty(difficulty)
                    .map_or("", SolutionGroup::name)
            );
            if self.won {
                log::info!(
                    "puzzle solved with {} wrong guesses",
                    self.lockout.failure_count()
                );
            }
            return Ok(SubmitOutcome::Solved {
                difficulty,
                won: self.won,
            });
        }

        let allow_after = self.lockout.record_failure(now);
        let failures = self.lockout.failure_count();
        let one_away = is_one_away(&tiers);
        log::debug!(
            "wrong guess #{failures}, locked for {:?}{}",
            self.lockout.penalty_for(failures),
            if one_away { " (one away)" } else { "" }
        );
        Ok(SubmitOutcome::Mismatch {
            failures,
            allow_after,
            one_away,
        })
    }
}

fn common_tier(tiers: &[Difficulty; GROUP_SIZE]) -> Option<Difficulty> {
    let first = tiers[0];
    tiers.iter().all(|&d| d == first).then_some(first)
}

fn is_one_away(tiers: &[Difficulty; GROUP_SIZE]) -> bool {
    Difficulty::ALL
        .into_iter()
        .any(|d| tiers.iter().filter(|&&t| t == d).count() == GROUP_SIZE - 1)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use quartets_core::TILE_COUNT;

    use super::*;

    const UNIT: Duration = Duration::from_secs(60);

    fn new_game() -> Game {
        Game::new(
            Puzzle::canonical(),
            &GameOptions::default()
                .unit_penalty(UNIT)
                .seed(GameSeed::from_bytes([1; 32])),
        )
    }

    fn tile(game: &Game, word: &str) -> TileId {
        game.puzzle()
            .tiles_with_word(word)
            .next()
            .unwrap_or_else(|| panic!("no tile for {word}"))
    }

    fn select(game: &mut Game, words: &[&str]) {
        for &word in words {
            let tile = tile(game, word);
            game.toggle_tile(tile).unwrap();
        }
    }

    fn words_of(game: &Game, row: &TileRow) -> Vec<String> {
        row.tiles()
            .iter()
            .map(|&t| game.puzzle().word(t).to_owned())
            .collect()
    }

    #[test]
    fn test_new_game_is_shuffled_and_unsolved() {
        let game = new_game();
        assert!(!game.is_won());
        assert!(game.selection().is_empty());
        assert_eq!(game.grid().unsolved_tiles().len(), TILE_COUNT);
        assert_eq!(game.lockout().failure_count(), 0);
        assert_eq!(game.seed(), GameSeed::from_bytes([1; 32]));
    }

    #[test]
    fn test_initial_shuffle_can_be_disabled() {
        let game = Game::new(
            Puzzle::canonical(),
            &GameOptions::default().initial_shuffle(false),
        );
        assert_eq!(game.grid(), &TileGrid::new());
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(new_game().grid(), new_game().grid());
    }

    #[test]
    fn test_matching_submission_solves_row() {
        let mut game = new_game();
        let others_before: Vec<TileId> = game
            .grid()
            .unsolved_tiles()
            .into_iter()
            .filter(|&t| t.group() != 0)
            .collect();

        select(&mut game, &["MARK", "PATSY", "PIGEON", "SAP"]);
        let now = Instant::now();
        let outcome = game.submit(now).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Solved {
                difficulty: Difficulty::Yellow,
                won: false
            }
        );
        let row = game.grid().rows()[0];
        assert_eq!(row.solved_difficulty(), Some(Difficulty::Yellow));
        assert_eq!(words_of(&game, &row), ["MARK", "PATSY", "PIGEON", "SAP"]);
        assert_eq!(
            game.solved_group(&row).map(SolutionGroup::name),
            Some("TARGET OF A SCAM")
        );
        assert!(game.selection().is_empty());
        assert_eq!(game.grid().unsolved_tiles(), others_before);
        assert_eq!(game.lockout().failure_count(), 0);
    }

    #[test]
    fn test_mismatch_escalates_lockout() {
        let mut game = new_game();
        let grid_before = game.grid().clone();
        select(&mut game, &["MARK", "KC", "HEN", "ELO"]);
        let selection_before = game.selection().clone();

        let t0 = Instant::now();
        let outcome = game.submit(t0).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Mismatch {
                failures: 1,
                allow_after: t0 + UNIT,
                one_away: false,
            }
        );
        assert_eq!(game.grid(), &grid_before);
        assert_eq!(game.selection(), &selection_before);
        assert!(game.is_locked(t0));
        assert_eq!(game.remaining_minutes(t0), 1);

        let t1 = t0 + UNIT;
        assert!(!game.is_locked(t1));
        let outcome = game.submit(t1).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Mismatch {
                failures: 2,
                allow_after: t1 + 2 * UNIT,
                one_away: false,
            }
        );
        assert_eq!(game.lockout().allow_after(), Some(t1 + 2 * UNIT));
    }

    #[test]
    fn test_mismatch_with_huge_penalty_stays_locked() {
        let mut game = Game::new(
            Puzzle::canonical(),
            &GameOptions::default()
                .unit_penalty(Duration::from_secs(u64::MAX))
                .seed(GameSeed::from_bytes([1; 32])),
        );
        select(&mut game, &["MARK", "KC", "HEN", "ELO"]);
        let t0 = Instant::now();
        let outcome = game.submit(t0).unwrap();
        assert!(outcome.is_mismatch());
        assert!(game.is_locked(t0));
        assert!(matches!(
            game.submit(t0 + UNIT),
            Err(SubmitBlockReason::Locked { .. })
        ));
        assert_eq!(game.lockout().failure_count(), 1);
    }

    #[test]
    fn test_one_away_is_reported() {
        let mut game = new_game();
        select(&mut game, &["MARK", "PATSY", "PIGEON", "KC"]);
        let outcome = game.submit(Instant::now()).unwrap();
        assert!(matches!(
            outcome,
            SubmitOutcome::Mismatch { one_away: true, .. }
        ));
    }

    #[test]
    fn test_submit_blocked_while_locked() {
        let mut game = new_game();
        select(&mut game, &["MARK", "KC", "HEN", "ELO"]);
        let t0 = Instant::now();
        game.submit(t0).unwrap();

        game.clear_selection();
        select(&mut game, &["MARK", "PATSY", "PIGEON", "SAP"]);
        let t = t0 + Duration::from_secs(30);
        assert_eq!(
            game.submit(t),
            Err(SubmitBlockReason::Locked {
                remaining: Duration::from_secs(30)
            })
        );
        assert_eq!(game.grid().solved_count(), 0);
        assert_eq!(game.lockout().failure_count(), 1);

        assert!(game.submit(t0 + UNIT).unwrap().is_solved());
    }

    #[test]
    fn test_submit_blocked_with_partial_selection() {
        let mut game = new_game();
        select(&mut game, &["MARK", "PATSY", "PIGEON", "SAP"]);
        game.toggle_tile(tile(&game, "SAP")).unwrap();
        let now = Instant::now();
        assert_eq!(
            game.submit_capability(now),
            Err(SubmitBlockReason::IncompleteSelection { selected: 3 })
        );
        assert_eq!(
            game.submit(now),
            Err(SubmitBlockReason::IncompleteSelection { selected: 3 })
        );
        assert_eq!(game.lockout().failure_count(), 0);
    }

    #[test]
    fn test_success_does_not_reset_failures() {
        let mut game = new_game();
        select(&mut game, &["MARK", "KC", "HEN", "ELO"]);
        let t0 = Instant::now();
        game.submit(t0).unwrap();
        game.clear_selection();

        select(&mut game, &["MARK", "PATSY", "PIGEON", "SAP"]);
        let t1 = t0 + UNIT;
        assert!(game.submit(t1).unwrap().is_solved());

        select(&mut game, &["KC", "PRINCE", "HEN", "GOOSE"]);
        let t2 = t1 + UNIT;
        let outcome = game.submit(t2).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Mismatch {
                failures: 2,
                allow_after: t2 + 2 * UNIT,
                one_away: false,
            }
        );
    }

    #[test]
    fn test_toggle_rules() {
        let mut game = new_game();
        select(&mut game, &["MARK", "PATSY", "PIGEON", "SAP"]);

        let kc = tile(&game, "KC");
        assert_eq!(
            game.toggle_tile_capability(kc),
            Err(ToggleBlockReason::SelectionFull)
        );
        assert_eq!(game.toggle_tile(kc), Err(ToggleBlockReason::SelectionFull));
        assert_eq!(game.selection().len(), 4);

        game.submit(Instant::now()).unwrap();
        let mark = tile(&game, "MARK");
        assert_eq!(game.toggle_tile(mark), Err(ToggleBlockReason::SolvedTile));
        assert!(game.selection().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut game = new_game();
        select(&mut game, &["MARK", "KC", "HEN", "ELO"]);
        let before = game.selection().clone();
        let hen = tile(&game, "HEN");
        assert_eq!(game.toggle_tile(hen), Ok(SelectionOperation::Deselected));
        assert_eq!(game.toggle_tile(hen), Ok(SelectionOperation::Selected));
        let mut after: Vec<TileId> = game.selection().iter().collect();
        let mut expected: Vec<TileId> = before.iter().collect();
        after.sort();
        expected.sort();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_shuffle_keeps_selection_and_solved_rows() {
        let mut game = new_game();
        select(&mut game, &["KC", "PRINCE", "SLY", "STING"]);
        game.submit(Instant::now()).unwrap();
        select(&mut game, &["HEN", "ELO"]);
        let solved_row = game.grid().rows()[0];
        let selection = game.selection().clone();

        assert_eq!(game.shuffle(), 12);
        assert_eq!(game.grid().rows()[0], solved_row);
        assert_eq!(game.selection(), &selection);
    }

    #[test]
    fn test_win_in_any_order_is_terminal() {
        let mut game = new_game();
        let mut now = Instant::now();
        let groups = [
            ["ELO", "MOAN", "SOL", "U"],
            ["HEN", "GOOSE", "PIPER", "RING"],
            ["MARK", "PATSY", "PIGEON", "SAP"],
            ["STING", "SLY", "PRINCE", "KC"],
        ];
        for (i, words) in groups.into_iter().enumerate() {
            select(&mut game, &words);
            let outcome = game.submit(now).unwrap();
            let SubmitOutcome::Solved { won, .. } = outcome else {
                panic!("expected a match, got {outcome:?}");
            };
            assert_eq!(won, i == 3);
            now += Duration::from_secs(1);
        }

        assert!(game.is_won());
        assert!(game.grid().is_all_solved());
        let order: Vec<Option<Difficulty>> = game
            .grid()
            .rows()
            .iter()
            .map(TileRow::solved_difficulty)
            .collect();
        assert_eq!(
            order,
            [
                Some(Difficulty::Purple),
                Some(Difficulty::Blue),
                Some(Difficulty::Yellow),
                Some(Difficulty::Green)
            ]
        );

        let grid = game.grid().clone();
        assert_eq!(game.submit(now), Err(SubmitBlockReason::GameWon));
        assert_eq!(
            game.toggle_tile(TileId::from_index(0)),
            Err(ToggleBlockReason::GameWon)
        );
        assert_eq!(game.shuffle(), 0);
        assert_eq!(game.grid(), &grid);
    }
}
