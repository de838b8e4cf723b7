//! Property tests driving a session with arbitrary event sequences.

use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

use proptest::prelude::*;
use quartets_core::{Puzzle, TILE_COUNT, TileId, TileRow};
use quartets_game::{Game, GameOptions, GameSeed, SubmitOutcome};

const UNIT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
enum Event {
    Toggle(usize),
    Clear,
    Shuffle,
    Submit,
    Wait(u64),
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        6 => (0..TILE_COUNT).prop_map(Event::Toggle),
        1 => Just(Event::Clear),
        1 => Just(Event::Shuffle),
        2 => Just(Event::Submit),
        1 => (0_u64..300).prop_map(Event::Wait),
    ]
}

fn word_counts(game: &Game) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for tile in game.grid().tiles() {
        *counts.entry(game.puzzle().word(tile).to_owned()).or_default() += 1;
    }
    counts
}

proptest! {
    #[test]
    fn session_invariants_hold(
        seed in any::<[u8; 32]>(),
        events in proptest::collection::vec(event(), 0..200),
    ) {
        let mut game = Game::new(
            Puzzle::canonical(),
            &GameOptions::default()
                .unit_penalty(UNIT)
                .seed(GameSeed::from_bytes(seed)),
        );
        let expected_words = word_counts(&game);
        let mut now = Instant::now();
        let mut solved: Vec<TileRow> = Vec::new();

        for event in events {
            let failures_before = game.lockout().failure_count();
            let won_before = game.is_won();
            let grid_before = game.grid().clone();

            match event {
                Event::Toggle(index) => {
                    let _ = game.toggle_tile(TileId::from_index(index));
                }
                Event::Clear => game.clear_selection(),
                Event::Shuffle => {
                    game.shuffle();
                }
                Event::Submit => match game.submit(now) {
                    Ok(SubmitOutcome::Solved { .. }) => {
                        prop_assert!(game.selection().is_empty());
                        prop_assert_eq!(game.lockout().failure_count(), failures_before);
                    }
                    Ok(SubmitOutcome::Mismatch { failures, allow_after, .. }) => {
                        prop_assert_eq!(failures, failures_before + 1);
                        prop_assert_eq!(allow_after, now + UNIT * u32::try_from(failures).unwrap());
                        prop_assert_eq!(game.grid(), &grid_before);
                    }
                    Err(_) => {
                        prop_assert_eq!(game.grid(), &grid_before);
                        prop_assert_eq!(game.lockout().failure_count(), failures_before);
                    }
                },
                Event::Wait(secs) => now += Duration::from_secs(secs),
            }

            // tile conservation
            prop_assert_eq!(game.grid().tile_count(), TILE_COUNT);
            prop_assert_eq!(&word_counts(&game), &expected_words);

            // solved rows are a growing, unchanging prefix
            let current: Vec<TileRow> = game.grid().solved_rows().copied().collect();
            prop_assert!(current.len() >= solved.len());
            prop_assert_eq!(&current[..solved.len()], &solved[..]);
            solved = current;

            // selection stays bounded and within unsolved rows
            prop_assert!(game.selection().len() <= 4);
            for tile in game.selection().iter() {
                prop_assert!(game.grid().is_unsolved_tile(tile));
            }

            // the win is terminal
            if won_before {
                prop_assert!(game.is_won());
                prop_assert_eq!(game.grid(), &grid_before);
            }
            prop_assert_eq!(game.is_won(), game.grid().is_all_solved());

            // failures are append-only
            prop_assert!(game.lockout().failure_count() >= failures_before);
        }
    }
}
