use std::{io, path::PathBuf};

use quartets_core::PuzzleParseError;

/// Failures that stop the application before or while it runs.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AppError {
    #[display("failed to read puzzle file {}", path.display())]
    ReadPuzzle {
        path: PathBuf,
        #[error(source)]
        error: io::Error,
    },
    #[display("invalid puzzle file {}", path.display())]
    ParsePuzzle {
        path: PathBuf,
        #[error(source)]
        error: PuzzleParseError,
    },
    #[display("failed to run the window")]
    Eframe {
        #[error(source)]
        error: eframe::Error,
    },
}
