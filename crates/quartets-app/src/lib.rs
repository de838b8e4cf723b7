//! Shared library module for the Quartets app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

pub use self::{app::QuartetsApp, config::Args, error::AppError};
