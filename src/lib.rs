#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args
)]

mod championship;
mod config;
mod database;
mod error;
mod game;
pub mod id;
mod import;
mod phase;
mod player;
mod standings;
mod stats;
mod team;
pub mod validate;

pub use crate::championship::{Championship, Format, SINGLE_PHASE_NAME};
pub use crate::config::{AppConfig, DefaultChampionship, Role, UserEntry};
pub use crate::database::Database;
pub use crate::error::{Error, Result};
pub use crate::game::{Game, Goal, Lineup, Side, Status};
pub use crate::import::{import_teams_csv, ImportSummary, DEFAULT_COACH};
pub use crate::phase::{Phase, PhaseKind};
pub use crate::player::{Player, Position};
pub use crate::standings::Standings;
pub use crate::stats::ScorerTally;
pub use crate::team::Team;
