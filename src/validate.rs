//! Boundary validation. The entities accept whatever they are given;
//! these checks run before domain objects are built, collect every
//! applicable violation instead of stopping at the first, and report
//! each one as a typed variant with a human-readable message.

use crate::championship::{Championship, Format};
use crate::id::PlayerId;
use crate::player::Position;
use crate::team::Team;
use std::collections::BTreeSet;
use thiserror::Error;

pub const STARTERS_REQUIRED: usize = 11;
pub const BENCH_LIMIT: usize = 12;
pub const SQUAD_LIMIT: usize = 23;
pub const NAME_MIN_CHARS: usize = 3;
pub const MINUTE_LIMIT: u8 = 120;
pub const NUMBER_MIN: u8 = 1;
pub const NUMBER_MAX: u8 = 99;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupViolation {
    #[error("exactly 11 starters are required, got {0}")]
    StarterCount(usize),
    #[error("at most 12 bench players are allowed, got {0}")]
    BenchOverflow(usize),
    #[error("a matchday squad is limited to 23 players, got {0}")]
    SquadOverflow(usize),
    #[error("at least one starter must be a goalkeeper")]
    NoGoalkeeper,
    #[error("a player appears more than once in the lineup")]
    DuplicatePlayer,
    #[error("the roster has {0} players, not enough to field 11 starters")]
    RosterTooSmall(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationViolation {
    #[error("the team name is required")]
    EmptyName,
    #[error("the team name must have at least 3 characters")]
    NameTooShort,
    #[error("a team named {0:?} is already registered")]
    DuplicateName(String),
    #[error("the jersey number must be between 1 and 99, got {0}")]
    NumberOutOfRange(u8),
    #[error("jersey number {0} is already taken in this team")]
    NumberTaken(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchViolation {
    #[error("a knockout game cannot end level; record a winner (extra time or penalties)")]
    KnockoutDraw,
    #[error("the goal minute must be between 0 and 120, got {0}")]
    MinuteOutOfRange(u8),
}

/// Checks one team's matchday selection against the roster it came from.
pub fn validate_lineup(
    team: &Team,
    starters: &[PlayerId],
    bench: &[PlayerId],
) -> Vec<LineupViolation> {
    let mut violations = Vec::new();

    if team.roster.len() < STARTERS_REQUIRED {
        violations.push(LineupViolation::RosterTooSmall(team.roster.len()));
    }
    if starters.len() != STARTERS_REQUIRED {
        violations.push(LineupViolation::StarterCount(starters.len()));
    }
    if bench.len() > BENCH_LIMIT {
        violations.push(LineupViolation::BenchOverflow(bench.len()));
    }
    if starters.len() + bench.len() > SQUAD_LIMIT {
        violations.push(LineupViolation::SquadOverflow(starters.len() + bench.len()));
    }

    let goalkeepers = starters
        .iter()
        .filter_map(|id| team.find_player(*id))
        .filter(|p| p.position == Position::Goalkeeper)
        .count();
    if goalkeepers < 1 {
        violations.push(LineupViolation::NoGoalkeeper);
    }

    let mut seen = BTreeSet::new();
    if !starters.iter().chain(bench.iter()).all(|id| seen.insert(*id)) {
        violations.push(LineupViolation::DuplicatePlayer);
    }

    violations
}

/// Checks a team name before registration: required, at least three
/// characters, unique case-insensitively within the championship.
pub fn validate_team_name(championship: &Championship, name: &str) -> Vec<RegistrationViolation> {
    let mut violations = Vec::new();
    let trimmed = name.trim();

    if trimmed.is_empty() {
        violations.push(RegistrationViolation::EmptyName);
    } else if trimmed.chars().count() < NAME_MIN_CHARS {
        violations.push(RegistrationViolation::NameTooShort);
    }

    let lowered = trimmed.to_lowercase();
    if championship
        .teams
        .iter()
        .any(|t| t.name.trim().to_lowercase() == lowered)
    {
        violations.push(RegistrationViolation::DuplicateName(trimmed.to_string()));
    }

    violations
}

/// Checks a jersey number before adding a player to a roster.
pub fn validate_player_number(team: &Team, number: u8) -> Vec<RegistrationViolation> {
    let mut violations = Vec::new();
    if !(NUMBER_MIN..=NUMBER_MAX).contains(&number) {
        violations.push(RegistrationViolation::NumberOutOfRange(number));
    }
    if team.roster.iter().any(|p| p.number == number) {
        violations.push(RegistrationViolation::NumberTaken(number));
    }
    violations
}

/// Checks a final score against the championship format: knockout games
/// must produce a winner.
pub fn validate_final_score(format: Format, home: u32, away: u32) -> Vec<MatchViolation> {
    let mut violations = Vec::new();
    if format == Format::Knockout && home == away {
        violations.push(MatchViolation::KnockoutDraw);
    }
    violations
}

pub fn validate_goal_minute(minute: u8) -> Vec<MatchViolation> {
    let mut violations = Vec::new();
    if minute > MINUTE_LIMIT {
        violations.push(MatchViolation::MinuteOutOfRange(minute));
    }
    violations
}
