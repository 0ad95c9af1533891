use crate::game::Game;
use crate::id::PhaseId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum PhaseKind {
    #[default]
    #[serde(rename = "Corridos")]
    RoundRobin,
    #[serde(rename = "Mata-mata")]
    Knockout,
}

/// A stage within a championship: a league round, a group, or one
/// knockout round. `order` drives bracket and sequence display.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Phase {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ordem")]
    pub order: u32,
    #[serde(rename = "tipo", default)]
    pub kind: PhaseKind,
    #[serde(rename = "grupo", default)]
    pub group: String,
    #[serde(rename = "jogos", default)]
    pub games: Vec<Game>,
    #[serde(default = "PhaseId::new")]
    pub id: PhaseId,
}

impl Phase {
    pub fn new(name: impl Into<String>, order: u32) -> Phase {
        Phase::with_kind(name, order, PhaseKind::RoundRobin)
    }

    pub fn with_kind(name: impl Into<String>, order: u32, kind: PhaseKind) -> Phase {
        Phase {
            name: name.into(),
            order,
            kind,
            group: String::new(),
            games: Vec::new(),
            id: PhaseId::new(),
        }
    }

    pub fn add_game(&mut self, game: Game) {
        self.games.push(game);
    }
}
