use crate::id::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Position {
    #[serde(rename = "Goleiro")]
    Goalkeeper,
    #[serde(rename = "Zagueiro")]
    CentreBack,
    #[serde(rename = "Lateral")]
    FullBack,
    #[serde(rename = "Volante")]
    HoldingMidfielder,
    #[serde(rename = "Meia")]
    Midfielder,
    #[serde(rename = "Atacante")]
    Forward,
}

impl Position {
    // Wire names double as the display names.
    pub fn label(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goleiro",
            Position::CentreBack => "Zagueiro",
            Position::FullBack => "Lateral",
            Position::HoldingMidfielder => "Volante",
            Position::Midfielder => "Meia",
            Position::Forward => "Atacante",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Player {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "numero")]
    pub number: u8,
    #[serde(rename = "posicao")]
    pub position: Position,
    #[serde(rename = "gols", default)]
    pub goals: u32,
    #[serde(default = "PlayerId::new")]
    pub id: PlayerId,
}

impl Player {
    pub fn new(name: impl Into<String>, number: u8, position: Position) -> Player {
        Player {
            name: name.into(),
            number,
            position,
            goals: 0,
            id: PlayerId::new(),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) - Gols: {}",
            self.number, self.name, self.position, self.goals
        )
    }
}
