use crate::error::{Error, Result};
use crate::id::{PlayerId, TeamId};
use crate::player::Player;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;

/// A registered team and its aggregate record.
///
/// `points` and `goal_difference` are derived from the stored tallies.
/// They are written out to storage for readability but never read back;
/// the load path recomputes them.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct Team {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tecnico")]
    pub coach: String,
    #[serde(rename = "elenco", default)]
    pub roster: Vec<Player>,
    #[serde(rename = "vitorias", default)]
    pub wins: u32,
    #[serde(rename = "empates", default)]
    pub draws: u32,
    #[serde(rename = "derrotas", default)]
    pub losses: u32,
    #[serde(rename = "gols_marcados", default)]
    pub goals_for: u32,
    #[serde(rename = "gols_sofridos", default)]
    pub goals_against: u32,
    #[serde(default = "TeamId::new")]
    pub id: TeamId,
}

impl Team {
    pub fn new(name: impl Into<String>, coach: impl Into<String>) -> Team {
        Team {
            name: name.into(),
            coach: coach.into(),
            roster: Vec::new(),
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            id: TeamId::new(),
        }
    }

    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    pub fn register_player(&mut self, player: Player) {
        self.roster.push(player);
    }

    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn find_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.id == id)
    }

    /// Removes a player from the roster, returning the removed record.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player> {
        let index = self
            .roster
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::PlayerNotFound(id))?;
        Ok(self.roster.remove(index))
    }

    /// Applies one final score from this team's perspective: goal tallies
    /// plus exactly one of win, draw or loss.
    pub(crate) fn record_result(&mut self, goals_for: u32, goals_against: u32) {
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.draws += 1,
            Ordering::Less => self.losses += 1,
        }
    }
}

impl Serialize for Team {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Team", 11)?;
        s.serialize_field("nome", &self.name)?;
        s.serialize_field("tecnico", &self.coach)?;
        s.serialize_field("elenco", &self.roster)?;
        s.serialize_field("vitorias", &self.wins)?;
        s.serialize_field("empates", &self.draws)?;
        s.serialize_field("derrotas", &self.losses)?;
        s.serialize_field("gols_marcados", &self.goals_for)?;
        s.serialize_field("gols_sofridos", &self.goals_against)?;
        s.serialize_field("pontos", &self.points())?;
        s.serialize_field("saldo_gols", &self.goal_difference())?;
        s.serialize_field("id", &self.id)?;
        s.end()
    }
}
