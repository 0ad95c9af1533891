use crate::error::{Error, Result};
use crate::game::Game;
use crate::id::{ChampionshipId, GameId, PhaseId, TeamId};
use crate::phase::Phase;
use crate::standings::{self, Standings};
use crate::team::Team;
use serde::{Deserialize, Serialize};

pub const SINGLE_PHASE_NAME: &str = "Fase Única";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Format {
    #[default]
    #[serde(rename = "Pontos corridos")]
    RoundRobin,
    #[serde(rename = "Mata-mata")]
    Knockout,
}

/// The aggregate root. A championship owns its phases (and through them
/// every game) and its registered team list, and is persisted as one
/// unit keyed by `id`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Championship {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "tipo", default)]
    pub format: Format,
    #[serde(rename = "fases", default)]
    pub phases: Vec<Phase>,
    #[serde(rename = "equipes_inscritas", default)]
    pub teams: Vec<Team>,
    #[serde(default = "ChampionshipId::new")]
    pub id: ChampionshipId,
}

impl Championship {
    pub fn new(name: impl Into<String>, year: i32) -> Championship {
        Championship::with_format(name, year, Format::RoundRobin)
    }

    pub fn with_format(name: impl Into<String>, year: i32, format: Format) -> Championship {
        Championship {
            name: name.into(),
            year,
            format,
            phases: Vec::new(),
            teams: Vec::new(),
            id: ChampionshipId::new(),
        }
    }

    pub fn register_team(&mut self, team: Team) {
        self.teams.push(team);
    }

    /// Removes a team from the registration list, returning the removed
    /// record. Games already scheduled keep their embedded snapshot.
    pub fn remove_team(&mut self, id: TeamId) -> Result<Team> {
        let index = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TeamNotFound(id))?;
        Ok(self.teams.remove(index))
    }

    pub fn find_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn add_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    pub fn find_phase_mut(&mut self, id: PhaseId) -> Option<&mut Phase> {
        self.phases.iter_mut().find(|p| p.id == id)
    }

    /// Schedules a game in the championship's single running phase,
    /// creating the default one on first use. Knockout championships
    /// place games in explicit rounds instead; use
    /// [`Championship::schedule_match_in_phase`] for those.
    pub fn schedule_match(&mut self, game: Game) {
        if self.phases.is_empty() {
            self.phases.push(Phase::new(SINGLE_PHASE_NAME, 1));
        }
        self.phases[0].add_game(game);
    }

    pub fn schedule_match_in_phase(&mut self, phase_id: PhaseId, game: Game) -> Result<()> {
        let phase = self
            .find_phase_mut(phase_id)
            .ok_or(Error::PhaseNotFound(phase_id))?;
        phase.add_game(game);
        Ok(())
    }

    /// Every game across every phase, in phase order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.phases.iter().flat_map(|p| p.games.iter())
    }

    pub fn pending_games(&self) -> impl Iterator<Item = &Game> {
        self.games().filter(|g| !g.finalized)
    }

    pub fn find_match(&self, id: GameId) -> Option<&Game> {
        self.games().find(|g| g.id == id)
    }

    pub fn find_match_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.phases
            .iter_mut()
            .flat_map(|p| p.games.iter_mut())
            .find(|g| g.id == id)
    }

    /// Finalizes a game and applies the same tallies to the registered
    /// teams, keeping standings in step with the game's embedded
    /// snapshots. Finalizing an already-finalized game changes nothing.
    /// A registered team that was removed after scheduling is skipped.
    pub fn finalize_match(&mut self, id: GameId, home_goals: u32, away_goals: u32) -> Result<()> {
        let game = self
            .phases
            .iter_mut()
            .flat_map(|p| p.games.iter_mut())
            .find(|g| g.id == id)
            .ok_or(Error::GameNotFound(id))?;
        if !game.finalize(home_goals, away_goals) {
            return Ok(());
        }
        let home_id = game.home.id;
        let away_id = game.away.id;
        if let Some(team) = self.find_team_mut(home_id) {
            team.record_result(home_goals, away_goals);
        }
        if let Some(team) = self.find_team_mut(away_id) {
            team.record_result(away_goals, home_goals);
        }
        Ok(())
    }

    /// Teams ranked by points, wins, goal difference and goals scored,
    /// descending. Equal tuples keep registration order; the ordering
    /// beyond the tuple is undefined.
    pub fn standings(&self) -> Standings<'_> {
        standings::rank(&self.teams)
    }
}
