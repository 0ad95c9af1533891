use crate::error::{Error, Result};
use crate::id::{GameId, GoalId, LineupId, PlayerId, TeamId};
use crate::team::Team;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The players a team fields for one game, by roster id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lineup {
    #[serde(rename = "titulares", default)]
    pub starters: Vec<PlayerId>,
    #[serde(rename = "reservas", default)]
    pub bench: Vec<PlayerId>,
    #[serde(default = "LineupId::new")]
    pub id: LineupId,
}

impl Lineup {
    pub fn new(starters: Vec<PlayerId>, bench: Vec<PlayerId>) -> Lineup {
        Lineup {
            starters,
            bench,
            id: LineupId::new(),
        }
    }
}

impl Default for Lineup {
    fn default() -> Lineup {
        Lineup::new(Vec::new(), Vec::new())
    }
}

/// One scored goal. The scorer's name is denormalized so the record
/// survives roster edits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Goal {
    #[serde(rename = "jogador_id")]
    pub player_id: PlayerId,
    #[serde(rename = "jogador_nome")]
    pub player_name: String,
    #[serde(rename = "equipe_id")]
    pub team_id: TeamId,
    #[serde(rename = "minuto")]
    pub minute: u8,
    #[serde(default = "GoalId::new")]
    pub id: GoalId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Agendada")]
    Scheduled,
    #[serde(rename = "Ao vivo")]
    Live,
    #[serde(rename = "Finalizada")]
    Finalized,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A scheduled or played game between two teams.
///
/// Both team aggregates are embedded by value, so a game carries a full
/// snapshot of each side rather than a reference into the championship's
/// team list. `status` is presentation state and may be edited freely;
/// `finalized` is the only gate for stat application, and [`Game::finalize`]
/// is the only operation that moves both together.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "GameDoc")]
#[non_exhaustive]
pub struct Game {
    #[serde(rename = "mandante")]
    pub home: Team,
    #[serde(rename = "visitante")]
    pub away: Team,
    #[serde(rename = "data")]
    pub kickoff: NaiveDateTime,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "placar_mandante")]
    pub home_score: u32,
    #[serde(rename = "placar_visitante")]
    pub away_score: u32,
    #[serde(rename = "finalizada")]
    pub finalized: bool,
    pub status: Status,
    #[serde(rename = "publico")]
    pub attendance: u32,
    #[serde(rename = "observacoes")]
    pub notes: String,
    #[serde(rename = "escalacao_mandante")]
    pub home_lineup: Lineup,
    #[serde(rename = "escalacao_visitante")]
    pub away_lineup: Lineup,
    #[serde(rename = "gols")]
    pub goals: Vec<Goal>,
    pub id: GameId,
}

impl Game {
    pub fn new(home: Team, away: Team, kickoff: NaiveDateTime, venue: impl Into<String>) -> Game {
        Game {
            home,
            away,
            kickoff,
            venue: venue.into(),
            home_score: 0,
            away_score: 0,
            finalized: false,
            status: Status::Scheduled,
            attendance: 0,
            notes: String::new(),
            home_lineup: Lineup::default(),
            away_lineup: Lineup::default(),
            goals: Vec::new(),
            id: GameId::new(),
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn lineup(&self, side: Side) -> &Lineup {
        match side {
            Side::Home => &self.home_lineup,
            Side::Away => &self.away_lineup,
        }
    }

    pub fn set_lineup(&mut self, side: Side, lineup: Lineup) {
        match side {
            Side::Home => self.home_lineup = lineup,
            Side::Away => self.away_lineup = lineup,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    /// Applies a final score and settles both embedded team records.
    ///
    /// Returns `false` without touching anything when the game is already
    /// finalized, so calling this twice is a no-op. Note this settles the
    /// *embedded* team snapshots only; use
    /// [`Championship::finalize_match`](crate::Championship::finalize_match)
    /// to keep the registered team list in step.
    pub fn finalize(&mut self, home_goals: u32, away_goals: u32) -> bool {
        if self.finalized {
            return false;
        }
        self.home_score = home_goals;
        self.away_score = away_goals;
        self.home.record_result(home_goals, away_goals);
        self.away.record_result(away_goals, home_goals);
        self.finalized = true;
        self.status = Status::Finalized;
        true
    }

    /// Records a goal for one side. The scorer must be on that side's
    /// embedded roster; their personal tally is incremented and the goal
    /// appended to the game's list. Goals are never removed.
    pub fn register_goal(&mut self, side: Side, player_id: PlayerId, minute: u8) -> Result<&Goal> {
        let team_id = self.team(side).id;
        let scorer = self
            .team_mut(side)
            .find_player_mut(player_id)
            .ok_or(Error::PlayerNotFound(player_id))?;
        scorer.goals += 1;
        let player_name = scorer.name.clone();
        self.goals.push(Goal {
            player_id,
            player_name,
            team_id,
            minute,
            id: GoalId::new(),
        });
        Ok(self.goals.last().expect("goal just appended"))
    }

    /// Goals credited to one side of this game.
    pub fn side_goals(&self, side: Side) -> impl Iterator<Item = &Goal> {
        let team_id = self.team(side).id;
        self.goals.iter().filter(move |g| g.team_id == team_id)
    }
}

/// Storage form of [`Game`]. Older documents predate `status`, `publico`,
/// `observacoes`, lineups and the goal list; every absent field defaults
/// here instead of failing the load. An absent `status` is inferred from
/// the `finalizada` flag, matching how those documents were written.
#[derive(Deserialize)]
struct GameDoc {
    mandante: Team,
    visitante: Team,
    data: NaiveDateTime,
    local: String,
    #[serde(default)]
    placar_mandante: u32,
    #[serde(default)]
    placar_visitante: u32,
    #[serde(default)]
    finalizada: bool,
    status: Option<Status>,
    #[serde(default)]
    publico: u32,
    #[serde(default)]
    observacoes: String,
    escalacao_mandante: Option<Lineup>,
    escalacao_visitante: Option<Lineup>,
    #[serde(default)]
    gols: Vec<Goal>,
    #[serde(default = "GameId::new")]
    id: GameId,
}

impl From<GameDoc> for Game {
    fn from(doc: GameDoc) -> Game {
        let status = doc.status.unwrap_or(if doc.finalizada {
            Status::Finalized
        } else {
            Status::Scheduled
        });
        Game {
            home: doc.mandante,
            away: doc.visitante,
            kickoff: doc.data,
            venue: doc.local,
            home_score: doc.placar_mandante,
            away_score: doc.placar_visitante,
            finalized: doc.finalizada,
            status,
            attendance: doc.publico,
            notes: doc.observacoes,
            home_lineup: doc.escalacao_mandante.unwrap_or_default(),
            away_lineup: doc.escalacao_visitante.unwrap_or_default(),
            goals: doc.gols,
            id: doc.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Player, Position};
    use chrono::NaiveDate;

    fn kickoff() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 12)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap()
    }

    fn fixture() -> Game {
        let mut home = Team::new("Azulão", "Rita Prado");
        home.register_player(Player::new("Edu", 10, Position::Midfielder));
        let away = Team::new("Ferroviária", "Tom Braga");
        Game::new(home, away, kickoff(), "Estádio Municipal")
    }

    #[test]
    fn finalize_settles_scores_and_both_records() {
        let mut game = fixture();
        assert!(game.finalize(2, 1));
        assert_eq!(game.home_score, 2);
        assert_eq!(game.away_score, 1);
        assert!(game.finalized);
        assert_eq!(game.status, Status::Finalized);
        assert_eq!(game.home.wins, 1);
        assert_eq!(game.home.goals_for, 2);
        assert_eq!(game.home.goals_against, 1);
        assert_eq!(game.away.losses, 1);
        assert_eq!(game.away.goals_for, 1);
    }

    #[test]
    fn finalize_twice_keeps_the_first_result() {
        let mut game = fixture();
        assert!(game.finalize(2, 1));
        assert!(!game.finalize(5, 5));
        assert_eq!(game.home_score, 2);
        assert_eq!(game.away_score, 1);
        assert_eq!(game.home.wins, 1);
        assert_eq!(game.home.draws, 0);
        assert_eq!(game.away.losses, 1);
    }

    #[test]
    fn a_draw_credits_both_sides() {
        let mut game = fixture();
        assert!(game.finalize(1, 1));
        assert_eq!(game.home.draws, 1);
        assert_eq!(game.away.draws, 1);
        assert_eq!(game.home.wins + game.home.losses, 0);
    }

    #[test]
    fn register_goal_denormalizes_the_scorer() {
        let mut game = fixture();
        let scorer = game.home.roster[0].id;
        let goal = game.register_goal(Side::Home, scorer, 23).unwrap();
        assert_eq!(goal.player_name, "Edu");
        assert_eq!(goal.minute, 23);
        assert_eq!(game.home.roster[0].goals, 1);
        assert_eq!(game.side_goals(Side::Home).count(), 1);
        assert_eq!(game.side_goals(Side::Away).count(), 0);
    }

    #[test]
    fn register_goal_rejects_players_off_the_roster() {
        let mut game = fixture();
        let ghost = PlayerId::new();
        match game.register_goal(Side::Home, ghost, 10) {
            Err(Error::PlayerNotFound(id)) => assert_eq!(id, ghost),
            other => panic!("expected PlayerNotFound, got {other:?}"),
        }
        assert!(game.goals.is_empty());
    }

    #[test]
    fn legacy_document_defaults_status_from_the_finalized_flag() {
        let doc = serde_json::json!({
            "mandante": {"nome": "A", "tecnico": "T", "elenco": [], "id": TeamId::new()},
            "visitante": {"nome": "B", "tecnico": "U", "elenco": [], "id": TeamId::new()},
            "data": "2022-03-05T20:00:00",
            "local": "Arena Velha",
            "placar_mandante": 3,
            "placar_visitante": 0,
            "finalizada": true,
            "id": GameId::new()
        });
        let game: Game = serde_json::from_value(doc).unwrap();
        assert_eq!(game.status, Status::Finalized);
        assert_eq!(game.attendance, 0);
        assert_eq!(game.notes, "");
        assert!(game.goals.is_empty());
        assert!(game.home_lineup.starters.is_empty());

        let doc = serde_json::json!({
            "mandante": {"nome": "A", "tecnico": "T", "elenco": [], "id": TeamId::new()},
            "visitante": {"nome": "B", "tecnico": "U", "elenco": [], "id": TeamId::new()},
            "data": "2022-03-05T20:00:00",
            "local": "Arena Velha",
            "id": GameId::new()
        });
        let game: Game = serde_json::from_value(doc).unwrap();
        assert_eq!(game.status, Status::Scheduled);
        assert!(!game.finalized);
    }
}
