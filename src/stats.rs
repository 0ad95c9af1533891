//! Aggregates for the dashboard views: total goals, attack ranking and
//! the top-scorer table built from the per-game goal records.

use crate::championship::Championship;
use crate::id::PlayerId;
use crate::team::Team;

/// One row of the top-scorer table. Names come from the denormalized
/// goal records, so the row survives roster edits and team removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerTally {
    pub player_id: PlayerId,
    pub player_name: String,
    pub goals: usize,
}

impl Championship {
    pub fn total_goals(&self) -> u32 {
        self.teams.iter().map(|t| t.goals_for).sum()
    }

    /// Teams by goals scored, descending; ties keep registration order.
    pub fn attack_ranking(&self) -> Vec<&Team> {
        let mut ranking: Vec<&Team> = self.teams.iter().collect();
        ranking.sort_by(|a, b| b.goals_for.cmp(&a.goals_for));
        ranking
    }

    /// Goal records across every game, tallied per scorer, descending.
    /// Scorers with equal tallies keep first-goal order.
    pub fn top_scorers(&self) -> Vec<ScorerTally> {
        let mut tallies: Vec<ScorerTally> = Vec::new();
        for game in self.games() {
            for goal in &game.goals {
                match tallies.iter_mut().find(|t| t.player_id == goal.player_id) {
                    Some(tally) => tally.goals += 1,
                    None => tallies.push(ScorerTally {
                        player_id: goal.player_id,
                        player_name: goal.player_name.clone(),
                        goals: 1,
                    }),
                }
            }
        }
        tallies.sort_by(|a, b| b.goals.cmp(&a.goals));
        tallies
    }
}
