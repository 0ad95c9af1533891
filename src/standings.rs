use crate::team::Team;
use derive_more::Deref;

/// A ranked view over a championship's registered teams. Derefs to the
/// underlying slice, best team first.
#[derive(Debug, Deref)]
pub struct Standings<'a>(Vec<&'a Team>);

/// Descending by (points, wins, goal difference, goals for). The sort is
/// stable, so teams with identical tuples keep their registration order;
/// no tie-break exists beyond the tuple.
pub(crate) fn rank(teams: &[Team]) -> Standings<'_> {
    let mut table: Vec<&Team> = teams.iter().collect();
    table.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
    Standings(table)
}

fn sort_key(team: &Team) -> (u32, u32, i64, u32) {
    (
        team.points(),
        team.wins,
        team.goal_difference(),
        team.goals_for,
    )
}
