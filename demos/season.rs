use anyhow::bail;
use campeonato::{
    validate, Championship, Database, Game, Lineup, Player, Position, Side, Team,
};
use chrono::NaiveDate;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campeonato=debug")),
        )
        .compact()
        .init();

    let Some(store_path) = std::env::args().nth(1) else {
        bail!("missing argument\nusage: cargo run --example season -- STORE.JSON");
    };

    let mut database = Database::open(store_path)?;

    let mut camp = Championship::new("Campeonato de Demonstração", 2024);
    let mut home = Team::new("Leões do Norte", "Rosa Cunha");
    let mut away = Team::new("Tubarões", "Ivo Melo");
    fill_roster(&mut home);
    fill_roster(&mut away);
    camp.register_team(home.clone());
    camp.register_team(away.clone());

    let kickoff = NaiveDate::from_ymd_opt(2024, 10, 5)
        .unwrap()
        .and_hms_opt(16, 0, 0)
        .unwrap();
    let mut game = Game::new(home, away, kickoff, "Arena Central");

    // Field the first eleven of each side, keeper first.
    for side in [Side::Home, Side::Away] {
        let team = game.team(side);
        let starters: Vec<_> = team.roster.iter().take(11).map(|p| p.id).collect();
        let bench: Vec<_> = team.roster.iter().skip(11).map(|p| p.id).collect();
        let violations = validate::validate_lineup(team, &starters, &bench);
        if !violations.is_empty() {
            for violation in &violations {
                eprintln!("lineup rejected: {violation}");
            }
            bail!("invalid lineup for {}", team.name);
        }
        game.set_lineup(side, Lineup::new(starters, bench));
    }

    let striker = game.team(Side::Home).roster[10].id;
    game.register_goal(Side::Home, striker, 23)?;
    game.register_goal(Side::Home, striker, 67)?;
    let winger = game.team(Side::Away).roster[9].id;
    game.register_goal(Side::Away, winger, 81)?;

    let game_id = game.id;
    camp.schedule_match(game);
    camp.finalize_match(game_id, 2, 1)?;

    database.save(camp.clone())?;

    println!("\n{} ({})", camp.name, camp.year);
    println!("{:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}", "Equipe", "P", "V", "E", "D", "SG", "GM");
    for team in camp.standings().iter() {
        println!(
            "{:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
            team.name,
            team.points(),
            team.wins,
            team.draws,
            team.losses,
            team.goal_difference(),
            team.goals_for,
        );
    }

    println!("\nArtilharia:");
    for scorer in camp.top_scorers() {
        println!("  {} - {} gols", scorer.player_name, scorer.goals);
    }

    Ok(())
}

fn fill_roster(team: &mut Team) {
    team.register_player(Player::new("Paredão", 1, Position::Goalkeeper));
    for number in 2..=5 {
        team.register_player(Player::new(
            format!("Defensor {number}"),
            number,
            Position::CentreBack,
        ));
    }
    for number in 6..=8 {
        team.register_player(Player::new(
            format!("Meio-campo {number}"),
            number,
            Position::Midfielder,
        ));
    }
    for number in 9..=11 {
        team.register_player(Player::new(
            format!("Atacante {number}"),
            number,
            Position::Forward,
        ));
    }
    team.register_player(Player::new("Reserva 12", 12, Position::Goalkeeper));
}
