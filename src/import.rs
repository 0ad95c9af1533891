use crate::championship::Championship;
use crate::error::{Error, Result};
use crate::team::Team;
use crate::validate::NAME_MIN_CHARS;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io;
use tracing::info;

pub const DEFAULT_COACH: &str = "Sem técnico";

/// Outcome of a bulk import: how many rows landed, how many were
/// skipped, and why the invalid ones failed.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TeamRow {
    nome: String,
    #[serde(default)]
    tecnico: String,
}

/// Registers teams from a CSV stream with a `nome` column (required) and
/// an optional `tecnico` column. Header matching ignores case. Rows with
/// a too-short name are reported as errors; names already registered in
/// the championship, or repeated within the file, are skipped silently.
/// Valid rows are registered immediately; a failed row never aborts the
/// rest of the file.
pub fn import_teams_csv<R: io::Read>(
    championship: &mut Championship,
    reader: R,
) -> Result<ImportSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(str::to_lowercase)
        .collect();
    if !headers.iter().any(|h| h == "nome") {
        return Err(Error::Import("missing required column: nome".into()));
    }
    csv_reader.set_headers(headers);

    let mut summary = ImportSummary::default();
    let mut taken: BTreeSet<String> = championship
        .teams
        .iter()
        .map(|t| t.name.trim().to_lowercase())
        .collect();

    for row in csv_reader.deserialize::<TeamRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                summary.errors.push(format!("unreadable row: {err}"));
                summary.skipped += 1;
                continue;
            }
        };
        let name = row.nome.trim();
        if name.chars().count() < NAME_MIN_CHARS {
            summary.errors.push(format!("invalid team name: {name:?}"));
            summary.skipped += 1;
            continue;
        }
        if !taken.insert(name.to_lowercase()) {
            summary.skipped += 1;
            continue;
        }
        let coach = match row.tecnico.trim() {
            "" => DEFAULT_COACH,
            coach => coach,
        };
        championship.register_team(Team::new(name, coach));
        summary.inserted += 1;
    }

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "team import finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_new_teams_and_defaults_the_coach() {
        let mut camp = Championship::new("Copa", 2024);
        let csv = "nome,tecnico\nBotafogo da Vila,Lia Castro\nIpiranga,\n";
        let summary = import_teams_csv(&mut camp, csv.as_bytes()).unwrap();
        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped, 0);
        assert!(summary.errors.is_empty());
        assert_eq!(camp.teams[0].coach, "Lia Castro");
        assert_eq!(camp.teams[1].coach, DEFAULT_COACH);
    }

    #[test]
    fn skips_duplicates_against_the_championship_and_within_the_file() {
        let mut camp = Championship::new("Copa", 2024);
        camp.register_team(Team::new("Ipiranga", "X"));
        let csv = "nome\nIPIRANGA\nNacional\nnacional\n";
        let summary = import_teams_csv(&mut camp, csv.as_bytes()).unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(camp.teams.len(), 2);
    }

    #[test]
    fn reports_invalid_names_without_aborting() {
        let mut camp = Championship::new("Copa", 2024);
        let csv = "nome,tecnico\nab,Curto\nTime Válido,Treinador\n";
        let summary = import_teams_csv(&mut camp, csv.as_bytes()).unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("ab"));
    }

    #[test]
    fn header_matching_ignores_case() {
        let mut camp = Championship::new("Copa", 2024);
        let csv = "Nome,Tecnico\nTrês Passos,Ana\n";
        let summary = import_teams_csv(&mut camp, csv.as_bytes()).unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(camp.teams[0].name, "Três Passos");
    }

    #[test]
    fn a_missing_nome_column_is_an_error() {
        let mut camp = Championship::new("Copa", 2024);
        let csv = "time,tecnico\nFulano,Beltrano\n";
        match import_teams_csv(&mut camp, csv.as_bytes()) {
            Err(Error::Import(message)) => assert!(message.contains("nome")),
            other => panic!("expected Import error, got {other:?}"),
        }
    }
}
