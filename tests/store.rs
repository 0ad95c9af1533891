use campeonato::{Championship, Database, DefaultChampionship, Team};
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("data").join("campeonatos.json")
}

#[test]
fn open_on_a_missing_file_yields_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let database = Database::open(store_path(&dir)).unwrap();
    assert!(database.is_empty());
    assert!(database.list_all().is_empty());
}

#[test]
fn open_on_a_malformed_file_yields_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json at all").unwrap();
    let database = Database::open(&path).unwrap();
    assert!(database.is_empty());
}

#[test]
fn save_then_reopen_round_trips_the_championship() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut camp = Championship::new("Campeonato da Cidade", 2024);
    camp.register_team(Team::new("Unidos da Serra", "Preta Reis"));
    let id = camp.id;

    let mut database = Database::open(&path).unwrap();
    database.save(camp).unwrap();

    let reopened = Database::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    let loaded = reopened.find_by_id(id).unwrap();
    assert_eq!(loaded.name, "Campeonato da Cidade");
    assert_eq!(loaded.teams.len(), 1);
    assert_eq!(loaded.teams[0].name, "Unidos da Serra");
}

#[test]
fn save_rewrites_the_whole_document() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut database = Database::open(&path).unwrap();
    let first = Championship::new("Primeira Divisão", 2024);
    let second = Championship::new("Segunda Divisão", 2024);
    let first_id = first.id;
    database.save(first).unwrap();
    database.save(second).unwrap();

    // The file always holds every championship, not just the last saved.
    let raw = std::fs::read_to_string(&path).unwrap();
    let document: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(document.len(), 2);

    // Saving again replaces by id instead of appending.
    let mut replacement = Championship::new("Primeira Divisão (nova)", 2025);
    replacement.id = first_id;
    database.save(replacement).unwrap();
    assert_eq!(database.len(), 2);
    assert_eq!(
        database.find_by_id(first_id).unwrap().name,
        "Primeira Divisão (nova)"
    );
}

#[test]
fn delete_reports_whether_the_championship_existed() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut database = Database::open(&path).unwrap();
    let camp = Championship::new("Descartável", 2024);
    let id = camp.id;
    database.save(camp).unwrap();

    assert!(database.delete(id).unwrap());
    assert!(!database.delete(id).unwrap());
    assert!(database.find_by_id(id).is_none());
}

#[test]
fn reload_after_an_external_delete_does_not_resurrect() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut writer = Database::open(&path).unwrap();
    let camp = Championship::new("Efêmero", 2024);
    let id = camp.id;
    writer.save(camp).unwrap();

    // A second handle still holds the championship in memory.
    let mut stale = Database::open(&path).unwrap();
    assert!(stale.find_by_id(id).is_some());

    writer.delete(id).unwrap();

    // The stale handle sees it until it resynchronizes, and not after.
    assert!(stale.find_by_id(id).is_some());
    stale.reload();
    assert!(stale.find_by_id(id).is_none());
}

#[test]
fn reload_discards_unsaved_in_memory_state() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut database = Database::open(&path).unwrap();
    let saved = Championship::new("Persistido", 2024);
    let saved_id = saved.id;
    database.save(saved).unwrap();

    let camp = database.find_by_id_mut(saved_id).unwrap();
    camp.register_team(Team::new("Nunca Salvo", "Ninguém"));
    database.reload();
    assert!(database.find_by_id(saved_id).unwrap().teams.is_empty());
}

#[test]
fn seed_default_fills_only_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let seed = DefaultChampionship {
        name: "Campeonato Municipal".into(),
        year: 2024,
    };

    let mut database = Database::open(&path).unwrap();
    let seeded = database.seed_default(&seed).unwrap();
    let seeded_id = seeded.expect("empty store should be seeded");
    let camp = database.find_by_id(seeded_id).unwrap();
    assert_eq!(camp.name, "Campeonato Municipal");
    assert_eq!(camp.year, 2024);

    // Second call leaves the store alone.
    assert!(database.seed_default(&seed).unwrap().is_none());
    assert_eq!(database.len(), 1);

    // The seeded championship survives a reopen.
    let reopened = Database::open(&path).unwrap();
    assert!(reopened.find_by_id(seeded_id).is_some());
}
