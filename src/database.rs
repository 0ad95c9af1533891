use crate::championship::Championship;
use crate::config::DefaultChampionship;
use crate::error::Result;
use crate::id::ChampionshipId;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Whole-file JSON store of every championship.
///
/// The entire document is loaded into memory on open and rewritten on
/// every mutation. There is no locking and no atomic rename: two handles
/// on the same path are last-writer-wins, and a crash mid-write can
/// corrupt the whole file. Single-writer discipline is the caller's job.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    championships: BTreeMap<ChampionshipId, Championship>,
}

impl Database {
    /// Opens the store at `path`, creating parent directories. A missing
    /// or unreadable file yields an empty store, never an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Database> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut database = Database {
            path,
            championships: BTreeMap::new(),
        };
        database.reload();
        Ok(database)
    }

    /// Discards the in-memory map and re-reads the file. Used to pick up
    /// writes (or deletions) made through another handle.
    pub fn reload(&mut self) {
        self.championships = match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Vec<Championship>>(&raw) {
                Ok(list) => list.into_iter().map(|c| (c.id, c)).collect(),
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        error = %err,
                        "store unreadable, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        if let Err(problems) = self.check_consistency() {
            warn!(path = %self.path.display(), "inconsistent store:\n{problems}");
        }
    }

    /// Inserts or replaces by id, then rewrites the whole document.
    pub fn save(&mut self, championship: Championship) -> Result<()> {
        debug!(id = %championship.id, name = %championship.name, "saving championship");
        self.championships.insert(championship.id, championship);
        self.persist()
    }

    pub fn list_all(&self) -> Vec<&Championship> {
        self.championships.values().collect()
    }

    pub fn find_by_id(&self, id: ChampionshipId) -> Option<&Championship> {
        self.championships.get(&id)
    }

    pub fn find_by_id_mut(&mut self, id: ChampionshipId) -> Option<&mut Championship> {
        self.championships.get_mut(&id)
    }

    /// Removes a championship and rewrites the document. Returns whether
    /// it existed.
    pub fn delete(&mut self, id: ChampionshipId) -> Result<bool> {
        if self.championships.remove(&id).is_some() {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.championships.is_empty()
    }

    pub fn len(&self) -> usize {
        self.championships.len()
    }

    /// Seeds an empty store with the configured default championship and
    /// returns its id. A store that already has data is left alone.
    pub fn seed_default(&mut self, seed: &DefaultChampionship) -> Result<Option<ChampionshipId>> {
        if !self.championships.is_empty() {
            return Ok(None);
        }
        let championship = Championship::new(seed.name.clone(), seed.year);
        let id = championship.id;
        self.save(championship)?;
        Ok(Some(id))
    }

    fn persist(&self) -> Result<()> {
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &self.championships.values().collect::<Vec<_>>())?;
        Ok(())
    }

    // The map invariants can only break through bugs, not through normal
    // use, so problems are reported as warnings rather than load failures.
    pub(crate) fn check_consistency(&self) -> std::result::Result<(), String> {
        let mut problems = Vec::new();

        for (key, championship) in &self.championships {
            if championship.id.0.is_nil() {
                problems.push(format!("- nil uuid: championship {:?}", championship.name));
            }
            if championship.id != *key {
                problems.push(format!(
                    "- championship {} is keyed with {}",
                    championship.id, key
                ));
            }
            for team in &championship.teams {
                if team.id.0.is_nil() {
                    problems.push(format!("- nil uuid: team {:?}", team.name));
                }
                for player in &team.roster {
                    if player.id.0.is_nil() {
                        problems.push(format!("- nil uuid: player {:?}", player.name));
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("\n"))
        }
    }
}
