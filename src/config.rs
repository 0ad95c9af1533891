use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "visitante")]
    Viewer,
}

/// One user in the directory. Older config files mapped usernames
/// straight to a password string; newer ones carry a record with an
/// optional role. Both forms parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserEntry {
    Password(String),
    Account {
        #[serde(rename = "senha")]
        password: String,
        #[serde(default)]
        role: Role,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultChampionship {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ano")]
    pub year: i32,
}

/// Application config file: the login directory plus the championship
/// used to seed an empty store.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub users: BTreeMap<String, UserEntry>,
    #[serde(rename = "default_campeonato")]
    pub default_championship: DefaultChampionship,
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<AppConfig> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Plaintext credential check. Legacy string entries log in as admin,
    /// matching how they were written.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Role> {
        let (expected, role) = match self.users.get(username)? {
            UserEntry::Password(expected) => (expected.as_str(), Role::Admin),
            UserEntry::Account {
                password: expected,
                role,
            } => (expected.as_str(), *role),
        };
        (password == expected).then_some(role)
    }
}
