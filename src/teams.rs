use std::collections::HashMap;
use std::io::Read;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Provider label to display label for the six current CPBL franchises.
pub const CPBL_TEAMS: [(&str, &str); 6] = [
    ("CTBC Brothers", "中信兄弟"),
    ("Uni-President 7-Eleven Lions", "統一7-ELEVEN獅"),
    ("Rakuten Monkeys", "樂天桃猿"),
    ("Fubon Guardians", "富邦悍將"),
    ("Wei Chuan Dragons", "味全龍"),
    ("TSG Hawks", "台鋼雄鷹"),
];

/// Maps a provider team label to the label shown to users.
///
/// Implementations never fail: a label with no mapping comes back trimmed
/// but otherwise unchanged.
pub trait ResolveName {
    fn resolve(&self, raw_label: &str) -> String;
}

impl ResolveName for HashMap<String, String> {
    fn resolve(&self, raw_label: &str) -> String {
        let label = raw_label.trim();
        self.get(label).map_or_else(|| label.to_string(), Clone::clone)
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct TeamNameTable {
    names: HashMap<String, String>,
}

impl TeamNameTable {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_string(), v.into()))
                .collect(),
        }
    }

    pub fn cpbl() -> Self {
        Self::new(CPBL_TEAMS)
    }

    /// Reads a JSON object of `{"provider label": "display label"}` pairs.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to read team name table")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<HashMap<String, String>> for TeamNameTable {
    fn from(names: HashMap<String, String>) -> Self {
        Self::new(names)
    }
}

impl From<TeamNameTable> for HashMap<String, String> {
    fn from(table: TeamNameTable) -> Self {
        table.names
    }
}

impl ResolveName for TeamNameTable {
    fn resolve(&self, raw_label: &str) -> String {
        self.names.resolve(raw_label)
    }
}
