use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// One-shot bonus actions. Declaration order is the enumeration order of companion moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Companion {
    Jon,
    Gendry,
    Sandor,
    Ramsay,
    Jaqen,
    Melisandre,
}

impl Companion {
    pub const ALL: [Companion; 6] = [
        Companion::Jon,
        Companion::Gendry,
        Companion::Sandor,
        Companion::Ramsay,
        Companion::Jaqen,
        Companion::Melisandre,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Companion::Jon => "Jon",
            Companion::Gendry => "Gendry",
            Companion::Sandor => "Sandor",
            Companion::Ramsay => "Ramsay",
            Companion::Jaqen => "Jaqen",
            Companion::Melisandre => "Melisandre",
        }
    }

    /// Number of board picks the companion asks for.
    pub fn default_choice(self) -> u8 {
        match self {
            Companion::Jon | Companion::Sandor => 1,
            Companion::Ramsay | Companion::Jaqen => 2,
            Companion::Gendry | Companion::Melisandre => 0,
        }
    }
}

impl fmt::Display for Companion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Companion {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Companion::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| GameError::UnknownCompanion(s.to_string()))
    }
}

/// Metadata the surrounding game keeps per companion; opaque to the search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionInfo {
    #[serde(rename = "Choice", default)]
    pub choice: u8,
}

/// Companions still available to either player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanionRegistry {
    entries: BTreeMap<Companion, CompanionInfo>,
}

impl CompanionRegistry {
    pub fn new() -> Self { Self::default() }

    /// The full six-companion pool of a fresh game.
    pub fn standard() -> Self { Companion::ALL.into_iter().collect() }

    pub fn insert(&mut self, companion: Companion, info: CompanionInfo) { self.entries.insert(companion, info); }

    /// Idempotent: removing an absent companion is not an error.
    pub fn remove(&mut self, companion: Companion) -> Option<CompanionInfo> { self.entries.remove(&companion) }

    pub fn contains(&self, companion: Companion) -> bool { self.entries.contains_key(&companion) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = Companion> + '_ { self.entries.keys().copied() }

    pub fn get(&self, companion: Companion) -> Option<&CompanionInfo> { self.entries.get(&companion) }
}

impl FromIterator<Companion> for CompanionRegistry {
    fn from_iter<I: IntoIterator<Item = Companion>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|c| (c, CompanionInfo { choice: c.default_choice() })).collect();
        Self { entries }
    }
}
