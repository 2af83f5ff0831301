use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated history for one habit. `dates` holds `YYYY-MM-DD` day ids;
/// the set type makes duplicate insertion impossible.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HabitRecord {
    #[serde(default)]
    pub dates: BTreeSet<String>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub longest: u32,
}

/// The persisted store: habit display name → record. The file content is
/// exactly this map, so absent keys mean zero history.
pub type HabitStore = BTreeMap<String, HabitRecord>;
