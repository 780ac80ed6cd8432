use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A symptom the user can report. The set is closed; weights live in the
/// scoring table of `aura-risk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    HeavyBleeding,
    SevereCramps,
    Fever,
    IrregularCycle,
    Discharge,
    Fatigue,
    Nausea,
    Headache,
    Bloating,
    MoodSwings,
}

impl Symptom {
    pub const ALL: [Symptom; 10] = [
        Symptom::HeavyBleeding,
        Symptom::SevereCramps,
        Symptom::Fever,
        Symptom::IrregularCycle,
        Symptom::Discharge,
        Symptom::Fatigue,
        Symptom::Nausea,
        Symptom::Headache,
        Symptom::Bloating,
        Symptom::MoodSwings,
    ];

    /// Symptoms that escalate to a critical emergency on their own,
    /// whatever the aggregate score.
    pub const CRITICAL: [Symptom; 3] = [
        Symptom::HeavyBleeding,
        Symptom::SevereCramps,
        Symptom::Fever,
    ];

    /// Wire identifier, e.g. `heavy_bleeding`.
    pub fn id(self) -> &'static str {
        match self {
            Symptom::HeavyBleeding => "heavy_bleeding",
            Symptom::SevereCramps => "severe_cramps",
            Symptom::Fever => "fever",
            Symptom::IrregularCycle => "irregular_cycle",
            Symptom::Discharge => "discharge",
            Symptom::Fatigue => "fatigue",
            Symptom::Nausea => "nausea",
            Symptom::Headache => "headache",
            Symptom::Bloating => "bloating",
            Symptom::MoodSwings => "mood_swings",
        }
    }

    pub fn is_critical(self) -> bool {
        Self::CRITICAL.contains(&self)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Symptom {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symptom::ALL
            .into_iter()
            .find(|sym| sym.id() == s)
            .ok_or_else(|| CoreError::UnknownSymptom(s.to_string()))
    }
}

/// The symptoms reported for a single assessment.
///
/// Backed by an ordered set, so duplicates collapse and iteration order is
/// stable. Serializes as a list of ids; deserialization drops entries it does
/// not recognize, including non-strings, instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<serde_json::Value>", into = "Vec<String>")]
pub struct SymptomReport {
    symptoms: BTreeSet<Symptom>,
}

impl SymptomReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from raw identifiers, silently skipping unknown ones.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::partition_ids(ids).0
    }

    /// Like [`from_ids`](Self::from_ids), but also hands back the ids that
    /// were not recognized so callers can surface them.
    pub fn partition_ids<I, S>(ids: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Self::new();
        let mut unknown = Vec::new();
        for id in ids {
            let id = id.as_ref();
            match id.parse::<Symptom>() {
                Ok(symptom) => {
                    report.insert(symptom);
                }
                Err(_) => unknown.push(id.to_string()),
            }
        }
        (report, unknown)
    }

    /// Returns `false` if the symptom was already present.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        self.symptoms.insert(symptom)
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    pub fn has_critical(&self) -> bool {
        self.symptoms.iter().any(|s| s.is_critical())
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.symptoms.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn is_subset(&self, other: &SymptomReport) -> bool {
        self.symptoms.is_subset(&other.symptoms)
    }
}

impl FromIterator<Symptom> for SymptomReport {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        Self {
            symptoms: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<serde_json::Value>> for SymptomReport {
    fn from(entries: Vec<serde_json::Value>) -> Self {
        entries
            .iter()
            .filter_map(|entry| entry.as_str()?.parse::<Symptom>().ok())
            .collect()
    }
}

impl From<SymptomReport> for Vec<String> {
    fn from(report: SymptomReport) -> Self {
        report.iter().map(|s| s.id().to_string()).collect()
    }
}
