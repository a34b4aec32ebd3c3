use crate::models::Entry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Increase,
    Decrease,
    NoChange,
}

impl Trend {
    pub fn between(current: f64, previous: f64) -> Self {
        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Trend::Increase,
            Some(Ordering::Less) => Trend::Decrease,
            _ => Trend::NoChange,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Increase => "⬆",
            Trend::Decrease => "⬇",
            Trend::NoChange => "→",
        }
    }
}

/// Pairs each entry of a newest-first window with its trend against the next
/// older entry in the same window. The oldest entry shown has no trend.
pub fn annotate(window: &[Entry]) -> Vec<(&Entry, Option<Trend>)> {
    window
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let trend = window
                .get(index + 1)
                .map(|older| Trend::between(entry.weight, older.weight));
            (entry, trend)
        })
        .collect()
}
