use crate::errors::AppError;
use crate::models::{ChartSeries, Entry};
use crate::notice::{Notice, format_number};
use crate::stats::{Statistics, build_stats};
use crate::storage::{BlobStore, load_entries, load_goal, persist_entries, persist_goal};
use chrono::NaiveDate;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Tracker<S> {
    store: S,
    entries: Vec<Entry>,
    goal: f64,
}

impl<S: BlobStore> Tracker<S> {
    pub async fn load(store: S) -> Self {
        let entries = load_entries(&store).await;
        let goal = load_goal(&store).await;
        info!(entries = entries.len(), goal, "loaded tracker state");
        Self {
            store,
            entries,
            goal,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn upsert(
        &mut self,
        date: NaiveDate,
        weight: Option<f64>,
        meal: Option<String>,
    ) -> Result<Option<Notice>, AppError> {
        let Some(weight) = weight.filter(|w| w.is_finite() && *w != 0.0) else {
            debug!(%date, "ignoring record without a usable weight");
            return Ok(None);
        };

        let entry = Entry::new(date, weight, meal.unwrap_or_default());
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|existing| existing.date == date) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        entries.sort_by_key(|entry| entry.date);
        self.commit(&entries).await?;
        self.entries = entries;

        info!(%date, weight, "recorded weight");
        Ok(Some(Notice::info(format!("Recorded {}kg", format_number(weight)))))
    }

    pub async fn delete(&mut self, date: NaiveDate, weight: f64) -> Result<bool, AppError> {
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .filter(|entry| !(entry.date == date && entry.weight == weight))
            .cloned()
            .collect();
        let deleted = entries.len() != self.entries.len();
        persist_entries(&self.store, &entries).await?;
        self.entries = entries;

        if deleted {
            info!(%date, weight, "deleted entry");
        } else {
            debug!(%date, weight, "no entry to delete");
        }
        Ok(deleted)
    }

    pub async fn set_goal(&mut self, goal: Option<f64>) -> Result<bool, AppError> {
        let Some(goal) = goal.filter(|g| g.is_finite()) else {
            debug!("ignoring non-numeric goal");
            return Ok(false);
        };
        persist_goal(&self.store, goal).await?;
        self.goal = goal;
        info!(goal, "updated goal");
        Ok(true)
    }

    pub fn list_descending(&self, limit: usize) -> Vec<Entry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn stats(&self) -> Option<Statistics> {
        build_stats(&self.entries, self.goal)
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.entries.iter().map(|entry| entry.date).collect(),
            weights: self.entries.iter().map(|entry| entry.weight).collect(),
            goal: vec![self.goal; self.entries.len()],
        }
    }

    // Memory only changes once the new state is on disk.
    async fn commit(&self, entries: &[Entry]) -> Result<(), AppError> {
        persist_entries(&self.store, entries).await?;
        persist_goal(&self.store, self.goal).await
    }
}
