use crate::models::Entry;
use crate::notice::{Notice, format_number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub start: f64,
    pub latest: f64,
    pub goal: f64,
    pub total_loss: f64,
    pub achievement_percent: f64,
    pub total_loss_display: String,
    pub achievement_display: String,
    pub milestone: Option<Milestone>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    GoalReached,
    Lost10,
    Lost5,
    Lost3,
    OnTrack,
}

impl Milestone {
    pub fn select(start: f64, latest: f64, goal: f64, achievement_percent: f64) -> Option<Self> {
        let lost = start - latest;
        if latest <= goal {
            Some(Milestone::GoalReached)
        } else if lost >= 10.0 {
            Some(Milestone::Lost10)
        } else if lost >= 5.0 {
            Some(Milestone::Lost5)
        } else if lost >= 3.0 {
            Some(Milestone::Lost3)
        } else if achievement_percent > 50.0 {
            Some(Milestone::OnTrack)
        } else {
            None
        }
    }

    pub fn notice(self) -> Notice {
        match self {
            Milestone::GoalReached => Notice::celebration("🏆 Goal reached! Congratulations!"),
            Milestone::Lost10 => Notice::celebration("🎉 Down 10kg since your first record! Amazing!"),
            Milestone::Lost5 => Notice::celebration("🎉 Down 5kg since your first record! Great work!"),
            Milestone::Lost3 => Notice::celebration("🎉 Down 3kg since your first record! Wonderful!"),
            Milestone::OnTrack => Notice::encourage("On track! Keep it up!"),
        }
    }
}

pub fn build_stats(entries: &[Entry], goal: f64) -> Option<Statistics> {
    let start = entries.first()?.weight;
    let latest = entries.last()?.weight;

    let total_loss = round1(start - latest);
    let achievement_percent = achievement_percent(start, latest, goal);

    Some(Statistics {
        start,
        latest,
        goal,
        total_loss,
        achievement_percent,
        total_loss_display: format!("{total_loss:.1}kg"),
        achievement_display: format!("{}%", format_number(achievement_percent)),
        milestone: Milestone::select(start, latest, goal, achievement_percent),
    })
}

/// Share of the distance from the first weight to the goal already covered,
/// in percent, clamped to `[0, 100]`. When the first weight already equals the
/// goal there is no distance to cover: 100 while at or under the goal, else 0.
pub fn achievement_percent(start: f64, latest: f64, goal: f64) -> f64 {
    let distance = start - goal;
    if distance == 0.0 {
        return if latest <= goal { 100.0 } else { 0.0 };
    }
    let raw = round1((start - latest) / distance * 100.0);
    raw.clamp(0.0, 100.0)
}

fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
