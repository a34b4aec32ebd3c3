use crate::notice::Notice;
use crate::stats::Statistics;
use crate::trend::Trend;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GOAL: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default)]
    pub meal: String,
}

impl Entry {
    pub fn new(date: NaiveDate, weight: f64, meal: impl Into<String>) -> Self {
        Self {
            date,
            weight,
            meal: meal.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub date: NaiveDate,
    pub weight: Option<f64>,
    #[serde(default)]
    pub meal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub goal: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub window: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordItem {
    pub date: NaiveDate,
    pub weight: f64,
    pub meal: String,
    pub trend: Option<Trend>,
    pub arrow: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordPage {
    pub items: Vec<RecordItem>,
    pub window: usize,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalResponse {
    pub goal: f64,
    pub updated: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: Option<Statistics>,
    pub notice: Option<Notice>,
    pub notice_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<NaiveDate>,
    pub weights: Vec<f64>,
    pub goal: Vec<f64>,
}
