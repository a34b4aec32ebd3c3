use serde::{Deserialize, Serialize};

pub const NOTICE_DURATION_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTier {
    Info,
    Celebration,
    Encourage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub tier: NoticeTier,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tier: NoticeTier::Info,
        }
    }

    pub fn celebration(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tier: NoticeTier::Celebration,
        }
    }

    pub fn encourage(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tier: NoticeTier::Encourage,
        }
    }
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
