//! Savings goals and check-in streak tracking.

pub mod store;
pub mod time;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How long a goal runs from its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDuration {
    Weekly,
    Monthly,
    Yearly,
}

impl GoalDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDuration::Weekly => "weekly",
            GoalDuration::Monthly => "monthly",
            GoalDuration::Yearly => "yearly",
        }
    }
}

/// A user-defined savings target.
///
/// `id`, `duration`, `start_date`, and `end_date` are fixed at creation;
/// progress operations only ever touch `current_amount`, `completed`, and
/// `completed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub duration: GoalDuration,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub completed: bool,
    /// Stamped the instant `completed` first becomes true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Fraction of the target reached, clamped to 1.0.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            0.0
        } else {
            (self.current_amount / self.target_amount).min(1.0)
        }
    }
}

/// Consecutive check-in counters, shared across all goals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub last_check_in: Option<DateTime<Utc>>,
    pub total_check_ins: u64,
}
