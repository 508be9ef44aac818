// Models for representing Jenkins builds and their artifacts
// -------------------------------------------------------------------------------------------------

use crate::models::action::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model for one execution of a job
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    pub id: String,
    pub number: u32,
    /// `None` while the build is still running
    pub result: Option<BuildResult>,
    pub description: Option<String>,
    pub display_name: String,
    pub full_display_name: String,
    /// Milliseconds
    pub duration: i64,
    /// Milliseconds, `-1` when Jenkins has no estimate
    pub estimated_duration: i64,
    pub queue_id: i64,
    /// Milliseconds since the epoch
    pub timestamp: i64,
    pub url: String,
    pub building: bool,
    pub artifacts: Vec<Artifact>,
    pub actions: Vec<Action>,
}

/// Possible outcomes of a finished build
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildResult {
    Success,
    Failure,
    Unstable,
    Aborted,
    NotBuilt,
    #[serde(other)]
    Unknown,
}

/// Model for a file archived by a build
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artifact {
    pub display_path: String,
    pub file_name: String,
    pub relative_path: String,
}

impl Build {
    /// Point in time at which the build was scheduled to start.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration.max(0) as u64)
    }

    pub fn estimated_duration(&self) -> Option<Duration> {
        if self.estimated_duration < 0 {
            None
        } else {
            Some(Duration::from_millis(self.estimated_duration as u64))
        }
    }

    pub fn is_successful(&self) -> bool {
        self.result == Some(BuildResult::Success)
    }
}

// -------------------------------------------------------------------------------------------------
