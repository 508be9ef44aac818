// Models for representing Jenkins jobs and views
// -------------------------------------------------------------------------------------------------

use crate::models::action::Action;
use crate::models::build::Build;
use serde::{Deserialize, Serialize};

/// Model for a job and its build history.
///
/// The `*_build` fields are `None` when the job has no such build yet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub name: String,
    pub display_name: String,
    pub full_name: String,
    pub url: String,
    pub description: Option<String>,
    pub color: String,
    pub buildable: bool,
    pub in_queue: bool,
    pub next_build_number: u32,
    /// Most recent first
    pub builds: Vec<Build>,
    pub health_report: Vec<HealthReport>,
    pub actions: Vec<Action>,
    pub first_build: Option<Build>,
    pub last_build: Option<Build>,
    pub last_completed_build: Option<Build>,
    pub last_failed_build: Option<Build>,
    pub last_stable_build: Option<Build>,
    pub last_successful_build: Option<Build>,
    pub last_unstable_build: Option<Build>,
    pub last_unsuccessful_build: Option<Build>,
}

/// Model for one entry of a job's weather report
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthReport {
    pub description: String,
    pub score: i32,
}

/// Model for a view, or the server root, listing jobs
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct View {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub jobs: Vec<Job>,
}

impl Job {
    pub fn last_build_number(&self) -> Option<u32> {
        self.last_build.as_ref().map(|build| build.number)
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::read_json_from_file;

    #[test]
    fn deserialize_job_response() {
        let job: Job = read_json_from_file("test/test_job_response.json").unwrap();

        assert_eq!(job.name, "android-mobile");
        assert_eq!(job.description.as_deref(), Some("Builds the android app"));
        assert!(job.buildable);
        assert!(!job.in_queue);
        assert_eq!(job.next_build_number, 197);
        assert_eq!(job.builds.len(), 3);
        assert_eq!(job.builds[0].number, 196);
        assert_eq!(job.health_report[0].score, 80);
        assert_eq!(job.first_build.as_ref().unwrap().number, 1);
        assert_eq!(job.last_build_number(), Some(196));
        assert_eq!(job.last_failed_build.as_ref().unwrap().number, 190);
        assert_eq!(job.last_unstable_build, None);
    }

    #[test]
    fn job_without_builds() {
        let job: Job = serde_json::from_str(
            r#"{"name": "fresh", "builds": [], "lastBuild": null, "description": null}"#,
        )
        .unwrap();

        assert_eq!(job.last_build_number(), None);
        assert_eq!(job.description, None);
        assert!(job.health_report.is_empty());
    }

    #[test]
    fn deserialize_view_response() {
        let view: View = read_json_from_file("test/test_view_response.json").unwrap();

        assert_eq!(view.name, "mobile");
        assert_eq!(view.jobs.len(), 2);
        assert_eq!(view.jobs[1].name, "ios-mobile");
        assert_eq!(view.jobs[1].color, "red");
    }
}
