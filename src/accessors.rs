use crate::errors::{JenkinsApiError, Result};
use crate::models::{
    Action, Build, Cause, Job, ParamType, Parameter, ParameterValue, TestResult,
    UpstreamJob, User,
};

/// Typed lookups over anything that carries a Jenkins `actions` list.
///
/// All lookups walk the actions in order and stop at the first match; later entries with the
/// same name are never consulted.
pub trait Actionable {
    fn actions(&self) -> &[Action];

    /// Every recorded parameter, in the order Jenkins reported them.
    fn parameters(&self) -> Box<dyn Iterator<Item = &Parameter> + '_> {
        Box::new(
            self.actions()
                .iter()
                .filter_map(|action| match action {
                    Action::Parameters(parameters) => Some(parameters),
                    _ => None,
                })
                .flatten(),
        )
    }

    /// Every recorded cause, in the order Jenkins reported them.
    fn causes(&self) -> Box<dyn Iterator<Item = &Cause> + '_> {
        Box::new(
            self.actions()
                .iter()
                .filter_map(|action| match action {
                    Action::Causes(causes) => Some(causes),
                    _ => None,
                })
                .flatten(),
        )
    }

    /// Returns the first parameter called `name`.
    fn get_param(&self, name: &str) -> Result<&Parameter> {
        self.parameters()
            .find(|parameter| parameter.name == name)
            .ok_or_else(|| JenkinsApiError::ParamNotFound(name.to_string()))
    }

    /// Returns the value of a string parameter.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let branch = build.get_param_string("branch")?;
    /// ```
    fn get_param_string(&self, name: &str) -> Result<&str> {
        match &self.get_param(name)?.value {
            Some(ParameterValue::String(value)) => Ok(value.as_str()),
            _ => Err(type_mismatch(name, ParamType::String)),
        }
    }

    fn get_param_int(&self, name: &str) -> Result<i64> {
        match &self.get_param(name)?.value {
            Some(ParameterValue::Int(value)) => Ok(*value),
            _ => Err(type_mismatch(name, ParamType::Int)),
        }
    }

    fn get_param_bool(&self, name: &str) -> Result<bool> {
        match &self.get_param(name)?.value {
            Some(ParameterValue::Bool(value)) => Ok(*value),
            _ => Err(type_mismatch(name, ParamType::Bool)),
        }
    }

    /// Returns the user of the first cause with a non-empty user id.
    fn get_user(&self) -> Result<&User> {
        self.causes()
            .find_map(Cause::started_by_user)
            .ok_or(JenkinsApiError::UserNotFound)
    }

    /// Returns the upstream build of the first cause with a non-empty upstream project.
    fn get_upstream_job(&self) -> Result<&UpstreamJob> {
        self.causes()
            .find_map(Cause::started_by_upstream)
            .ok_or(JenkinsApiError::UpstreamJobNotFound)
    }

    /// Returns the first test summary that counted at least one test.
    ///
    /// A build that ran zero tests looks exactly like a build without a test action and
    /// yields `TestResultsNotFound` as well.
    fn get_test_results(&self) -> Result<&TestResult> {
        self.actions()
            .iter()
            .find_map(|action| match action {
                Action::TestResult(result) if result.total_count > 0 => Some(result),
                _ => None,
            })
            .ok_or(JenkinsApiError::TestResultsNotFound)
    }
}

fn type_mismatch(name: &str, expected: ParamType) -> JenkinsApiError {
    JenkinsApiError::TypeMismatch {
        name: name.to_string(),
        expected,
    }
}

impl Actionable for Build {
    fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl Actionable for Job {
    fn actions(&self) -> &[Action] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::models::tests::read_json_from_file;
    use serde_json::json;

    fn build_with_actions(actions: serde_json::Value) -> Build {
        serde_json::from_value(json!({ "number": 1, "actions": actions })).unwrap()
    }

    #[test]
    fn param_string_found() {
        let build = build_with_actions(json!([
            {"parameters": [{"name": "branch", "value": "master"}]}
        ]));
        assert_eq!(build.get_param_string("branch").unwrap(), "master");
    }

    #[test]
    fn param_string_with_int_value_is_a_type_mismatch() {
        let build = build_with_actions(json!([
            {"parameters": [{"name": "branch", "value": 123}]}
        ]));
        let err = build.get_param_string("branch").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(err.to_string().contains("'branch'"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn param_int_missing_is_not_found() {
        let build = build_with_actions(json!([
            {"parameters": [{"name": "branch", "value": "master"}]},
            {"causes": []}
        ]));
        let err = build.get_param_int("retries").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("'retries'"));
    }

    #[test]
    fn first_matching_parameter_wins() {
        let build = build_with_actions(json!([
            {"causes": [{"userId": "alice"}]},
            {"parameters": [{"name": "retries", "value": "three"}, {"name": "retries", "value": 3}]},
            {"parameters": [{"name": "retries", "value": 4}]}
        ]));
        assert_eq!(
            build.get_param_int("retries").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(build.get_param_string("retries").unwrap(), "three");
    }

    #[test]
    fn typed_params_from_fixture() {
        let build: Build = read_json_from_file("test/test_build_response.json").unwrap();

        assert_eq!(build.get_param_string("branch").unwrap(), "master");
        assert_eq!(build.get_param_string("build").unwrap(), "staging");
        assert!(build.get_param_bool("clean").unwrap());
        assert_eq!(build.get_param_int("retries").unwrap(), 3);
        assert_eq!(
            build.get_param_string("signing_key").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(build.parameters().count(), 6);
    }

    #[test]
    fn get_user_returns_first_user_cause() {
        let build = build_with_actions(json!([
            {"causes": [{"userId": "alice", "userName": "Alice"}, {"userId": "bob"}]}
        ]));
        let user = build.get_user().unwrap();
        assert_eq!(user.user_id, "alice");
        assert_eq!(user.user_name, "Alice");
    }

    #[test]
    fn get_user_without_user_cause_is_not_found() {
        let build = build_with_actions(json!([{"causes": []}]));
        assert_eq!(build.get_user().unwrap_err().kind(), ErrorKind::NotFound);

        let build = build_with_actions(json!([
            {"causes": [{"userId": "", "userName": "anonymous"}, {"upstreamProject": "core"}]}
        ]));
        let err = build.get_user().unwrap_err();
        assert!(matches!(err, JenkinsApiError::UserNotFound));
        assert!(err.to_string().contains("upstream"));
    }

    #[test]
    fn get_upstream_job_skips_user_causes() {
        let build: Build = read_json_from_file("test/test_build_response.json").unwrap();

        let upstream = build.get_upstream_job().unwrap();
        assert_eq!(upstream.upstream_project, "core-lib");
        assert_eq!(upstream.upstream_build, 41);
        assert_eq!(build.get_user().unwrap().user_id, "alice");
    }

    #[test]
    fn get_upstream_job_without_upstream_cause_is_not_found() {
        let build = build_with_actions(json!([{"causes": [{"userId": "alice"}]}]));
        let err = build.get_upstream_job().unwrap_err();
        assert!(matches!(err, JenkinsApiError::UpstreamJobNotFound));
        assert!(err.to_string().contains("user"));
    }

    #[test]
    fn cause_with_user_and_upstream_answers_both_lookups() {
        let build = build_with_actions(json!([
            {"causes": [{"userId": "alice", "userName": "Alice", "upstreamProject": "core", "upstreamBuild": 7}]}
        ]));
        assert_eq!(build.get_user().unwrap().user_id, "alice");
        let upstream = build.get_upstream_job().unwrap();
        assert_eq!(upstream.upstream_project, "core");
        assert_eq!(upstream.upstream_build, 7);
    }

    #[test]
    fn anonymous_user_cause_is_not_a_user() {
        let build = build_with_actions(json!([
            {"causes": [{"shortDescription": "Started by anonymous user", "userId": null, "userName": "anonymous"}]}
        ]));
        assert_eq!(build.get_user().unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn get_test_results_skips_empty_summaries() {
        let build = build_with_actions(json!([
            {"totalCount": 0},
            {"totalCount": 5, "failCount": 1}
        ]));
        let results = build.get_test_results().unwrap();
        assert_eq!(results.total_count, 5);
        assert_eq!(results.fail_count, 1);
    }

    #[test]
    fn get_test_results_without_tests_is_not_found() {
        let build = build_with_actions(json!([{"totalCount": 0}, {}]));
        let err = build.get_test_results().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn job_actions_are_searchable() {
        let job: Job = serde_json::from_value(json!({
            "name": "android-mobile",
            "actions": [{}, {"parameters": [{"name": "flavour", "value": "debug"}]}]
        }))
        .unwrap();
        assert_eq!(job.get_param_string("flavour").unwrap(), "debug");
        assert_eq!(job.get_user().unwrap_err().kind(), ErrorKind::NotFound);
    }
}
