// Models for the per-build "actions" list and the causes that triggered a build
// -------------------------------------------------------------------------------------------------
//
// Jenkins returns one flat object per action and leaves it to the reader to figure out what kind
// of action it is. The variant is decided once here, while decoding.

use crate::models::parameter::Parameter;
use serde::{Deserialize, Serialize};

/// A single entry of a build's (or job's) `actions` list
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawAction", into = "RawAction")]
pub enum Action {
    /// `hudson.model.ParametersAction`
    Parameters(Vec<Parameter>),
    /// `hudson.model.CauseAction`
    Causes(Vec<Cause>),
    /// Test summary, e.g. `hudson.tasks.junit.TestResultAction`
    TestResult(TestResult),
    /// Any action this crate has no model for
    Other,
}

/// Summary of the tests that ran during a build
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub fail_count: u32,
    pub skip_count: u32,
    pub total_count: u32,
    pub url_name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    causes: Option<Vec<Cause>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fail_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url_name: Option<String>,
}

impl From<RawAction> for Action {
    fn from(raw: RawAction) -> Self {
        if let Some(parameters) = raw.parameters {
            return Action::Parameters(parameters);
        }
        if let Some(causes) = raw.causes {
            return Action::Causes(causes);
        }
        if raw.fail_count.is_some()
            || raw.skip_count.is_some()
            || raw.total_count.is_some()
            || raw.url_name.is_some()
        {
            return Action::TestResult(TestResult {
                fail_count: raw.fail_count.unwrap_or_default(),
                skip_count: raw.skip_count.unwrap_or_default(),
                total_count: raw.total_count.unwrap_or_default(),
                url_name: raw.url_name.unwrap_or_default(),
            });
        }
        Action::Other
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Parameters(parameters) => RawAction {
                parameters: Some(parameters),
                ..Default::default()
            },
            Action::Causes(causes) => RawAction {
                causes: Some(causes),
                ..Default::default()
            },
            Action::TestResult(result) => RawAction {
                fail_count: Some(result.fail_count),
                skip_count: Some(result.skip_count),
                total_count: Some(result.total_count),
                url_name: Some(result.url_name),
                ..Default::default()
            },
            Action::Other => RawAction::default(),
        }
    }
}

/// Explains why a build was started.
///
/// A cause carries a user facet, an upstream facet, both or neither. A facet is kept whenever
/// any of its fields was sent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawCause", into = "RawCause")]
pub struct Cause {
    pub short_description: String,
    pub user: Option<User>,
    pub upstream: Option<UpstreamJob>,
}

impl Cause {
    /// The user that started the build, if the cause names one by id.
    pub fn started_by_user(&self) -> Option<&User> {
        self.user.as_ref().filter(|user| !user.user_id.is_empty())
    }

    /// The upstream build that started the build, if the cause names its project.
    pub fn started_by_upstream(&self) -> Option<&UpstreamJob> {
        self.upstream
            .as_ref()
            .filter(|upstream| !upstream.upstream_project.is_empty())
    }
}

/// Model for the user that started a build
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub user_name: String,
}

/// Model for the upstream build that started a build
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamJob {
    pub upstream_build: u32,
    pub upstream_project: String,
    pub upstream_url: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
struct RawCause {
    #[serde(skip_serializing_if = "Option::is_none")]
    short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_build: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_url: Option<String>,
}

impl From<RawCause> for Cause {
    fn from(raw: RawCause) -> Self {
        let user = if raw.user_id.is_some() || raw.user_name.is_some() {
            Some(User {
                user_id: raw.user_id.unwrap_or_default(),
                user_name: raw.user_name.unwrap_or_default(),
            })
        } else {
            None
        };

        let upstream = if raw.upstream_build.is_some()
            || raw.upstream_project.is_some()
            || raw.upstream_url.is_some()
        {
            Some(UpstreamJob {
                upstream_build: raw.upstream_build.unwrap_or_default(),
                upstream_project: raw.upstream_project.unwrap_or_default(),
                upstream_url: raw.upstream_url.unwrap_or_default(),
            })
        } else {
            None
        };

        Cause {
            short_description: raw.short_description.unwrap_or_default(),
            user,
            upstream,
        }
    }
}

impl From<Cause> for RawCause {
    fn from(cause: Cause) -> Self {
        let (user_id, user_name) = match cause.user {
            Some(user) => (Some(user.user_id), Some(user.user_name)),
            None => (None, None),
        };
        let (upstream_build, upstream_project, upstream_url) = match cause.upstream {
            Some(upstream) => (
                Some(upstream.upstream_build),
                Some(upstream.upstream_project),
                Some(upstream.upstream_url),
            ),
            None => (None, None, None),
        };

        RawCause {
            short_description: Some(cause.short_description).filter(|d| !d.is_empty()),
            user_id,
            user_name,
            upstream_build,
            upstream_project,
            upstream_url,
        }
    }
}

// -------------------------------------------------------------------------------------------------
