use crate::client::JenkinsClient;
use crate::config::Connection;
use crate::errors::{JenkinsApiError, Result};
use serde::de::DeserializeOwned;

/// Entry point of the library: a Jenkins connection plus one reusable HTTP client.
///
/// # Example
///
/// ```no_run
/// use jenkins_api::{Actionable, Connection, JenkinsApi};
///
/// # async fn run() -> jenkins_api::Result<()> {
/// let jenkins = JenkinsApi::init(Connection::new(
///     "http://jenkins.sample.com:8080",
///     "sromku",
///     "001122334455667788",
/// ));
/// let build = jenkins.get_build("android-mobile", 196).await?;
/// let branch = build.get_param_string("branch")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JenkinsApi {
    client: JenkinsClient,
}

impl JenkinsApi {
    /// Binds a new client to `connection`. Does not touch the network.
    pub fn init(connection: Connection) -> Self {
        JenkinsApi {
            client: JenkinsClient::from(connection),
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.client.connection
    }

    pub(crate) fn client(&self) -> &JenkinsClient {
        &self.client
    }

    /// `{baseUrl}/job/{project}` with folders expanded, e.g. `team/app` and `team/job/app` both
    /// become `{baseUrl}/job/team/job/app`. An empty project name is rejected.
    pub(crate) fn job_url(&self, project: &str) -> Result<String> {
        let job_path = encode_job_path(project);
        if job_path.is_empty() {
            return Err(JenkinsApiError::InvalidUrl {
                url: format!("{}/job/", self.connection().base_url()),
                reason: format!("'{}' is not a job name", project),
            });
        }
        Ok(format!("{}/job/{}", self.connection().base_url(), job_path))
    }

    /// Fetches `url` and decodes the body as `T`.
    pub(crate) async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.client.get(url).await?;
        let value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}

impl From<Connection> for JenkinsApi {
    fn from(connection: Connection) -> Self {
        JenkinsApi::init(connection)
    }
}

/// Percent-encodes every segment of a (possibly foldered) job name.
///
/// Accepts both `team/app` and the URL form `team/job/app`. A name is only read as the URL form
/// when every second segment is `job`.
pub(crate) fn encode_job_path(name: &str) -> String {
    let segments: Vec<&str> = name.split('/').filter(|segment| !segment.is_empty()).collect();
    let expanded = segments.len() >= 3
        && segments.len() % 2 == 1
        && segments.iter().skip(1).step_by(2).all(|segment| *segment == "job");

    segments
        .iter()
        .step_by(if expanded { 2 } else { 1 })
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/job/")
}
