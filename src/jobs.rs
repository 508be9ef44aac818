use crate::api::JenkinsApi;
use crate::errors::Result;
use crate::models::{Job, ParameterValue, StartParameters};
use log::{debug, info};

impl JenkinsApi {
    /// Returns a job with its build history.
    ///
    /// # Arguments
    ///
    /// * `project` - Name of the job, folders separated by `/`
    ///
    /// # Performed API Request
    ///
    /// ```text
    /// GET {baseUrl}/job/{project}/api/json
    /// ```
    pub async fn get_job(&self, project: &str) -> Result<Job> {
        let request_path = format!("{}/api/json", self.job_url(project)?);
        self.fetch(&request_path).await
    }

    /// Starts a new build of a job and passes `params` to it.
    ///
    /// The order in which parameters reach Jenkins follows the iteration order of `params`.
    ///
    /// # Arguments
    ///
    /// * `project` - Name of the job, folders separated by `/`
    /// * `params` - Name/value pairs; an empty collection starts the build without parameters
    ///
    /// # Performed API Request
    ///
    /// ```text
    /// POST {baseUrl}/job/{project}/build?json={"parameter":[{"name":..,"value":..}]}
    /// ```
    pub async fn start_build<I, K, V>(&self, project: &str, params: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        let parameters: StartParameters = params.into_iter().collect();
        let request_path = self.build_trigger_url(project, &parameters)?;

        self.client().post(&request_path).await?;
        info!(
            "Started build of '{}' with {} parameter(s)",
            project,
            parameters.parameter.len()
        );
        Ok(())
    }

    /// Starts a new build of a job without parameters.
    ///
    /// # Performed API Request
    ///
    /// ```text
    /// POST {baseUrl}/job/{project}/build
    /// ```
    pub async fn start_job(&self, project: &str) -> Result<()> {
        self.start_build(project, Vec::<(String, ParameterValue)>::new())
            .await
    }

    fn build_trigger_url(&self, project: &str, parameters: &StartParameters) -> Result<String> {
        let url = format!("{}/build", self.job_url(project)?);
        if parameters.is_empty() {
            return Ok(url);
        }

        let envelope = serde_json::to_string(parameters)?;
        debug!("build parameters for '{}': {}", project, envelope);
        Ok(format!("{}?json={}", url, urlencoding::encode(&envelope)))
    }
}
