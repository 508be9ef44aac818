use crate::api::JenkinsApi;
use crate::errors::Result;
use crate::models::Build;

impl JenkinsApi {
    /// Returns a single build of a job.
    ///
    /// # Arguments
    ///
    /// * `project` - Name of the job, folders separated by `/`
    /// * `number` - Build number
    ///
    /// # Performed API Request
    ///
    /// ```text
    /// GET {baseUrl}/job/{project}/{number}/api/json
    /// ```
    pub async fn get_build(&self, project: &str, number: u32) -> Result<Build> {
        let request_path = format!("{}/{}/api/json", self.job_url(project)?, number);
        self.fetch(&request_path).await
    }
}
