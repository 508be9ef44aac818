use crate::api::JenkinsApi;
use crate::errors::Result;
use crate::models::{Job, View};

impl JenkinsApi {
    /// Returns a view and the jobs it lists.
    ///
    /// # Performed API Request
    ///
    /// ```text
    /// GET {baseUrl}/view/{name}/api/json
    /// ```
    pub async fn get_view(&self, name: &str) -> Result<View> {
        let request_path = format!(
            "{}/view/{}/api/json",
            self.connection().base_url(),
            urlencoding::encode(name)
        );
        self.fetch(&request_path).await
    }

    /// Lists all top-level jobs.
    ///
    /// # Performed API Request
    ///
    /// ```text
    /// GET {baseUrl}/api/json
    /// ```
    pub async fn get_jobs(&self) -> Result<Vec<Job>> {
        let request_path = format!("{}/api/json", self.connection().base_url());
        let root: View = self.fetch(&request_path).await?;
        Ok(root.jobs)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Connection;
    use crate::errors::ErrorKind;
    use crate::JenkinsApi;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_view_decodes_response() {
        let server = MockServer::start().await;
        let body = std::fs::read_to_string("test/test_view_response.json").unwrap();
        Mock::given(method("GET"))
            .and(path("/view/mobile/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let jenkins = JenkinsApi::init(Connection::new(server.uri(), "alice", "secret-token"));
        let view = jenkins.get_view("mobile").await.unwrap();

        assert_eq!(view.name, "mobile");
        assert_eq!(view.jobs.len(), 2);
    }

    #[tokio::test]
    async fn get_jobs_lists_root_jobs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"_class": "hudson.model.Hudson", "mode": "NORMAL", "jobs": [{"name": "a", "color": "blue"}, {"name": "b", "color": "notbuilt"}]}"#,
            ))
            .mount(&server)
            .await;

        let jenkins = JenkinsApi::init(Connection::new(server.uri(), "alice", "secret-token"));
        let jobs = jenkins.get_jobs().await.unwrap();

        let names: Vec<&str> = jobs.iter().map(|job| job.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn get_view_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view/mobile/api/json"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let jenkins = JenkinsApi::init(Connection::new(server.uri(), "alice", "wrong"));
        let err = jenkins.get_view("mobile").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Auth);
    }

    #[tokio::test]
    async fn get_jobs_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let jenkins = JenkinsApi::init(Connection::new(server.uri(), "alice", "wrong"));
        let err = jenkins.get_jobs().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Auth);
    }
}
