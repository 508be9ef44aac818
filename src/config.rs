use anyhow::Context;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;

/// Model for a Jenkins connection configuration
///
/// Read from a JSON file like
///
/// ```json
/// {
///   "baseUrl": "http://jenkins.sample.com:8080",
///   "username": "sromku",
///   "accessToken": "001122334455667788"
/// }
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(deserialize_with = "deserialize_base_url")]
    base_url: String,
    username: String,
    access_token: String,
}

fn deserialize_base_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let url = String::deserialize(deserializer)?;
    Ok(normalize_base_url(&url))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl Connection {
    pub fn new(
        base_url: impl AsRef<str>,
        username: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Connection {
            base_url: normalize_base_url(base_url.as_ref()),
            username: username.into(),
            access_token: access_token.into(),
        }
    }

    /// Reads a Jenkins connection from a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - String slice that holds the path to the JSON config file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Unable to find config at path '{}'", path))?;
        let connection: Self = serde_json::from_str(data.as_str())
            .with_context(|| format!("Invalid JSON format in config '{}'", path))?;
        Ok(connection)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("access_token", &"***")
            .finish()
    }
}
