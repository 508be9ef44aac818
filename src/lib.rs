//! `jenkins_api` is a small client for the Jenkins JSON API. It mainly uses `reqwest` and
//! `serde` under the hood.
//!
//! Start with [`JenkinsApi::init`], fetch jobs and builds and read what triggered them through
//! the [`Actionable`] accessors:
//!
//! ```no_run
//! use jenkins_api::{Actionable, Connection, JenkinsApi};
//!
//! # async fn run() -> jenkins_api::Result<()> {
//! let jenkins = JenkinsApi::init(Connection::new("http://jenkins.sample.com:8080", "sromku", "0011"));
//!
//! let build = jenkins.get_build("android-mobile", 196).await?;
//! println!("{} started by {}", build.full_display_name, build.get_user()?.user_name);
//!
//! jenkins
//!     .start_build("android-mobile", vec![("branch", "master"), ("build", "staging")])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Have a look at the
//! [Jenkins remote access API](https://www.jenkins.io/doc/book/using/remote-access-api/)
//! if you have questions about the various API endpoints.

mod accessors;
mod api;
mod builds;
mod client;
mod config;
mod errors;
mod jobs;
pub mod models;
mod views;

pub use crate::accessors::Actionable;
pub use crate::api::JenkinsApi;
pub use crate::client::{JenkinsClient, JenkinsConnector};
pub use crate::config::Connection;
pub use crate::errors::{ErrorKind, JenkinsApiError, Result};
pub use crate::models::{
    Action, Artifact, Build, BuildResult, Cause, HealthReport, Job, ParamType,
    Parameter, ParameterValue, TestResult, UpstreamJob, User, View,
};
