pub mod action;
pub mod build;
pub mod job;
pub mod parameter;

pub use action::{Action, Cause, TestResult, UpstreamJob, User};
pub use build::{Artifact, Build, BuildResult};
pub use job::{HealthReport, Job, View};
pub use parameter::{ParamType, Parameter, ParameterValue, StartParameters};
