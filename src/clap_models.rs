use clap::{Parser, Subcommand};
use jenkins_api::{ParamType, ParameterValue};
use std::str::FromStr;

#[derive(Parser)]
#[clap(
author,
version,
about,
long_about = None
)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// Path to JSON config file
    #[clap(short, long, value_parser, default_value_t = String::from("./jenkins.json"), env = "JENKINS_API_CONFIG")]
    pub config: String,

    /// Jenkins base URL, overrides the config file together with --user and --token
    #[clap(long, value_parser, global = true, env = "JENKINS_URL")]
    pub url: Option<String>,

    /// Jenkins user name
    #[clap(long, value_parser, global = true, env = "JENKINS_USER")]
    pub user: Option<String>,

    /// Jenkins API token of the user
    #[clap(
        long,
        value_parser,
        global = true,
        env = "JENKINS_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a job and its build history
    Job {
        /// Name of the job, folders separated by '/'
        #[clap(value_parser)]
        name: String,
    },

    /// List all top-level jobs
    Jobs,

    /// Print a view and the jobs it contains
    View {
        #[clap(value_parser)]
        name: String,
    },

    /// Inspect a single build
    Build {
        /// Name of the job, folders separated by '/'
        #[clap(value_parser)]
        job: String,

        /// Build number
        #[clap(value_parser)]
        number: u32,

        #[clap(subcommand)]
        build_command: Option<BuildCommands>,
    },

    /// Start a new build
    Start {
        /// Name of the job, folders separated by '/'
        #[clap(value_parser)]
        job: String,

        /// Build parameter; true/false and whole numbers are sent as booleans and integers
        #[clap(short = 'p', long = "param", value_parser = parse_key_value, value_name = "NAME=VALUE")]
        params: Vec<(String, ParameterValue)>,
    },
}

#[derive(Subcommand)]
pub enum BuildCommands {
    /// Print the whole build (default)
    Info,
    /// Print all build parameters
    Params,
    /// Print a single build parameter
    Param {
        #[clap(value_parser)]
        name: String,

        /// Expected type of the parameter
        #[clap(short = 't', long = "type", value_parser = parse_param_type, default_value = "string", value_name = "string|int|bool")]
        param_type: ParamType,
    },
    /// Print the user that started the build
    User,
    /// Print the upstream build that started the build
    Upstream,
    /// Print the test summary
    Tests,
}

fn parse_key_value(input: &str) -> Result<(String, ParameterValue), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("invalid NAME=VALUE: no '=' found in '{}'", input))?;
    if name.is_empty() {
        return Err(format!("invalid NAME=VALUE: empty name in '{}'", input));
    }
    Ok((name.to_string(), ParameterValue::infer(value)))
}

fn parse_param_type(input: &str) -> Result<ParamType, String> {
    ParamType::from_str(input).map_err(|_| format!("'{}' is not one of string, int, bool", input))
}
