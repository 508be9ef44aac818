use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::clap_models::*;
use jenkins_api::{Actionable, Build, Connection, JenkinsApi, ParamType};

pub async fn init_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let connection = resolve_connection(&cli)?;
    debug!("using {:?}", connection);
    let jenkins = JenkinsApi::init(connection);

    match &cli.command {
        Commands::Job { name } => {
            let job = jenkins.get_job(name).await?;
            print_json(&job)?;
        }

        Commands::Jobs => {
            let jobs = jenkins.get_jobs().await?;
            print_json(&jobs)?;
        }

        Commands::View { name } => {
            let view = jenkins.get_view(name).await?;
            print_json(&view)?;
        }

        Commands::Build {
            job,
            number,
            build_command,
        } => {
            let build = jenkins.get_build(job, *number).await?;
            print_build(&build, build_command.as_ref().unwrap_or(&BuildCommands::Info))?;
        }

        Commands::Start { job, params } => {
            jenkins.start_build(job, params.clone()).await?;
            println!("{} Build of {} requested", "🚀".green(), job.bold());
        }
    }
    Ok(())
}

/// Uses --url/--user/--token when all of them are present, the config file when none is.
fn resolve_connection(cli: &Cli) -> anyhow::Result<Connection> {
    match (&cli.url, &cli.user, &cli.token) {
        (Some(url), Some(user), Some(token)) => Ok(Connection::new(url, user, token)),
        (None, None, None) => Connection::from_file(cli.config.as_str())
            .with_context(|| "No usable Jenkins connection (use --config or --url/--user/--token)"),
        (url, user, token) => {
            let missing: Vec<&str> = [("--url", url), ("--user", user), ("--token", token)]
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(flag, _)| *flag)
                .collect();
            bail!(
                "Incomplete Jenkins connection, missing {} (--url, --user and --token go together)",
                missing.join(", ")
            )
        }
    }
}

fn print_build(build: &Build, command: &BuildCommands) -> anyhow::Result<()> {
    match command {
        BuildCommands::Info => print_json(build),
        BuildCommands::Params => {
            let params: Vec<_> = build.parameters().collect();
            print_json(&params)
        }
        BuildCommands::Param { name, param_type } => {
            match param_type {
                ParamType::String => println!("{}", build.get_param_string(name)?),
                ParamType::Int => println!("{}", build.get_param_int(name)?),
                ParamType::Bool => println!("{}", build.get_param_bool(name)?),
            }
            Ok(())
        }
        BuildCommands::User => print_json(build.get_user()?),
        BuildCommands::Upstream => print_json(build.get_upstream_job()?),
        BuildCommands::Tests => {
            let results = build.get_test_results()?;
            print_json(results)?;
            if results.fail_count > 0 {
                eprintln!(
                    "{:>8} {} of {} tests failed",
                    "⚠".yellow(),
                    results.fail_count,
                    results.total_count
                );
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
