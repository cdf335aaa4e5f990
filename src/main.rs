use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;

use crate::chart::build_chart_spec;
use crate::dataset::{load_dataset, DEFAULT_DATA_PATH};
use crate::enums::VulnDashEnv;
use crate::error::VulnDashError;
use crate::output::console::{print_dataset_summary, print_serving_banner};
use crate::output::page::render_dashboard_page;
use crate::server::DashboardState;
use crate::structs::DashboardConfig;

mod chart;
mod dataset;
mod enums;
mod env;
mod error;
mod macros;
mod output;
mod server;
mod structs;
mod utils;

const SENTRY_DSN: Option<&str> = option_env!("VULNDASH_SENTRY_DSN");
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Parser)]
#[command(name = "vulndash", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the vulnerability score dashboard
    Serve(ServeArguments),
    Info,
}

#[derive(Args, Debug)]
struct ServeArguments {
    /// CSV file with `id` and `combined_score` columns
    #[arg(long, default_value = DEFAULT_DATA_PATH, value_name = "FILE")]
    data: PathBuf,
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Run in debug mode
    #[arg(long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Default for ServeArguments {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

fn serve(env: &env::Environment, args: &ServeArguments) -> Result<()> {
    let config = DashboardConfig::new(&args.data, &args.host, args.port, env.debug || args.debug)?;

    print_dbg!(config.debug, "Loading dataset from {} ...", config.data_path.display());
    let records = load_dataset(&config.data_path)?;
    print_dataset_summary(&config, &records);

    let spec = build_chart_spec(&records);
    let chart_json_len = spec.to_json()?.len();
    let page = render_dashboard_page(&spec)?;
    let state = DashboardState::new(page, config.debug)?;

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(async {
        let listener = server::bind(config.listen_addr).await?;
        print_serving_banner(&config, chart_json_len, state.etag());
        server::serve(listener, state).await
    })
}

fn print_vulndash_info() -> Result<()> {
    println!("vulndash {}", env!("CARGO_PKG_VERSION"));
    println!("Default dataset: {}", DEFAULT_DATA_PATH);
    println!("Default address: http://{}:{}/", DEFAULT_HOST, DEFAULT_PORT);
    Ok(())
}

fn main() -> Result<()> {
    let env = env::load_env();

    let _sentry_guard = sentry::init((
        SENTRY_DSN.unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(env.vulndash_env.to_string().into()),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    let command_result = match Cli::parse().command {
        Some(Command::Serve(args)) => serve(&env, &args),
        Some(Command::Info) => print_vulndash_info(),
        None => serve(&env, &ServeArguments::default()),
    };
    match command_result {
        Ok(_) => Ok(()),
        Err(err) => {
            // Anything that is not a known load/bind failure is unexpected and worth reporting.
            let report = err.downcast_ref::<VulnDashError>().map_or(true, |e| e.sentry);
            if report {
                sentry_anyhow::capture_anyhow(&err);
            }
            if env.vulndash_env == VulnDashEnv::Dev {
                print_err!("{:?}", err);
            } else {
                print_err!("{}", err);
            }
            process::exit(1);
        }
    }
}
