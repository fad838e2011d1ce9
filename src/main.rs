//! PRO License CLI - Issue and verify license keys
//!
//! Keys are printed to stdout, one per line. Validation prints the JSON
//! result and exits with 1 when the key is rejected. Logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pro_license::{
    LicenseCodec, LicenseConfig, LicenseToken, LicenseType, ValidationResult, load_config,
};

#[derive(Parser, Debug)]
#[command(name = "pro-license")]
#[command(about = "Issue and verify PRO license keys")]
struct Args {
    /// Shared secret; overrides LICENSE_SECRET_KEY and --config
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Allow the insecure development secret when none is configured
    #[arg(long, global = true)]
    dev: bool,

    /// JSON config file ({"secret_key": "...", "dev_mode": false})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue a single key
    Generate {
        /// 1_month, 6_months or 1_year
        license_type: LicenseType,
        /// Bind the key to this user id
        #[arg(short, long)]
        user_id: Option<String>,
    },
    /// Issue several unbound keys
    Batch {
        license_type: LicenseType,
        quantity: usize,
    },
    /// Verify a key and print the result as JSON
    Validate {
        key: String,
        /// Also require the key to be bound to this user id
        #[arg(short, long)]
        user_id: Option<String>,
    },
    /// Print the fields of a key without verifying it
    Inspect { key: String },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let codec = || build_codec(args.config.as_deref(), args.dev, args.secret.as_deref());

    match args.command {
        Command::Generate {
            license_type,
            user_id,
        } => {
            let key = codec()?.generate_license_key(license_type, user_id.as_deref());
            info!("Issued {} key", license_type);
            println!("{key}");
        }
        Command::Batch {
            license_type,
            quantity,
        } => {
            let keys = codec()?.generate_batch_license_keys(license_type, quantity)?;
            info!("Issued {} {} keys", keys.len(), license_type);
            for key in keys {
                println!("{key}");
            }
        }
        Command::Validate { key, user_id } => {
            let outcome = codec()?.validate_key(&key);
            let bound = match (&outcome, &user_id) {
                (Ok(license), Some(user)) => license.is_bound_to(Some(user)),
                _ => true,
            };
            let result = ValidationResult::from(outcome);
            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.valid {
                return Ok(ExitCode::FAILURE);
            }
            if !bound {
                warn!("Key is valid but not bound to the given user id");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Inspect { key } => {
            let token = LicenseToken::parse(&key).context("cannot inspect key")?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build_codec(
    config_path: Option<&Path>,
    dev: bool,
    secret_override: Option<&str>,
) -> Result<LicenseCodec> {
    let mut config = match config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LicenseConfig::from_env(),
    };
    config.dev_mode |= dev;

    let secret = config.resolve_secret(secret_override)?;
    Ok(LicenseCodec::new(secret))
}
