//! cheno-deploy: writes the site artifacts served next to the built app.
//!
//! Produces `config.json` (site name, revision, domain) and an Apache
//! `.htaccess` in the distribution directory. The revision is
//! `cheno-<short git hash>` of the current checkout unless given
//! explicitly.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin cheno-deploy -- [OPTIONS]
//! ```

#![allow(clippy::print_stderr)]

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use cheno_core::{HTACCESS, SiteConfig};
use clap::Parser;

/// Write `config.json` and `.htaccess` for a cheno deployment.
#[derive(Parser)]
#[command(name = "cheno-deploy", version)]
struct Cli {
    /// Distribution directory; created if missing.
    #[arg(long, default_value = "dist")]
    dist: PathBuf,

    /// Site name recorded in `config.json`.
    #[arg(long, default_value = SiteConfig::DEFAULT_NAME)]
    name: String,

    /// Public domain recorded in `config.json`.
    #[arg(long, default_value = SiteConfig::DEFAULT_DOMAIN)]
    domain: String,

    /// Short commit hash to use instead of asking git.
    #[arg(long)]
    revision: Option<String>,

    /// Do not write `.htaccess`.
    #[arg(long)]
    skip_htaccess: bool,
}

/// Errors that abort a deploy.
#[derive(Debug, thiserror::Error)]
enum DeployError {
    /// `git` could not be run or did not report a commit.
    #[error("could not read the current commit: {0}")]
    Git(String),

    /// Writing into the distribution directory failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// The site config could not be serialized.
    #[error("could not serialize site config: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(written) => {
            for path in written {
                log::info!("wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error during deploy: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Write the deploy artifacts and return the paths written.
fn run(cli: &Cli) -> Result<Vec<PathBuf>, DeployError> {
    let hash = match &cli.revision {
        Some(hash) => hash.clone(),
        None => short_hash()?,
    };
    let config = SiteConfig::new(&cli.name, &hash, &cli.domain);
    log::debug!("deploying {} to {}", config.revision, cli.dist.display());

    std::fs::create_dir_all(&cli.dist).map_err(|source| DeployError::Io {
        path: cli.dist.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(2);
    written.push(write(&cli.dist.join("config.json"), &config.to_json_pretty()?)?);
    if cli.skip_htaccess {
        log::info!("skipping .htaccess");
    } else {
        written.push(write(&cli.dist.join(".htaccess"), HTACCESS)?);
    }
    Ok(written)
}

fn write(path: &Path, contents: &str) -> Result<PathBuf, DeployError> {
    std::fs::write(path, contents).map_err(|source| DeployError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// `git rev-parse --short HEAD` of the working directory.
fn short_hash() -> Result<String, DeployError> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .map_err(|e| DeployError::Git(e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DeployError::Git(stderr.trim().to_owned()));
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if hash.is_empty() {
        return Err(DeployError::Git("git printed no commit".to_owned()));
    }
    Ok(hash)
}
