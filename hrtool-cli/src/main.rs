use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use hrtool_lib::{Error, Repository, repository::config::CoreConfig};
use sysexits::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod breeding;
mod finance;
mod horse;
mod prompt;

#[derive(Parser, Debug)]
#[command(name = "hrtool")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the directory the horse records are stored in
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on horses
    #[command(subcommand)]
    Horse(horse::Command),
    /// Show the mare and stallion selection lists
    Breeding,
    /// Convert a DP amount to HRC
    Finance(finance::Args),
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set up logging");
    }

    let cli = Cli::parse();

    // The calculator doesn't need the records
    if let Command::Finance(args) = &cli.command {
        return finance::handle(args);
    }

    let cfg = match CoreConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => return fail(&e),
    };
    let cfg = match cli.data_dir {
        Some(dir) => cfg.with_data_dir(dir),
        None => cfg,
    };
    let repo = Repository::open(cfg);

    match &cli.command {
        Command::Horse(cmd) => horse::handle(&repo, cmd),
        Command::Breeding => breeding::handle(&repo),
        Command::Finance(_) => ExitCode::Ok,
    }
}

/// Report an error and pick the matching exit code.
pub(crate) fn fail(err: &Error) -> ExitCode {
    eprintln!("{} {err}", "error:".red().bold());
    exit_code(err)
}

/// Warn that a change only reached memory.
pub(crate) fn unsaved() -> ExitCode {
    eprintln!(
        "{} the change could not be written to storage",
        "warning:".yellow().bold()
    );
    ExitCode::IoErr
}

fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::NameRequired | Error::Json(_) => ExitCode::DataErr,
        Error::Io(_) => ExitCode::IoErr,
        Error::NoHome | Error::TomlDe(_) | Error::TomlSer(_) => ExitCode::Config,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from([
            "hrtool",
            "horse",
            "add",
            "--name",
            "Bella",
            "--sex",
            "Mare",
            "--life-number",
            "123",
        ]);

        assert!(matches!(
            cli.command,
            Command::Horse(horse::Command::Add { ref name, .. }) if name == "Bella"
        ));
    }

    #[test]
    fn test_parse_global_data_dir() {
        let cli = Cli::parse_from(["hrtool", "breeding", "--data-dir", "/tmp/horses"]);

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/horses")));
    }

    #[test]
    fn test_exit_codes() {
        assert!(matches!(exit_code(&Error::NameRequired), ExitCode::DataErr));
        assert!(matches!(exit_code(&Error::NoHome), ExitCode::Config));
    }
}
