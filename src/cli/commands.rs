use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::render::to_termtree;
use crate::runner::ScriptRunner;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run { script, root }) => _run(script, root),
        Some(Commands::Tree { script, root }) => _tree(script, root),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            generate(*shell, &mut Cli::command(), "phototree", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn _run(script: &Path, root: &str) -> CliResult<()> {
    debug!("script: {:?}, root: {:?}", script, root);
    let settings = Settings::load()?;
    let file = File::open(script).map_err(|e| CliError::ScriptOpen {
        path: script.to_path_buf(),
        source: e,
    })?;

    let mut runner = ScriptRunner::with_settings(root, settings);
    let stdout = io::stdout();
    runner.run(BufReader::new(file), &mut stdout.lock())?;
    Ok(())
}

#[instrument]
fn _tree(script: &Path, root: &str) -> CliResult<()> {
    debug!("script: {:?}, root: {:?}", script, root);
    let settings = Settings::load()?;
    let file = File::open(script).map_err(|e| CliError::ScriptOpen {
        path: script.to_path_buf(),
        source: e,
    })?;

    // Echoes and Display dumps are discarded; only the final shape matters
    let mut runner = ScriptRunner::with_settings(root, settings);
    runner.run(BufReader::new(file), &mut io::sink())?;
    println!("{}", to_termtree(runner.tree()));
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Config(crate::errors::ConfigError::Message(
            "cannot determine config directory".to_string(),
        )))?;
    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, Settings::template())?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("cannot determine config directory"),
    }
    Ok(())
}
