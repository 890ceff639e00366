use crate::cli::{Cli, Command};
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wfsports::error::BracketError;
use wfsports::render::TABLE_FILE_NAME;
use wfsports::seeding::SeedOrder;
use wfsports::{round, Step};

enum OutputMode {
    Write,
    DryRun,
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        output_dir,
        seed,
        keep_order,
        dry_run,
        command,
    } = parse_args()?;

    let order = SeedOrder::from_options(seed, keep_order);
    let mode = if dry_run {
        OutputMode::DryRun
    } else {
        OutputMode::Write
    };
    log::debug!("Seeding order: {order:?}");

    match command {
        Command::Start { file } => {
            let step = wfsports::start(&file, order)
                .with_context(|| format!("starting bracket from {}", file.display()))?;
            finalize_step(mode, output_dir.as_deref(), step)
        }
        Command::Next { file } => {
            let step = wfsports::advance(&file, order)
                .with_context(|| format!("advancing bracket from {}", file.display()))?;
            finalize_step(mode, output_dir.as_deref(), step)
        }
        Command::Show { file } => {
            let html = wfsports::show(&file)
                .with_context(|| format!("rendering pairings of {}", file.display()))?;
            let target = output_path(output_dir.as_deref(), TABLE_FILE_NAME);
            finalize_output(mode, &target, &html).context("writing HTML table")
        }
    }
}

fn parse_args() -> anyhow::Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let usage = err.render().to_string();
            Err(BracketError::Usage(usage.trim_end().to_string()).into())
        }
    }
}

fn finalize_step(mode: OutputMode, output_dir: Option<&Path>, step: Step) -> anyhow::Result<()> {
    match step {
        Step::Champion(name) => {
            println!("{name} is the winner!");
            Ok(())
        }
        Step::Round { number, matches } => {
            let contents = round::encode(&matches)?;
            let target = output_path(output_dir, &round::round_file_name(number));
            finalize_output(mode, &target, &contents).context("generating round file")
        }
    }
}

fn output_path(output_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn finalize_output(mode: OutputMode, target: &Path, contents: &str) -> anyhow::Result<()> {
    match mode {
        OutputMode::DryRun => {
            io::stdout().write_all(contents.as_bytes())?;
        }
        OutputMode::Write => {
            wfsports::output::write_output(target, contents)?;
            println!("wrote {}", target.display());
        }
    }
    Ok(())
}
