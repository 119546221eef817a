//! Command-line front end for the WordPress-export-to-Markdown pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, LevelFilter};
use wp2md_engine::Pipeline;

/// Convert a WordPress export (WXR) into one Markdown file per published post.
#[derive(Parser, Debug)]
#[command(name = "wp2md")]
struct Cli {
    /// Path to the WordPress export XML file.
    export_file: PathBuf,

    /// Verbose diagnostic logging of intermediate values.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    // Clap reports a missing argument with exit code 2; the converter's
    // contract is exit code 1, so the error is mapped by hand. Help and
    // version output still succeed.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
    };

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    engine_logging::initialize(level);

    if !cli.export_file.exists() {
        eprintln!(
            "Error: The file \"{}\" was not found.",
            cli.export_file.display()
        );
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("An error occurred: {err:#}");
            debug!("full error chain: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let summary = Pipeline::default().run(&cli.export_file)?;

    println!();
    println!("Processing complete!");
    println!(
        "Markdown files have been saved in the '{}' directory.",
        summary.output_dir.display()
    );
    if summary.skipped_ineligible() > 0 {
        println!(
            "Skipped {} unpublished item(s).",
            summary.skipped_ineligible()
        );
    }
    // Per-post failures were already logged; they do not fail the run.
    if summary.posts_failed > 0 {
        println!(
            "{} post(s) could not be converted; see the log above.",
            summary.posts_failed
        );
    }
    Ok(())
}
