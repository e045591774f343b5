use anyhow::{Context, Result};
use log::info;
use meshform::{obj, Config, Session};
use mf_format::Model;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};
use structopt::StructOpt;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "meshform")]
struct CliArgs {
    /// Model to load (.obj or .mfm)
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Default target for the save command
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// Config file, otherwise `<input>.toml` or `meshform.toml` next to the input
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    /// Read the menu answers from a file instead of stdin
    #[structopt(long = "script", parse(from_os_str))]
    script: Option<PathBuf>,
    /// Output debug info
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

/// Happens during setup
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Input file does not exist: {0}")]
    InputFileNonExistent(String),
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if !args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    }

    prepare(args)
}

fn prepare(args: CliArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(CliError::InputFileNonExistent(args.input.display().to_string()).into());
    }

    let config = Config::locate(&args.input, args.config.as_deref())?;
    let model = obj::load(&args.input, &config)?;

    match &args.script {
        Some(script) => {
            let file = File::open(script)
                .with_context(|| format!("Could not open script: {}", script.display()))?;
            drive(BufReader::new(file), model, config, args.output)
        }
        None => {
            let stdin = io::stdin();
            let input = stdin.lock();
            drive(input, model, config, args.output)
        }
    }
}

fn drive<R: BufRead>(
    input: R,
    model: Model,
    config: Config,
    output: Option<PathBuf>,
) -> Result<()> {
    let stdout = io::stdout();
    let model = Session::new(input, stdout.lock(), model, config)
        .with_default_output(output)
        .run()?;

    info!(
        "Session finished with {} vertices and {} polygons",
        model.vertex_count(),
        model.polygon_count()
    );
    Ok(())
}
