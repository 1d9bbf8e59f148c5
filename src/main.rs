//! chirp - compose a short post with hashtags and copy it to the clipboard

mod cli;
mod runtime;
mod view;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use chirp::model::{AppModel, Composer};

use cli::{CliArgs, StartupConfig, StartupMode};
use runtime::app::{INITIAL_HEIGHT, INITIAL_WIDTH};
use runtime::App;

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    chirp::tracing::init();

    match startup.mode {
        StartupMode::Print { json } => print_post(&startup, json),
        StartupMode::Window => run_window(&startup).map(|()| ExitCode::SUCCESS),
    }
}

/// Compose without a window and write the result to stdout.
/// Exits non-zero when the post could not be exported.
fn print_post(startup: &StartupConfig, json: bool) -> Result<ExitCode> {
    let mut composer = Composer::new();
    startup.seed(&mut composer);

    if json {
        let summary = serde_json::to_string_pretty(&composer.summary())
            .context("Failed to serialize post summary")?;
        println!("{}", summary);
    }

    match composer.export() {
        Ok(post) => {
            if !json {
                println!("{}", post);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(block) => {
            eprintln!("chirp: cannot export: {}", block);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_window(startup: &StartupConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;

    let mut model = AppModel::new(INITIAL_WIDTH, INITIAL_HEIGHT, startup.theme.as_deref());
    startup.seed(&mut model.composer);

    let mut app = App::new(model);
    event_loop.run_app(&mut app)?;

    Ok(())
}
