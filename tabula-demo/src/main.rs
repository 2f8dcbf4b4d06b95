mod app;
mod config;
mod error;
mod paths;
mod user;

use std::fs::{self, File};
use std::time::Duration;

use clap::Parser;
use crossterm::event::EventStream;
use futures::StreamExt;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabula_dom::{Event, Terminal, hit_test};
use tokio::time::MissedTickBehavior;

use crate::app::App;
use crate::config::Args;
use crate::error::DemoError;

const SPINNER_FRAME: Duration = Duration::from_millis(80);

fn init_logging(level: LevelFilter) -> Result<(), DemoError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();
    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

async fn run(args: Args) -> Result<(), DemoError> {
    init_logging(args.log_level.into())?;

    let users = match &args.data {
        Some(path) => user::load_users(path)?,
        None => user::initial_users(),
    };

    let delay = args.load_delay();
    let mut waiting = !delay.is_zero();
    let mut app = App::new(users, waiting);

    let mut terminal = Terminal::new()?;
    let (_, height) = terminal.size();
    app.fit_to_height(height);
    let mut events = EventStream::new();

    let mut spinner = tokio::time::interval(SPINNER_FRAME);
    spinner.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let loaded = tokio::time::sleep(delay);
    tokio::pin!(loaded);

    let mut root = app.render();
    terminal.render(&root)?;

    while !app.should_quit() {
        tokio::select! {
            next = events.next() => match next {
                Some(Ok(raw)) => {
                    log::trace!("Crossterm event: {raw:?}");
                    if let Some(event) = Event::from_crossterm(raw) {
                        let layout = terminal.layout();
                        app.handle_event(event, |x, y| hit_test(layout, &root, x, y));
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = spinner.tick(), if app.is_loading() => app.tick(),
            _ = &mut loaded, if waiting => {
                waiting = false;
                app.finish_loading();
            }
        }

        root = app.render();
        terminal.render(&root)?;
    }

    log::info!("Exiting");
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
