use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use minesweep_core::{Coord, Field};

use input::Command;
use settings::Overrides;
use terminal::TerminalSession;

mod input;
mod render;
mod settings;
mod terminal;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use, logs go to stderr
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Column count
    #[arg(long)]
    columns: Option<Coord>,

    /// Row count
    #[arg(long)]
    rows: Option<Coord>,

    /// Mines percent, clamped into 1..=100
    #[arg(short, long)]
    percent: Option<u8>,

    /// Open only the pressed tile instead of flooding empty regions
    #[arg(long)]
    no_flood_fill: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with field settings, flags given on the command line win
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            columns: self.columns,
            rows: self.rows,
            mine_percent: self.percent,
            flood_fill: self.no_flood_fill.then_some(false),
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = settings::resolve(args.config.as_deref(), &args.overrides())?;
    log::debug!("config: {:?}", config);
    let mut field = Field::new(config).context("invalid field settings")?;

    let mut session = TerminalSession::enter().context("could not prepare the terminal")?;
    let result = run(&mut field, &mut session);
    drop(session);
    log::debug!("exited");
    result
}

fn run(field: &mut Field, session: &mut TerminalSession) -> anyhow::Result<()> {
    render::render(field, session.out())?;

    loop {
        match event::read()? {
            Event::Key(key) => match input::map_key(key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Move(delta)) => field.move_cursor(delta),
                Some(Command::Field(field_event)) => {
                    let outcome = field.push_event(field_event);
                    log::trace!("{:?} -> {:?}", field_event, outcome);
                    if !outcome.has_update() {
                        continue;
                    }
                }
                None => continue,
            },
            Event::Resize(..) => {}
            _ => continue,
        }
        render::render(field, session.out())?;
    }
}
