//! Command-line front end.
//!
//! A thin layer that turns subcommands into [`Event`]s, feeds them through
//! [`handle_event`] and carries out the returned [`Action`]s: printing notices,
//! asking for confirmation and rendering the list.
//!
//! ```text
//! jobtracker add Acme "Data Analyst" --status interview
//! jobtracker list --status offer --search acme
//! jobtracker status 3f2a9c1e rejected
//! jobtracker rm 3f2a
//! jobtracker clear --yes
//! ```

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use jobtracker::infrastructure;
use jobtracker::observability::init_tracing;
use jobtracker::storage::FileStorage;
use jobtracker::ui::{self, terminal_cols};
use jobtracker::{
    handle_event, initialize, Action, AppState, Config, Event, NewApplication, Result, Status,
    StatusFilter,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jobtracker")]
#[command(about = "Track job applications from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: platform config dir/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the application data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Built-in theme (catppuccin-mocha, catppuccin-latte)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Add an application
    Add {
        /// Company name
        company: String,

        /// Role applied for
        role: String,

        /// Date applied, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Initial status (default: Applied)
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// List applications (default command)
    List {
        /// Only show one status: all, applied, interview, offer, rejected
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Case-insensitive search over company, role and status
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Change the status of an application
    Status {
        /// Application id or unique id prefix
        id: String,

        /// New status
        status: Status,
    },

    /// Remove an application
    Rm {
        /// Application id or unique id prefix
        id: String,
    },

    /// Remove every application
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Output settings shared by every command.
struct Frontend {
    cols: usize,
    color: bool,
    assume_yes: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("jobtracker: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Merges config file, environment and flags, in increasing priority.
fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(infrastructure::config_file);

    let mut config = Config::load(&path)?.with_env_overrides(|key| std::env::var(key).ok());

    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.display().to_string());
    }
    if let Some(theme) = &cli.theme {
        config.theme_name = Some(theme.clone());
        config.theme_file = None;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    init_tracing(&config, &config.resolved_data_dir());

    let mut state = initialize(&config)?;
    let mut frontend = Frontend {
        cols: terminal_cols(),
        color: !cli.no_color && io::stdout().is_terminal(),
        assume_yes: false,
    };

    let command = cli.command.unwrap_or(Command::List {
        status: StatusFilter::All,
        search: None,
    });

    match command {
        Command::Add {
            company,
            role,
            date,
            status,
        } => {
            let mut draft = NewApplication::new(company, role);
            if let Some(date) = date {
                draft = draft.with_date(date);
            }
            if let Some(status) = status {
                draft = draft.with_status(status);
            }
            dispatch(&mut state, Event::AddApplication(draft), &frontend)?;
        }
        Command::List { status, search } => {
            handle_event(&mut state, &Event::SetStatusFilter(status))?;
            if let Some(query) = search {
                handle_event(&mut state, &Event::SetSearch(query))?;
            }
            render(&state, &frontend)?;
        }
        Command::Status { id, status } => {
            let id = state.store.resolve_id(&id)?;
            dispatch(&mut state, Event::UpdateStatus { id, status }, &frontend)?;
        }
        Command::Rm { id } => {
            let id = state.store.resolve_id(&id)?;
            dispatch(&mut state, Event::RemoveApplication { id }, &frontend)?;
        }
        Command::Clear { yes } => {
            frontend.assume_yes = yes;
            if !dispatch(&mut state, Event::ClearAll, &frontend)? {
                println!("Nothing to clear.");
            }
        }
    }

    Ok(())
}

/// Handles an event and every follow-up action it produces.
///
/// Returns whether the event produced any output at all.
fn dispatch(
    state: &mut AppState<FileStorage>,
    event: Event,
    frontend: &Frontend,
) -> Result<bool> {
    let mut pending = VecDeque::from([event]);
    let mut handled = false;

    while let Some(event) = pending.pop_front() {
        let (should_render, actions) = handle_event(state, &event)?;
        handled |= should_render || !actions.is_empty();

        for action in actions {
            match action {
                Action::Notice(message) => println!("{message}"),
                Action::ConfirmClear { count } => {
                    tracing::debug!(count, "asking to clear");
                    let answer = frontend.assume_yes || confirm()?;
                    if !answer {
                        println!("Cancelled.");
                    }
                    pending.push_back(Event::ConfirmClear(answer));
                }
                Action::Render => render(state, frontend)?,
            }
        }
    }

    Ok(handled)
}

fn render(state: &AppState<FileStorage>, frontend: &Frontend) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ui::render(state, frontend.cols, frontend.color, &mut out)?;
    Ok(())
}

/// Asks on stdin; anything but `y`/`yes` declines.
fn confirm() -> Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "Clear all applications? [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
