use activity_client::controller::ConfirmPrompt;
use activity_client::models::{EditInput, FormInput, RowSnapshot};
use activity_client::{
    ActivityController, BackendClient, Effect, FilePreferences, PageSession, ToastKind,
    resolve_prefs_path,
};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::{env, io, process};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "activity-client", about = "Command-line client for the activity log backend")]
struct Cli {
    /// Backend base URL. Falls back to ACTIVITY_BACKEND_URL, then to the
    /// backend's default local port.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a new activity.
    Add {
        /// Calendar date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Start time, 24-hour HH:MM.
        #[arg(long)]
        start: String,
        /// End time, 24-hour HH:MM.
        #[arg(long)]
        end: String,
        #[arg(long)]
        description: String,
        /// Defaults to the remembered location.
        #[arg(long)]
        location: Option<String>,
    },
    /// Replace the fields of an existing activity.
    Edit {
        id: u64,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: String,
    },
    /// Delete one activity.
    Delete {
        id: u64,
        /// Pass when this is the last activity shown for the day.
        #[arg(long)]
        last: bool,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Delete every stored activity.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Remember a location for future `add` calls.
    SetLocation { location: String },
}

struct StdinConfirm {
    assume_yes: bool,
}

impl ConfirmPrompt for StdinConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        println!("{title}");
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .base_url
        .or_else(|| env::var("ACTIVITY_BACKEND_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string());

    let controller = ActivityController::new(BackendClient::new(base_url));
    let prefs = FilePreferences::load(resolve_prefs_path());

    let effects = match cli.command {
        Command::Add {
            date,
            start,
            end,
            description,
            location,
        } => {
            let session = PageSession::start(prefs, date, String::new());
            let form = FormInput {
                date: session.selected_date.clone(),
                start_time: start,
                end_time: end,
                description,
                location: location.unwrap_or_else(|| session.selected_location.clone()),
            };
            controller.submit(form).await
        }
        Command::Edit {
            id,
            start,
            end,
            description,
            location,
        } => {
            let row = RowSnapshot {
                id,
                start_time: String::new(),
                end_time: String::new(),
                description: String::new(),
                location,
            };
            let input = EditInput {
                start_time: start,
                end_time: end,
                description,
            };
            controller.edit(&row, input).await
        }
        Command::Delete { id, last, yes } => {
            let prompt = StdinConfirm { assume_yes: yes };
            let rows_in_table = if last { 1 } else { 2 };
            controller.delete(id, rows_in_table, &prompt).await
        }
        Command::Clear { yes } => {
            let prompt = StdinConfirm { assume_yes: yes };
            controller.clear(&prompt).await
        }
        Command::SetLocation { location } => {
            let mut session = PageSession::start(prefs, None, String::new());
            session.change_location(&location)
        }
    };

    if effects.is_empty() {
        println!("Cancelled");
        return Ok(());
    }

    let mut failed = false;
    for effect in effects {
        match effect {
            Effect::Toast(toast) => match toast.kind {
                ToastKind::Success => println!("{}", toast.message),
                ToastKind::Error => {
                    failed = true;
                    eprintln!("{}", toast.message);
                }
            },
            Effect::RemoveRow { id } => println!("Activity {id} removed"),
            Effect::PatchRow {
                id,
                start_time,
                end_time,
                description,
            } => println!("Activity {id} is now {start_time} - {end_time}: {description}"),
            Effect::ClearForm | Effect::ScheduleReload { .. } => {}
            Effect::Navigate { url } => println!("Open {url}"),
        }
    }

    if failed {
        process::exit(1);
    }
    Ok(())
}
