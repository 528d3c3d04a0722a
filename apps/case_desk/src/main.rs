use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{Alerter, CaseDesk, HeadlessDialog, HttpCaseApi, Region};
use shared::domain::{CaseId, CaseStatus};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(about = "Work the case board from a terminal")]
struct Args {
    /// Overrides the configured server url.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cases waiting to be accepted.
    Pending,
    /// Cases accepted or later.
    Taken,
    /// Every case with its update history.
    History,
    /// Accept a pending case.
    Accept { case_id: CaseId },
    /// Change status, note and location of a taken case.
    Update {
        case_id: CaseId,
        #[arg(long)]
        status: CaseStatus,
        #[arg(long, default_value = "")]
        note: String,
        #[arg(long, default_value = "")]
        location: String,
    },
}

struct TerminalAlerter;

impl Alerter for TerminalAlerter {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

type Desk = CaseDesk<HttpCaseApi, TerminalAlerter, HeadlessDialog>;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    tracing::debug!(server_url = %settings.server_url, "settings loaded");

    let api = HttpCaseApi::new(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;
    let mut desk: Desk = CaseDesk::new(api, TerminalAlerter, HeadlessDialog::default());

    match args.command {
        Command::History => {
            let table = desk
                .load_history(&settings.all_path)
                .await
                .context("failed to load case history")?;
            for row in table.rows() {
                println!("{}", row.cells().join("\t"));
            }
        }
        Command::Pending => {
            load_board(&mut desk, &settings).await?;
            print_region(&desk, Region::Pending);
        }
        Command::Taken => {
            load_board(&mut desk, &settings).await?;
            print_region(&desk, Region::Taken);
        }
        Command::Accept { case_id } => {
            load_board(&mut desk, &settings).await?;
            desk.accept(case_id)
                .await
                .with_context(|| format!("case {case_id} was not accepted"))?;
            print_card(&desk, case_id);
        }
        Command::Update {
            case_id,
            status,
            note,
            location,
        } => {
            load_board(&mut desk, &settings).await?;
            desk.open_update(case_id)
                .with_context(|| format!("cannot update case {case_id}"))?;
            let form = desk.modal_mut().form_mut();
            form.status = status.code().to_string();
            form.note = note;
            form.location = location;
            desk.submit_update()
                .await
                .with_context(|| format!("case {case_id} was not updated"))?;
            print_card(&desk, case_id);
        }
    }

    Ok(())
}

async fn load_board(desk: &mut Desk, settings: &config::Settings) -> Result<()> {
    desk.load_board(&settings.pending_path, &settings.taken_path)
        .await
        .context("failed to load case board")
}

fn print_region(desk: &Desk, region: Region) {
    let mut empty = true;
    for card in desk.board().cards_in(region) {
        println!("{card}\n");
        empty = false;
    }
    if empty {
        println!("No cases.");
    }
}

fn print_card(desk: &Desk, case_id: CaseId) {
    if let Some(card) = desk.board().card(case_id) {
        println!("{card}");
    }
}
