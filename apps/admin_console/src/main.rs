use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_core::MemberTableController;
use crossbeam_channel::bounded;

mod backend_bridge;
mod config;
mod controller;
mod render;

use backend_bridge::{commands::BackendCommand, runtime};
use controller::{
    events::{TableCommand, UiEvent},
    orchestration::{apply_command, dispatch_backend_command, Flow},
};

#[derive(Parser, Debug)]
#[command(about = "Search, page, edit and delete members in a terminal admin table")]
struct Args {
    /// Member list endpoint (JSON array of {id, name, email, role}).
    #[arg(long)]
    members_url: Option<String>,
    /// Config file; defaults to ./admin_console.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(url) = args.members_url {
        settings.members_url = url;
    }
    if let Some(filter) = args.log_filter {
        settings.log_filter = filter;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(&settings, cmd_rx, ui_tx.clone())?;
    runtime::spawn_input_reader(ui_tx)?;

    let mut table = MemberTableController::new();
    let mut status = String::new();
    dispatch_backend_command(&cmd_tx, BackendCommand::FetchMembers, &mut status);
    print!("{}", render::render_table(&table, &status));

    for event in ui_rx.iter() {
        match event {
            UiEvent::Input(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<TableCommand>() {
                    Ok(command) => {
                        let flow = apply_command(&mut table, command, &cmd_tx, &mut status);
                        if flow == Flow::Quit {
                            break;
                        }
                    }
                    Err(err) => status = err.to_string(),
                }
            }
            UiEvent::InputClosed => break,
            UiEvent::MembersLoaded(members) => table.load(members),
            // Already logged by the worker; the table keeps whatever it had.
            UiEvent::LoadFailed(reason) => {
                tracing::debug!(%reason, "member list unavailable");
                continue;
            }
        }
        print!("{}", render::render_table(&table, &status));
    }

    Ok(())
}
