//! Fetch worker: owns the async runtime so the UI loop never waits on the
//! network. Results come back as `UiEvent`s.

use std::thread::{self, JoinHandle};

use client_core::{fetch_members_logged, HttpMemberSource, MemberSource};
use crossbeam_channel::{Receiver, Sender};

use crate::{
    backend_bridge::commands::BackendCommand, config::Settings, controller::events::UiEvent,
};

pub fn launch(
    settings: &Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> anyhow::Result<JoinHandle<()>> {
    let source = HttpMemberSource::new(settings.members_url.clone(), settings.request_timeout())?;
    tracing::debug!(url = source.url(), "member source configured");
    spawn_worker(source, cmd_rx, ui_tx)
}

pub fn spawn_worker<S>(
    source: S,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> anyhow::Result<JoinHandle<()>>
where
    S: MemberSource + 'static,
{
    let handle = thread::Builder::new()
        .name("member-fetch".to_string())
        .spawn(move || run_worker(source, cmd_rx, ui_tx))?;
    Ok(handle)
}

fn run_worker<S: MemberSource>(
    source: S,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build fetch runtime: {err}");
            let _ = ui_tx.send(UiEvent::LoadFailed(format!(
                "failed to build fetch runtime: {err}"
            )));
            return;
        }
    };

    runtime.block_on(async move {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::FetchMembers => {
                    let event = match fetch_members_logged(&source).await {
                        Ok(members) => UiEvent::MembersLoaded(members),
                        Err(err) => UiEvent::LoadFailed(err.to_string()),
                    };
                    if ui_tx.send(event).is_err() {
                        tracing::debug!("ui loop gone; stopping fetch worker");
                        break;
                    }
                }
            }
        }
    });
}

/// Forwards stdin lines to the UI loop until EOF.
pub fn spawn_input_reader(ui_tx: Sender<UiEvent>) -> anyhow::Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            use std::io::BufRead;

            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if ui_tx.send(UiEvent::Input(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        tracing::warn!("failed to read input: {err}");
                        break;
                    }
                }
            }
            let _ = ui_tx.send(UiEvent::InputClosed);
        })?;
    Ok(handle)
}
