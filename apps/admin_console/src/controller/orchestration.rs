//! Applies parsed table commands to the controller and forwards fetch
//! requests to the backend worker.

use client_core::MemberTableController;
use crossbeam_channel::{Sender, TrySendError};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{TableCommand, HELP},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Quit,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match cmd {
        BackendCommand::FetchMembers => "fetch_members",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Fetch already queued; please wait".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "fetch worker disconnected");
        }
    }
}

pub fn apply_command(
    table: &mut MemberTableController,
    command: TableCommand,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) -> Flow {
    status.clear();

    match command {
        TableCommand::Type(term) => table.set_search_term(term),
        TableCommand::Enter => table.confirm_search(),
        TableCommand::Search(term) => {
            table.set_search_term(term);
            table.confirm_search();
        }
        TableCommand::Page(page) => {
            table.go_to_page(page);
        }
        TableCommand::First => {
            table.first_page();
        }
        TableCommand::Previous => {
            if !table.previous_page() {
                *status = "Previous is disabled on the first page".to_string();
            }
        }
        TableCommand::Next => {
            if !table.next_page() {
                *status = "Next is disabled on the last page".to_string();
            }
        }
        TableCommand::Last => {
            table.last_page();
        }
        TableCommand::Select(id) => {
            if !table.toggle_row(&id) {
                *status = format!("No member with id {id}");
            }
        }
        TableCommand::SelectAll => table.toggle_select_all(),
        TableCommand::Edit(id) => {
            if !table.begin_edit(&id) {
                *status = format!("No member with id {id}");
            }
        }
        TableCommand::Set { id, field, value } => {
            if !table.stage_edit(&id, field, value) {
                *status = format!("Member {id} is not being edited; run 'edit {id}' first");
            }
        }
        TableCommand::Save(id) => {
            if !table.save_edit(&id) {
                *status = format!("Member {id} is not being edited");
            }
        }
        TableCommand::Cancel(id) => {
            if !table.cancel_edit(&id) {
                *status = format!("Member {id} is not being edited");
            }
        }
        TableCommand::Delete(id) => {
            if !table.delete_one(&id) {
                *status = format!("No member with id {id}");
            }
        }
        TableCommand::DeleteSelected => {
            if !table.can_delete_selected() {
                *status = "Nothing selected".to_string();
            } else {
                let removed = table.delete_selected();
                *status = format!("Deleted {removed} member(s)");
            }
        }
        TableCommand::Reload => {
            dispatch_backend_command(cmd_tx, BackendCommand::FetchMembers, status);
        }
        TableCommand::Show => {}
        TableCommand::Help => *status = HELP.to_string(),
        TableCommand::Quit => return Flow::Quit,
    }

    Flow::Render
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::{Member, MemberId};

    use super::*;

    fn table_with(count: usize) -> MemberTableController {
        let mut table = MemberTableController::new();
        table.load(
            (1..=count)
                .map(|n| Member {
                    id: MemberId(n.to_string()),
                    name: format!("Member {n}"),
                    email: format!("member{n}@mailinator.com"),
                    role: if n % 2 == 0 { "admin" } else { "member" }.to_string(),
                })
                .collect(),
        );
        table
    }

    fn run(table: &mut MemberTableController, line: &str) -> (Flow, String) {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut status = String::new();
        let command = line.parse().expect("command");
        let flow = apply_command(table, command, &cmd_tx, &mut status);
        (flow, status)
    }

    #[test]
    fn type_then_enter_filters() {
        let mut table = table_with(25);
        run(&mut table, "type admin");
        assert_eq!(table.filtered_len(), 25);
        run(&mut table, "enter");
        assert_eq!(table.filtered_len(), 12);
    }

    #[test]
    fn edit_flow_updates_member() {
        let mut table = table_with(3);
        run(&mut table, "edit 2");
        run(&mut table, "set 2 email new@mail.com");
        run(&mut table, "save 2");
        let member = table.member(&MemberId::from("2")).expect("member");
        assert_eq!(member.email, "new@mail.com");
        assert_eq!(member.name, "Member 2");
    }

    #[test]
    fn set_without_edit_reports_status() {
        let mut table = table_with(3);
        let (_, status) = run(&mut table, "set 1 name X");
        assert!(status.contains("not being edited"));
        assert!(table.staged(&MemberId::from("1")).is_none());
        assert!(!table.is_editing(&MemberId::from("1")));
    }

    #[test]
    fn next_on_last_page_is_disabled() {
        let mut table = table_with(25);
        run(&mut table, "last");
        let (_, status) = run(&mut table, "next");
        assert_eq!(table.current_page(), 3);
        assert!(status.contains("disabled"));
    }

    #[test]
    fn delete_selected_requires_selection() {
        let mut table = table_with(5);
        let (_, status) = run(&mut table, "delete-selected");
        assert_eq!(status, "Nothing selected");

        run(&mut table, "select-all");
        let (_, status) = run(&mut table, "delete-selected");
        assert_eq!(status, "Deleted 5 member(s)");
        assert!(table.members().is_empty());
    }

    #[test]
    fn reload_queues_fetch() {
        let mut table = table_with(1);
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut status = String::new();
        apply_command(&mut table, TableCommand::Reload, &cmd_tx, &mut status);
        assert_eq!(cmd_rx.try_recv(), Ok(BackendCommand::FetchMembers));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut table = table_with(1);
        let (flow, _) = run(&mut table, "quit");
        assert_eq!(flow, Flow::Quit);
    }
}
