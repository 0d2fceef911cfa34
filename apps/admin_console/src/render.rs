//! Plain-text rendering of the admin table.

use client_core::{MemberRow, MemberTableController};
use shared::domain::MemberField;

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 30;
const ROLE_WIDTH: usize = 10;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return format!("{value:<width$}");
    }
    let truncated: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{truncated}~")
}

fn render_row(row: &MemberRow<'_>) -> String {
    let cells: Vec<String> = [
        (MemberField::Name, NAME_WIDTH),
        (MemberField::Email, EMAIL_WIDTH),
        (MemberField::Role, ROLE_WIDTH),
    ]
    .into_iter()
    .map(|(field, width)| {
        if row.editing {
            fit(&format!("<{}>", row.draft(field)), width)
        } else {
            fit(row.member.field(field), width)
        }
    })
    .collect();

    let actions = if row.editing {
        "save | cancel"
    } else {
        "edit | delete"
    };

    format!(
        "{} {:>4}  {}  {}",
        checkbox(row.selected),
        row.member.id.as_str(),
        cells.join("  "),
        actions
    )
}

fn render_pagination(table: &MemberTableController) -> String {
    let mut parts = vec!["<< First".to_string()];
    parts.push(if table.has_previous() {
        "< Previous".to_string()
    } else {
        "(< Previous)".to_string()
    });
    for page in table.page_numbers() {
        if page == table.current_page() {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(if table.has_next() {
        "Next >".to_string()
    } else {
        "(Next >)".to_string()
    });
    parts.push("Last >>".to_string());
    parts.join("  ")
}

pub fn render_table(table: &MemberTableController, status: &str) -> String {
    let mut out = String::new();
    out.push_str("Admin Dashboard\n");
    out.push_str(&format!("Search: {}\n\n", table.search_term()));

    out.push_str(&format!(
        "{} {:>4}  {:<NAME_WIDTH$}  {:<EMAIL_WIDTH$}  {:<ROLE_WIDTH$}  Actions\n",
        checkbox(table.is_page_fully_selected()),
        "Id",
        "Name",
        "Email",
        "Role",
    ));

    let rows = table.visible_rows();
    if rows.is_empty() {
        out.push_str("  (no members)\n");
    }
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push('\n');

    if table.can_delete_selected() {
        out.push_str(&format!(
            "Delete Selected ({})\n",
            table.selection_len()
        ));
    }
    out.push_str(&render_pagination(table));
    out.push_str(&format!(
        "    page {}/{} - {} member(s)\n",
        table.current_page(),
        table.total_pages(),
        table.filtered_len()
    ));

    if !status.is_empty() {
        out.push_str(status);
        out.push('\n');
    }
    out
}
