//! In-memory state of the member admin table: search, paging, selection,
//! inline edits and deletes. Nothing here talks to the network.

use std::collections::{HashMap, HashSet};

use shared::domain::{Member, MemberField, MemberId, MemberPatch};
use tracing::{debug, info, warn};

use crate::pagination::Pagination;

/// A visible row as the presentation layer needs it.
#[derive(Debug, Clone, Copy)]
pub struct MemberRow<'a> {
    pub member: &'a Member,
    pub selected: bool,
    pub editing: bool,
    pub staged: Option<&'a MemberPatch>,
}

impl<'a> MemberRow<'a> {
    /// Value shown in an edit input: the staged override if any, else the
    /// current field value.
    pub fn draft(&self, field: MemberField) -> &'a str {
        self.staged
            .and_then(|patch| patch.get(field))
            .unwrap_or_else(|| self.member.field(field))
    }
}

#[derive(Debug, Default)]
pub struct MemberTableController {
    members: Vec<Member>,
    filtered: Vec<MemberId>,
    search_term: String,
    pagination: Pagination,
    selection: HashSet<MemberId>,
    editing: HashSet<MemberId>,
    edit_buffer: HashMap<MemberId, MemberPatch>,
}

impl MemberTableController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set with a freshly fetched member list. The
    /// filtered set becomes the whole list regardless of any typed term.
    pub fn load(&mut self, members: Vec<Member>) {
        let mut seen = HashSet::with_capacity(members.len());
        let mut unique = Vec::with_capacity(members.len());
        for member in members {
            if seen.insert(member.id.clone()) {
                unique.push(member);
            } else {
                warn!(member_id = %member.id, "ignoring duplicate member id");
            }
        }

        self.filtered = unique.iter().map(|member| member.id.clone()).collect();
        self.members = unique;
        self.selection.clear();
        self.editing.clear();
        self.edit_buffer.clear();
        self.pagination.set_item_count(self.filtered.len());
        self.pagination.go_to(1);

        info!(
            count = self.members.len(),
            total_pages = self.total_pages(),
            "member table loaded"
        );
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    pub fn filtered_ids(&self) -> &[MemberId] {
        &self.filtered
    }

    pub fn filtered_members(&self) -> impl Iterator<Item = &Member> + '_ {
        self.filtered.iter().filter_map(|id| self.member(id))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    // search

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Records the typed term without re-filtering.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Applies the typed term to the full set and returns to page 1.
    pub fn confirm_search(&mut self) {
        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .members
            .iter()
            .filter(|member| member.matches_lowercase(&needle))
            .map(|member| member.id.clone())
            .collect();

        self.pagination.set_item_count(self.filtered.len());
        self.change_page(1);
        debug!(
            term = %self.search_term,
            matches = self.filtered.len(),
            "search confirmed"
        );
    }

    // pagination

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn items_per_page(&self) -> usize {
        self.pagination.items_per_page()
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next()
    }

    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        self.pagination.page_numbers()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.change_page(page)
    }

    pub fn first_page(&mut self) -> bool {
        self.change_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.change_page(self.total_pages())
    }

    /// No-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.change_page(self.current_page() - 1)
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.change_page(self.current_page() + 1)
    }

    fn change_page(&mut self, page: usize) -> bool {
        let moved = self.pagination.go_to(page);
        if moved {
            self.selection.clear();
            debug!(page = self.current_page(), "page changed");
        }
        moved
    }

    fn refresh_page_count(&mut self) {
        if self.pagination.set_item_count(self.filtered.len()) {
            self.selection.clear();
        }
    }

    pub fn visible_ids(&self) -> &[MemberId] {
        &self.filtered[self.pagination.window()]
    }

    pub fn visible_rows(&self) -> Vec<MemberRow<'_>> {
        self.visible_ids()
            .iter()
            .filter_map(|id| self.member(id))
            .map(|member| MemberRow {
                member,
                selected: self.selection.contains(&member.id),
                editing: self.editing.contains(&member.id),
                staged: self.edit_buffer.get(&member.id),
            })
            .collect()
    }

    // selection

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selection.contains(id)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn selected_ids(&self) -> Vec<MemberId> {
        let mut ids: Vec<MemberId> = self.selection.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn can_delete_selected(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn toggle_row(&mut self, id: &MemberId) -> bool {
        if self.member(id).is_none() {
            debug!(member_id = %id, "ignoring selection of unknown member");
            return false;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
        true
    }

    /// True when the current page has rows and every one of them is selected.
    pub fn is_page_fully_selected(&self) -> bool {
        let visible = self.visible_ids();
        !visible.is_empty() && visible.iter().all(|id| self.selection.contains(id))
    }

    /// Clears the selection when the visible page is already fully selected,
    /// otherwise selects exactly the visible page. Selections on other pages
    /// are dropped either way.
    pub fn toggle_select_all(&mut self) {
        let page_ids = self.visible_ids();
        let fully_selected = page_ids.iter().all(|id| self.selection.contains(id));
        let next: HashSet<MemberId> = if fully_selected {
            HashSet::new()
        } else {
            page_ids.iter().cloned().collect()
        };
        self.selection = next;
        debug!(selected = self.selection.len(), "toggled page selection");
    }

    // inline edit

    pub fn is_editing(&self, id: &MemberId) -> bool {
        self.editing.contains(id)
    }

    pub fn staged(&self, id: &MemberId) -> Option<&MemberPatch> {
        self.edit_buffer.get(id)
    }

    pub fn begin_edit(&mut self, id: &MemberId) -> bool {
        if self.member(id).is_none() {
            return false;
        }
        self.editing.insert(id.clone());
        true
    }

    /// Stages one field override for a row in edit mode. The record itself is
    /// untouched until `save_edit`.
    pub fn stage_edit(
        &mut self,
        id: &MemberId,
        field: MemberField,
        value: impl Into<String>,
    ) -> bool {
        if !self.editing.contains(id) {
            debug!(member_id = %id, %field, "row is not in edit mode");
            return false;
        }
        self.edit_buffer
            .entry(id.clone())
            .or_default()
            .set(field, value);
        true
    }

    pub fn save_edit(&mut self, id: &MemberId) -> bool {
        if !self.editing.remove(id) {
            return false;
        }
        let patch = self.edit_buffer.remove(id).unwrap_or_default();
        if let Some(member) = self.members.iter_mut().find(|member| &member.id == id) {
            member.apply(&patch);
        }
        info!(member_id = %id, changes = ?patch, "saved member edits");
        true
    }

    pub fn cancel_edit(&mut self, id: &MemberId) -> bool {
        let was_editing = self.editing.remove(id);
        let discarded = self.edit_buffer.remove(id);
        if !was_editing && discarded.is_none() {
            return false;
        }
        info!(member_id = %id, "cancelled member edits");
        true
    }

    // delete

    /// Removes one member and clears the whole selection.
    pub fn delete_one(&mut self, id: &MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| &member.id != id);
        if self.members.len() == before {
            return false;
        }
        self.filtered.retain(|filtered_id| filtered_id != id);
        self.forget_row_state(id);
        self.selection.clear();
        self.refresh_page_count();
        info!(member_id = %id, "deleted member");
        true
    }

    /// Removes every selected member, then clears the selection. Returns the
    /// number of members removed.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let selection = std::mem::take(&mut self.selection);
        let before = self.members.len();
        self.members.retain(|member| !selection.contains(&member.id));
        self.filtered.retain(|id| !selection.contains(id));
        for id in &selection {
            self.forget_row_state(id);
        }
        self.refresh_page_count();

        let removed = before - self.members.len();
        let mut ids: Vec<&MemberId> = selection.iter().collect();
        ids.sort();
        info!(removed, ids = ?ids, "deleted selected members");
        removed
    }

    fn forget_row_state(&mut self, id: &MemberId) {
        self.editing.remove(id);
        self.edit_buffer.remove(id);
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
