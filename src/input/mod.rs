// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The mention input control.
//!
//! [`MentionInput`] owns the note text, the cursor, the mention ledger and the suggestion
//! dropdown. Every edit and cursor move re-runs trigger detection. A query change refreshes user
//! suggestions immediately and returns a [`CandidateRequest`] the host must resolve (see
//! [`lookup`]) and feed back through [`MentionInput::apply_candidate_lookup`].

pub mod hooks;
pub mod lookup;
pub mod menu;

pub use hooks::{MentionHooks, NoopHooks, RecordingHooks};
pub use lookup::{run_lookup, spawn_lookup, CandidateLookup, CandidateRequest};
pub use menu::{MenuState, SuggestionMenu};

use crate::model::{CandidateRecord, Entity, Mention, SuggestionItem};
use crate::ops::{apply_edit, MentionLedger, StaleSessionError, TextEdit};
use crate::query::entity_index::{
    candidate_entities_or_empty, filter_candidates, into_suggestion_items, merge_suggestions,
    EntityIndex, UserDirectory,
};
use crate::query::trigger::{detect, TriggerSession, TriggerState};
use crate::render::{MentionRenderer, NameMatchRenderer, Segment};
use crate::text::text_len;

/// Keys the dropdown reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    Tab,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKeyOutcome {
    /// The menu was closed; the key belongs to the host.
    Ignored,
    Consumed,
    Committed(Mention),
}

pub struct MentionInput<U, H = NoopHooks> {
    index: EntityIndex<U>,
    hooks: H,
    renderer: Box<dyn MentionRenderer + Send>,
    text: String,
    cursor: usize,
    ledger: MentionLedger,
    trigger: TriggerState,
    menu: SuggestionMenu,
    suggestions: Vec<SuggestionItem>,
    user_matches: Vec<Entity>,
    candidate_matches: Vec<Entity>,
    /// Records from the last applied lookup, re-filtered while a newer one is outstanding.
    candidate_records: Vec<CandidateRecord>,
    generation: u64,
    awaiting_candidates: bool,
    /// Start index of the session the user dismissed with Escape.
    dismissed_at: Option<usize>,
}

impl<U: UserDirectory, H: MentionHooks> MentionInput<U, H> {
    pub fn new(index: EntityIndex<U>, hooks: H) -> Self {
        Self {
            index,
            hooks,
            renderer: Box::new(NameMatchRenderer::default()),
            text: String::new(),
            cursor: 0,
            ledger: MentionLedger::new(),
            trigger: TriggerState::Inactive,
            menu: SuggestionMenu::default(),
            suggestions: Vec::new(),
            user_matches: Vec::new(),
            candidate_matches: Vec::new(),
            candidate_records: Vec::new(),
            generation: 0,
            awaiting_candidates: false,
            dismissed_at: None,
        }
    }

    pub fn with_renderer(mut self, renderer: impl MentionRenderer + Send + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn ledger(&self) -> &MentionLedger {
        &self.ledger
    }

    pub fn mentions(&self) -> &[Mention] {
        self.ledger.mentions()
    }

    pub fn trigger(&self) -> &TriggerState {
        &self.trigger
    }

    pub fn menu(&self) -> &SuggestionMenu {
        &self.menu
    }

    pub fn suggestions(&self) -> &[SuggestionItem] {
        &self.suggestions
    }

    pub fn selected_suggestion(&self) -> Option<&SuggestionItem> {
        self.menu.selected().and_then(|selected| self.suggestions.get(selected))
    }

    /// True while a candidate lookup for the current query has not come back yet.
    pub fn awaiting_candidates(&self) -> bool {
        self.awaiting_candidates
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> &EntityIndex<U> {
        &self.index
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.renderer.render(&self.text, self.ledger.mentions())
    }

    pub fn edit(&mut self, edit: TextEdit) -> Option<CandidateRequest> {
        let outcome = apply_edit(&self.text, &edit);
        self.text = outcome.text;
        self.cursor = outcome.cursor;
        self.hooks.on_change(&self.text, self.ledger.mentions());
        self.refresh()
    }

    pub fn insert_str(&mut self, text: &str) -> Option<CandidateRequest> {
        self.edit(TextEdit::Insert { at: self.cursor, text: text.to_owned() })
    }

    pub fn insert_char(&mut self, ch: char) -> Option<CandidateRequest> {
        self.edit(TextEdit::Insert { at: self.cursor, text: ch.to_string() })
    }

    pub fn backspace(&mut self) -> Option<CandidateRequest> {
        if self.cursor == 0 {
            return None;
        }
        self.edit(TextEdit::Delete { start: self.cursor - 1, end: self.cursor })
    }

    pub fn delete_forward(&mut self) -> Option<CandidateRequest> {
        if self.cursor >= text_len(&self.text) {
            return None;
        }
        self.edit(TextEdit::Delete { start: self.cursor, end: self.cursor + 1 })
    }

    /// Replaces the whole text, e.g. when the host loads a saved note.
    pub fn set_text(&mut self, text: impl Into<String>, cursor: usize) -> Option<CandidateRequest> {
        self.edit(TextEdit::ReplaceAll { text: text.into(), cursor })
    }

    /// Empties the text and forgets every mention.
    pub fn clear(&mut self) -> Option<CandidateRequest> {
        self.ledger.clear();
        self.edit(TextEdit::ReplaceAll { text: String::new(), cursor: 0 })
    }

    pub fn set_cursor(&mut self, cursor: usize) -> Option<CandidateRequest> {
        self.cursor = cursor.min(text_len(&self.text));
        self.refresh()
    }

    pub fn move_left(&mut self) -> Option<CandidateRequest> {
        self.set_cursor(self.cursor.saturating_sub(1))
    }

    pub fn move_right(&mut self) -> Option<CandidateRequest> {
        self.set_cursor(self.cursor + 1)
    }

    pub fn move_home(&mut self) -> Option<CandidateRequest> {
        self.set_cursor(0)
    }

    pub fn move_end(&mut self) -> Option<CandidateRequest> {
        self.set_cursor(text_len(&self.text))
    }

    pub fn handle_menu_key(&mut self, key: MenuKey) -> MenuKeyOutcome {
        if !self.menu.is_open() {
            return MenuKeyOutcome::Ignored;
        }

        match key {
            MenuKey::Down => self.menu.move_down(self.suggestions.len()),
            MenuKey::Up => self.menu.move_up(),
            MenuKey::Escape => {
                self.menu.close();
                self.dismissed_at = self.trigger.session().map(|session| session.start_index);
            }
            MenuKey::Enter | MenuKey::Tab => {
                let Some(selected) = self.menu.selected() else {
                    return MenuKeyOutcome::Consumed;
                };
                return match self.accept(selected) {
                    Ok(Some(mention)) => MenuKeyOutcome::Committed(mention),
                    Ok(None) => MenuKeyOutcome::Consumed,
                    Err(err) => {
                        tracing::warn!(error = %err, "mention commit rejected");
                        MenuKeyOutcome::Consumed
                    }
                };
            }
        }
        MenuKeyOutcome::Consumed
    }

    /// Commits the suggestion at `position`, e.g. after a click.
    ///
    /// `Ok(None)` means there was no session or no such suggestion.
    pub fn accept(&mut self, position: usize) -> Result<Option<Mention>, StaleSessionError> {
        let Some(session) = self.trigger.session().cloned() else {
            return Ok(None);
        };
        let Some(item) = self.suggestions.get(position).cloned() else {
            return Ok(None);
        };
        self.commit(&session, &item.entity).map(Some)
    }

    /// Commits `entity` for `session`; the session must still match the current text and cursor.
    pub fn commit(
        &mut self,
        session: &TriggerSession,
        entity: &Entity,
    ) -> Result<Mention, StaleSessionError> {
        let commit = match self.ledger.commit(&self.text, self.cursor, session, entity) {
            Ok(commit) => commit,
            Err(err) => {
                self.menu.close();
                return Err(err);
            }
        };

        self.text = commit.text;
        self.cursor = commit.cursor;
        if let Entity::User(user) = entity {
            self.hooks.on_mention_user(&user.id, &user.display_name);
        }
        self.hooks.on_change(&self.text, self.ledger.mentions());
        self.menu.close();
        self.refresh();
        Ok(commit.mention)
    }

    /// Applies a finished lookup if it answers the latest request; returns whether it was used.
    pub fn apply_candidate_lookup(&mut self, lookup: CandidateLookup) -> bool {
        if lookup.generation != self.generation || !self.awaiting_candidates {
            tracing::debug!(
                generation = lookup.generation,
                latest = self.generation,
                query = %lookup.query,
                "discarding stale candidate lookup"
            );
            return false;
        }
        self.awaiting_candidates = false;

        let query = lookup.query;
        self.candidate_matches = match lookup.result {
            Ok(records) => {
                let matches = filter_candidates(&records, &query);
                self.candidate_records = records;
                matches
            }
            Err(err) => candidate_entities_or_empty(Err(err), &query),
        };
        self.rebuild_suggestions(&query);
        if self.menu.is_open() {
            self.menu.clamp(self.suggestions.len());
        } else if self.dismissed_at.is_none() {
            self.menu.open(self.suggestions.len());
        }
        true
    }

    /// Navigates to the target of a rendered mention span, if it has one.
    pub fn activate(&mut self, segment: &Segment) -> bool {
        let Some(path) = segment.as_mention().and_then(|span| span.navigation_path()) else {
            return false;
        };
        self.hooks.on_navigate(&path);
        true
    }

    fn refresh(&mut self) -> Option<CandidateRequest> {
        let next = detect(&self.text, self.cursor);
        let Some(session) = next.session().cloned() else {
            if self.trigger.is_active() {
                tracing::trace!("mention session ended");
            }
            self.trigger = next;
            self.reset_suggestions();
            return None;
        };

        if self.dismissed_at.is_some_and(|start| start != session.start_index) {
            self.dismissed_at = None;
        }
        if self.trigger.session() == Some(&session) {
            return None;
        }
        self.trigger = next;

        self.user_matches = self.index.search_users(&session.query);
        self.candidate_matches = filter_candidates(&self.candidate_records, &session.query);
        self.rebuild_suggestions(&session.query);
        if self.dismissed_at.is_none() {
            self.menu.open(self.suggestions.len());
        }

        self.generation += 1;
        self.awaiting_candidates = true;
        Some(CandidateRequest { generation: self.generation, query: session.query })
    }

    fn rebuild_suggestions(&mut self, query: &str) {
        let merged = merge_suggestions(self.user_matches.clone(), self.candidate_matches.clone());
        self.suggestions = into_suggestion_items(merged, query);
    }

    fn reset_suggestions(&mut self) {
        self.menu.close();
        self.dismissed_at = None;
        self.awaiting_candidates = false;
        self.suggestions.clear();
        self.user_matches.clear();
        self.candidate_matches.clear();
    }
}

#[cfg(test)]
mod tests;
