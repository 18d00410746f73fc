// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Entity, Mention};
use crate::query::trigger::{detect, TriggerSession, TriggerState};
use crate::text::{byte_offset, slice_chars, text_len};

/// The session no longer matches the text/cursor it is being committed against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mention session at {} (query {:?}) is stale", .session.start_index, .session.query)]
pub struct StaleSessionError {
    pub session: TriggerSession,
    pub current: TriggerState,
}

/// Result of accepting a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub text: String,
    /// Char offset right after the trailing space.
    pub cursor: usize,
    pub mention: Mention,
}

/// Insertion-ordered mentions of one input instance.
///
/// The ledger only grows; ranges are snapshots taken at commit time and are never re-synchronized
/// with later edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionLedger {
    mentions: Vec<Mention>,
}

impl MentionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    /// Replaces the in-progress `@query` with `@<display name> ` and records the mention.
    ///
    /// The session must still be what [`detect`] yields for `(text, cursor)`; otherwise nothing
    /// is changed and [`StaleSessionError`] is returned.
    pub fn commit(
        &mut self,
        text: &str,
        cursor: usize,
        session: &TriggerSession,
        entity: &Entity,
    ) -> Result<Commit, StaleSessionError> {
        match detect(text, cursor) {
            TriggerState::Active(current) if current == *session => {}
            current => {
                return Err(StaleSessionError { session: session.clone(), current });
            }
        }

        let mention_text = format!("@{}", entity.display_name());
        let start_byte = byte_offset(text, session.start_index);
        let cursor_byte = byte_offset(text, cursor);

        let mut next = String::with_capacity(text.len() + mention_text.len() + 1);
        next.push_str(&text[..start_byte]);
        next.push_str(&mention_text);
        next.push(' ');
        next.push_str(&text[cursor_byte..]);

        let end_index = session.start_index + text_len(&mention_text);
        let mention = Mention {
            target: entity.key(),
            name: entity.display_name().clone(),
            start_index: session.start_index,
            end_index,
        };
        tracing::debug!(
            target_key = %mention.target,
            start = mention.start_index,
            end = mention.end_index,
            "mention committed"
        );
        self.mentions.push(mention.clone());

        Ok(Commit { text: next, cursor: end_index + 1, mention })
    }

    /// First mention recorded under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Mention> {
        self.mentions.iter().find(|mention| mention.name.as_str() == name)
    }

    /// Mentions whose stored range no longer spells `@name` in `text`.
    pub fn drifted<'a>(&'a self, text: &str) -> Vec<&'a Mention> {
        self.mentions
            .iter()
            .filter(|mention| {
                let covered = slice_chars(text, mention.start_index, mention.end_index);
                covered.strip_prefix('@') != Some(mention.name.as_str())
            })
            .collect()
    }

    /// Drops every mention; only used when the whole input is cleared.
    pub fn clear(&mut self) {
        self.mentions.clear();
    }
}
