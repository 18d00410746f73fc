// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on the note text and its mention ledger.
//!
//! Edits are pure: they take the current text and return the new text plus the cursor the editor
//! should show afterwards. Offsets are chars.

pub mod ledger;

pub use ledger::{Commit, MentionLedger, StaleSessionError};

use crate::text::{byte_offset, text_len};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert `text` at char offset `at` (clamped to the end).
    Insert { at: usize, text: String },
    /// Remove the chars in `[start, end)`.
    Delete { start: usize, end: usize },
    /// Replace everything, e.g. a programmatic update.
    ReplaceAll { text: String, cursor: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub text: String,
    pub cursor: usize,
}

pub fn apply_edit(text: &str, edit: &TextEdit) -> EditOutcome {
    match edit {
        TextEdit::Insert { at, text: inserted } => {
            let at = (*at).min(text_len(text));
            let byte = byte_offset(text, at);
            let mut out = String::with_capacity(text.len() + inserted.len());
            out.push_str(&text[..byte]);
            out.push_str(inserted);
            out.push_str(&text[byte..]);
            EditOutcome { text: out, cursor: at + text_len(inserted) }
        }
        TextEdit::Delete { start, end } => {
            let len = text_len(text);
            let start = (*start).min(len);
            let end = (*end).clamp(start, len);
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..byte_offset(text, start)]);
            out.push_str(&text[byte_offset(text, end)..]);
            EditOutcome { text: out, cursor: start }
        }
        TextEdit::ReplaceAll { text: replacement, cursor } => EditOutcome {
            cursor: (*cursor).min(text_len(replacement)),
            text: replacement.clone(),
        },
    }
}
