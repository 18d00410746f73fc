// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mention trigger detection.
//!
//! Detection is stateless: the caller re-runs [`detect`] after every text change *and* every
//! cursor move, because the cursor can jump arbitrarily between keystrokes (arrows, paste, click).

use crate::text::{byte_offset, char_offset};

pub const TRIGGER_CHAR: char = '@';

/// An in-progress mention entry: the `@` position and what has been typed after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerSession {
    /// Char offset of the `@`.
    pub start_index: usize,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TriggerState {
    #[default]
    Inactive,
    Active(TriggerSession),
}

impl TriggerState {
    pub fn session(&self) -> Option<&TriggerSession> {
        match self {
            Self::Inactive => None,
            Self::Active(session) => Some(session),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Decides whether the cursor sits inside a mention being typed.
///
/// The nearest `@` before `cursor` is the only one considered. It opens a session when it starts
/// the text or follows a space or newline, and nothing typed after it is whitespace.
/// `cursor` is a char offset; values past the end are clamped.
pub fn detect(text: &str, cursor: usize) -> TriggerState {
    let cursor_byte = byte_offset(text, cursor);
    let head = &text.as_bytes()[..cursor_byte];

    // `@` is ASCII, so the byte match is always a char boundary.
    let Some(at_byte) = memchr::memrchr(TRIGGER_CHAR as u8, head) else {
        return TriggerState::Inactive;
    };

    let preceding = text[..at_byte].chars().next_back();
    if !matches!(preceding, None | Some(' ') | Some('\n')) {
        return TriggerState::Inactive;
    }

    let query = &text[at_byte + TRIGGER_CHAR.len_utf8()..cursor_byte];
    if query.chars().any(char::is_whitespace) {
        return TriggerState::Inactive;
    }

    TriggerState::Active(TriggerSession {
        start_index: char_offset(text, at_byte),
        query: query.to_owned(),
    })
}
