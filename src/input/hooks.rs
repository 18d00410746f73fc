// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Mention, UserId};

/// Calls the input control makes into its host.
///
/// All calls are fire-and-forget: nothing is retried and nothing the host does can fail the edit.
pub trait MentionHooks {
    /// A user was mentioned; hosts typically send a notification.
    fn on_mention_user(&mut self, _user_id: &UserId, _user_name: &str) {}

    /// A mention span or search result was activated.
    fn on_navigate(&mut self, _path: &str) {}

    /// Fired after every text mutation.
    fn on_change(&mut self, _text: &str, _mentions: &[Mention]) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl MentionHooks for NoopHooks {}

/// Records every call, for tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHooks {
    pub notified: Vec<(UserId, String)>,
    pub navigated: Vec<String>,
    /// `(text, mention count)` per change.
    pub changes: Vec<(String, usize)>,
}

impl MentionHooks for RecordingHooks {
    fn on_mention_user(&mut self, user_id: &UserId, user_name: &str) {
        self.notified.push((user_id.clone(), user_name.to_owned()));
    }

    fn on_navigate(&mut self, path: &str) {
        self.navigated.push(path.to_owned());
    }

    fn on_change(&mut self, text: &str, mentions: &[Mention]) {
        self.changes.push((text.to_owned(), mentions.len()));
    }
}
