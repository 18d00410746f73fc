// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Open/closed state of the suggestion dropdown.
//!
//! `rev` bumps on every visible change so a view can cheaply tell whether to re-sync scroll
//! state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        selected: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionMenu {
    state: MenuState,
    rev: u64,
}

impl SuggestionMenu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            MenuState::Closed => None,
            MenuState::Open { selected } => Some(selected),
        }
    }

    /// Opens on the first row when there is something to show; an open menu is reset to the top.
    pub fn open(&mut self, len: usize) {
        match self.state {
            MenuState::Closed if len == 0 => {}
            _ => self.set(MenuState::Open { selected: 0 }),
        }
    }

    pub fn close(&mut self) {
        self.set(MenuState::Closed);
    }

    /// Keeps the selection inside `[0, len-1]`; an empty list stays open on row 0 (empty state).
    pub fn clamp(&mut self, len: usize) {
        if let MenuState::Open { selected } = self.state {
            self.set(MenuState::Open { selected: selected.min(len.saturating_sub(1)) });
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if let MenuState::Open { selected } = self.state {
            let last = len.saturating_sub(1);
            self.set(MenuState::Open { selected: (selected + 1).min(last) });
        }
    }

    pub fn move_up(&mut self) {
        if let MenuState::Open { selected } = self.state {
            self.set(MenuState::Open { selected: selected.saturating_sub(1) });
        }
    }

    fn set(&mut self, state: MenuState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.rev = self.rev.wrapping_add(1);
    }
}
