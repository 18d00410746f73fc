// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

use crate::model::{EntityKind, SearchResultKind};

pub(crate) const NO_COLOR_ENV: &str = "RECRUITLINE_NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct TuiTheme {
    monochrome: bool,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Self {
        match env::var(NO_COLOR_ENV) {
            Ok(value) => Self::from_no_color_value(Some(&value)),
            Err(env::VarError::NotPresent) => Self::default(),
            // Set but unreadable still means the user asked for no color.
            Err(env::VarError::NotUnicode(_)) => Self { monochrome: true },
        }
    }

    /// Any non-empty value other than `0`/`false` turns color off.
    pub(crate) fn from_no_color_value(value: Option<&str>) -> Self {
        let monochrome = value.map(str::trim).is_some_and(|value| {
            !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
        });
        Self { monochrome }
    }

    pub(crate) fn is_monochrome(&self) -> bool {
        self.monochrome
    }

    fn fg(&self, color: Color) -> Style {
        if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(color)
        }
    }

    pub(crate) fn entity_style(&self, kind: EntityKind) -> Style {
        let color = match kind {
            EntityKind::User => Color::LightBlue,
            EntityKind::Candidate => Color::LightMagenta,
        };
        self.fg(color).add_modifier(Modifier::BOLD)
    }

    /// `@token` that matched no ledger entry.
    pub(crate) fn unknown_mention_style(&self) -> Style {
        if self.monochrome {
            Style::default().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED)
        }
    }

    pub(crate) fn result_style(&self, kind: SearchResultKind) -> Style {
        let color = match kind {
            SearchResultKind::Vacancy => Color::LightGreen,
            SearchResultKind::Candidate => Color::LightMagenta,
            SearchResultKind::TalentPool => Color::LightYellow,
        };
        self.fg(color)
    }

    pub(crate) fn subtitle_style(&self) -> Style {
        self.fg(Color::Gray)
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        match (focused, self.monochrome) {
            (false, _) => Style::default(),
            (true, true) => Style::default().add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::LightGreen),
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn warning_style(&self) -> Style {
        self.fg(Color::Yellow)
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        self.fg(Color::Gray)
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}

pub(crate) fn entity_icon(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => "◉",
        EntityKind::Candidate => "◆",
    }
}

pub(crate) fn result_icon(kind: SearchResultKind) -> &'static str {
    match kind {
        SearchResultKind::Vacancy => "▣",
        SearchResultKind::Candidate => "◆",
        SearchResultKind::TalentPool => "◎",
    }
}
