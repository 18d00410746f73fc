// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of note text into plain and mention segments.
//!
//! Callers only depend on [`MentionRenderer`]; the shipped implementation re-derives mention
//! spans from the text on every call and resolves them by *name* against the ledger. Stored
//! offsets are not consulted, so an offset-based renderer can be swapped in behind the same trait.

use smol_str::SmolStr;

use crate::model::{EntityKey, EntityKind, Mention};
use crate::ops::MentionLedger;

pub mod name_match;

pub use name_match::NameMatchRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Emit `@tokens` that resolve to no ledger entry as unresolved spans instead of plain text.
    pub mark_unknown: bool,
}

/// A highlighted `@name` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSpan {
    pub name: SmolStr,
    /// The ledger entry the name resolved to; `None` for unresolved tokens.
    pub target: Option<EntityKey>,
}

impl MentionSpan {
    pub fn is_known(&self) -> bool {
        self.target.is_some()
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.target.as_ref().map(EntityKey::kind)
    }

    /// Where activating the span should navigate; users are not navigable.
    pub fn navigation_path(&self) -> Option<String> {
        self.target.as_ref().and_then(EntityKey::navigation_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Mention(MentionSpan),
}

impl Segment {
    /// The source text this segment covers.
    pub fn text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Mention(span) => format!("@{}", span.name),
        }
    }

    pub fn as_mention(&self) -> Option<&MentionSpan> {
        match self {
            Self::Plain(_) => None,
            Self::Mention(span) => Some(span),
        }
    }
}

pub trait MentionRenderer {
    fn render(&self, text: &str, mentions: &[Mention]) -> Vec<Segment>;
}

/// Renders `text` against `ledger` with the default name-matching renderer.
pub fn render(text: &str, ledger: &MentionLedger) -> Vec<Segment> {
    NameMatchRenderer::default().render(text, ledger.mentions())
}

/// Appends segments while merging adjacent plain runs and dropping empty ones.
#[derive(Debug, Default)]
pub(crate) struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    pub(crate) fn plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Plain(last)) = self.segments.last_mut() {
            last.push_str(text);
            return;
        }
        self.segments.push(Segment::Plain(text.to_owned()));
    }

    pub(crate) fn mention(&mut self, span: MentionSpan) {
        self.segments.push(Segment::Mention(span));
    }

    pub(crate) fn finish(self) -> Vec<Segment> {
        self.segments
    }
}
