// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;
use smol_str::SmolStr;

use super::{MentionRenderer, MentionSpan, RenderOptions, Segment, SegmentBuilder};
use crate::model::Mention;

/// `@` followed by a run of letters (accents included) and spaces.
fn mention_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@[\p{L}\p{M} ]+").expect("mention run regex"))
}

/// Heuristic token matcher: finds `@name` runs and looks the name up in the ledger.
///
/// A run can end a token wherever the next char is whitespace, another `@` or the end of the
/// text. The longest token end whose name is in the ledger wins, so multi-word names resolve; a
/// run with no known name yields its shortest token as an unresolved match.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatchRenderer {
    options: RenderOptions,
}

impl NameMatchRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl MentionRenderer for NameMatchRenderer {
    fn render(&self, text: &str, mentions: &[Mention]) -> Vec<Segment> {
        let regex = mention_run_regex();
        let mut out = SegmentBuilder::default();
        let mut plain_start = 0;
        let mut pos = 0;

        while let Some(run) = regex.find_at(text, pos) {
            let name_start = run.start() + 1;
            let ends = token_ends(text, name_start, run.end());
            let Some(&shortest) = ends.first() else {
                pos = name_start;
                continue;
            };

            let known = ends.iter().rev().find_map(|&end| {
                let name = &text[name_start..end];
                mentions.iter().find(|mention| mention.name.as_str() == name).map(|m| (end, m))
            });

            match known {
                Some((end, mention)) => {
                    out.plain(&text[plain_start..run.start()]);
                    out.mention(MentionSpan {
                        name: mention.name.clone(),
                        target: Some(mention.target.clone()),
                    });
                    plain_start = end;
                    pos = end;
                }
                None => {
                    if self.options.mark_unknown {
                        out.plain(&text[plain_start..run.start()]);
                        out.mention(MentionSpan {
                            name: SmolStr::new(&text[name_start..shortest]),
                            target: None,
                        });
                        plain_start = shortest;
                    }
                    pos = shortest;
                }
            }
        }

        out.plain(&text[plain_start..]);
        out.finish()
    }
}

/// Byte positions in `(name_start, run_end]` where a token may end, ascending.
fn token_ends(text: &str, name_start: usize, run_end: usize) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut prev: Option<char> = None;

    for (offset, ch) in text[name_start..run_end].char_indices() {
        let at = name_start + offset;
        if ch.is_whitespace() && prev.is_some_and(|p| !p.is_whitespace()) {
            ends.push(at);
        }
        prev = Some(ch);
    }

    let closes_run = match text[run_end..].chars().next() {
        None => true,
        Some(next) => next.is_whitespace() || next == '@',
    };
    if closes_run && prev.is_some_and(|p| !p.is_whitespace()) {
        ends.push(run_end);
    }

    ends
}
