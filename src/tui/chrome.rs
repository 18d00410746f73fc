// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer and line-building helpers used by TUI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Editor,
    Ledger,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Editor => Self::Ledger,
            Self::Ledger => Self::Editor,
        }
    }
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

/// `(row, col)` of char offset `cursor`, both in chars.
fn cursor_position(text: &str, cursor: usize) -> (usize, usize) {
    let head = slice_chars(text, 0, cursor);
    let row = head.matches('\n').count();
    let col = head.rsplit('\n').next().map_or(0, |line| line.chars().count());
    (row, col)
}

/// Places a popup of `rows` list rows right below the cursor, or above it when it would not fit.
fn dropdown_area(bounds: Rect, cursor_x: u16, cursor_y: u16, rows: u16, width: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = rows.saturating_add(2).min(bounds.height);
    let x = cursor_x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let below = cursor_y.saturating_add(1);
    let y = if below.saturating_add(height) <= bounds.bottom() {
        below
    } else {
        cursor_y.saturating_sub(height).max(bounds.y)
    };
    Rect::new(x, y, width, height)
}

fn editor_lines(segments: &[Segment], theme: &TuiTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current = Vec::<Span<'static>>::new();

    for segment in segments {
        match segment {
            Segment::Plain(text) => {
                for (idx, part) in text.split('\n').enumerate() {
                    if idx > 0 {
                        lines.push(Line::from(std::mem::take(&mut current)));
                    }
                    if !part.is_empty() {
                        current.push(Span::raw(part.to_owned()));
                    }
                }
            }
            Segment::Mention(span) => {
                let style = match span.kind() {
                    Some(kind) => theme.entity_style(kind),
                    None => theme.unknown_mention_style(),
                };
                current.push(Span::styled(segment.text(), style));
            }
        }
    }

    lines.push(Line::from(current));
    lines
}

fn suggestion_line(item: &SuggestionItem, theme: &TuiTheme) -> Line<'static> {
    let kind = item.entity.kind();
    let mut spans = vec![
        Span::styled(entity_icon(kind), theme.entity_style(kind)),
        Span::raw(" "),
        Span::raw(item.entity.display_name().to_string()),
    ];
    if let Some(subtitle) = item.entity.subtitle().filter(|subtitle| !subtitle.is_empty()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(subtitle.to_owned(), theme.subtitle_style()));
    }
    Line::from(spans)
}

fn ledger_line(mention: &Mention, drifted: bool, theme: &TuiTheme) -> Line<'static> {
    let kind = mention.kind();
    let mut spans = vec![
        Span::styled(entity_icon(kind), theme.entity_style(kind)),
        Span::raw(" "),
        Span::styled(mention.mention_text(), theme.entity_style(kind)),
        Span::raw("  "),
        Span::styled(
            format!("{}..{}", mention.start_index, mention.end_index),
            theme.subtitle_style(),
        ),
    ];
    if drifted {
        spans.push(Span::styled(" drifted", theme.warning_style()));
    }
    Line::from(spans)
}

fn result_line(result: &SearchResult, theme: &TuiTheme, width: usize) -> Line<'static> {
    let label = format!("{:<12}", result.kind.label());
    let mut spans = vec![
        Span::styled(result_icon(result.kind), theme.result_style(result.kind)),
        Span::raw(" "),
        Span::styled(label, theme.result_style(result.kind)),
        Span::raw(truncate_with_ellipsis(&result.title, width.max(8))),
    ];
    if !result.subtitle.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(result.subtitle.clone(), theme.subtitle_style()));
    }
    Line::from(spans)
}

fn footer_line(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();

    if app.search_mode == SearchMode::Editing {
        push_footer_entry(&mut spans, theme, "Move", "↑↓");
        push_footer_entry(&mut spans, theme, "Open", "Enter");
        push_footer_entry(&mut spans, theme, "Close", "Esc");
    } else {
        match app.focus {
            Focus::Editor if app.input.menu().is_open() => {
                push_footer_entry(&mut spans, theme, "Pick", "↑↓");
                push_footer_entry(&mut spans, theme, "Accept", "Enter/Tab");
                push_footer_entry(&mut spans, theme, "Dismiss", "Esc");
            }
            Focus::Editor => {
                push_footer_entry(&mut spans, theme, "Mention", "@");
                push_footer_entry(&mut spans, theme, "Open", "Ctrl-O");
                push_footer_entry(&mut spans, theme, "Ledger", "Tab");
                push_footer_entry(&mut spans, theme, "Search", "Ctrl-F");
                push_footer_entry(&mut spans, theme, "Quit", "Esc");
            }
            Focus::Ledger => {
                push_footer_entry(&mut spans, theme, "Move", "↑↓");
                push_footer_entry(&mut spans, theme, "Open", "Enter");
                push_footer_entry(&mut spans, theme, "Search", "/");
                push_footer_entry(&mut spans, theme, "Editor", "Tab");
                push_footer_entry(&mut spans, theme, "Quit", "Esc");
            }
        }
    }

    if let Some(toast) = &app.toast {
        spans.push(Span::styled(" | ", theme.footer_label_style()));
        spans.push(Span::raw(toast.message.clone()));
    } else {
        spans.push(Span::styled(format!("  {FOOTER_BRAND}"), theme.footer_label_style()));
    }

    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, key: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", theme.footer_label_style()));
    }
    spans.push(Span::styled(format!("{label}:"), theme.footer_label_style()));
    spans.push(Span::styled(key.to_owned(), theme.footer_key_style()));
}
