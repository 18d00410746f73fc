// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A note editor with live mention suggestions, the mention ledger and the global search bar
//! (ratatui + crossterm). Candidate lookups run on the tokio blocking pool; finished lookups are
//! drained on every loop tick.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::input::{
    spawn_lookup, CandidateLookup, CandidateRequest, MentionHooks, MentionInput, MenuKey,
    MenuKeyOutcome,
};
use crate::model::{Mention, SearchCatalog, SearchResult, SuggestionItem, UserId};
use crate::query::entity_index::{CandidateSource, EntityIndex, StaticUserDirectory};
use crate::query::global_search::{rank, MIN_QUERY_LEN};
use crate::render::Segment;
use crate::store::Dataset;
use crate::text::{slice_chars, text_len, truncate_with_ellipsis};

mod theme;

use theme::{entity_icon, result_icon, TuiTheme};

const FOOTER_BRAND: &str = "recruitline";
const TOAST_TTL: Duration = Duration::from_secs(3);
const IDLE_POLL: Duration = Duration::from_millis(250);
const LOOKUP_POLL: Duration = Duration::from_millis(30);
const DROPDOWN_WIDTH: u16 = 46;
const DROPDOWN_MAX_ROWS: u16 = 8;
const RESULTS_WIDTH: u16 = 76;

/// Runs the interactive terminal UI until the user quits.
///
/// `handle` must belong to a runtime that outlives the call; candidate lookups are spawned on
/// its blocking pool.
pub fn run(
    dataset: Dataset,
    source: Arc<dyn CandidateSource>,
    handle: Handle,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let theme = TuiTheme::from_env();
    tracing::info!(monochrome = theme.is_monochrome(), "starting terminal ui");
    let mut app = App::new(dataset, source, LookupMode::Spawn(handle), theme);

    while !app.should_quit {
        app.drain_lookups();
        app.expire_toast(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        let timeout = if app.input.awaiting_candidates() {
            LOOKUP_POLL
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let (search_area, main_area, footer_area) = (layout[0], layout[1], layout[2]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_area);

    render_search_bar(frame, app, search_area);
    render_editor(frame, app, panes[0]);
    render_ledger(frame, app, panes[1]);
    if app.search_mode == SearchMode::Editing {
        render_search_results(frame, app, main_area);
    }

    frame.render_widget(Paragraph::new(footer_line(app)), footer_area);
}

fn render_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let editing = app.search_mode == SearchMode::Editing;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title("Search", None))
        .border_style(app.theme.panel_border_style(editing));
    let inner = block.inner(area);

    let line = if editing {
        let count = match app.search_results.len() {
            0 => String::new(),
            n => format!("   {n} results"),
        };
        Line::from(vec![
            Span::styled("/ ", app.theme.footer_key_style()),
            Span::raw(app.search_query.clone()),
            Span::styled(count, app.theme.subtitle_style()),
        ])
    } else {
        Line::from(Span::styled(
            "Ctrl-F to search vacancies, candidates and talent pools",
            app.theme.subtitle_style(),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if editing && inner.width > 0 {
        let col = 2 + text_len(&app.search_query) as u16;
        frame.set_cursor(inner.x + col.min(inner.width - 1), inner.y);
    }
}

fn render_editor(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Editor && app.search_mode == SearchMode::Inactive;
    let tail = format!("({} chars)", text_len(app.input.text()));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title("Note", Some(&tail)))
        .border_style(app.theme.panel_border_style(focused));
    let inner = block.inner(area);

    let segments = app.input.segments();
    let (row, col) = cursor_position(app.input.text(), app.input.cursor());
    let row = row.min(usize::from(u16::MAX - 1)) as u16;
    let col = col.min(u16::MAX as usize) as u16;
    let scroll_y = (row + 1).saturating_sub(inner.height);

    let paragraph = Paragraph::new(Text::from(editor_lines(&segments, &app.theme)))
        .block(block)
        .scroll((scroll_y, 0));
    frame.render_widget(paragraph, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let cursor_x = inner.x + col.min(inner.width - 1);
    let cursor_y = inner.y + (row - scroll_y);
    if focused {
        frame.set_cursor(cursor_x, cursor_y);
    }
    if app.input.menu().is_open() {
        render_dropdown(frame, app, area, cursor_x, cursor_y);
    }
}

fn render_dropdown(
    frame: &mut Frame<'_>,
    app: &mut App,
    bounds: Rect,
    cursor_x: u16,
    cursor_y: u16,
) {
    let suggestions = app.input.suggestions();
    let items: Vec<ListItem> = if suggestions.is_empty() {
        let message = if app.input.awaiting_candidates() {
            "Searching…"
        } else {
            "No matches"
        };
        vec![ListItem::new(Line::from(Span::styled(message, app.theme.subtitle_style())))]
    } else {
        suggestions.iter().map(|item| ListItem::new(suggestion_line(item, &app.theme))).collect()
    };

    let rows = (items.len() as u16).min(DROPDOWN_MAX_ROWS);
    let area = dropdown_area(bounds, cursor_x, cursor_y, rows, DROPDOWN_WIDTH);
    let tail = app.input.awaiting_candidates().then_some("…");
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Mention", tail))
                .border_style(app.theme.panel_border_style(true)),
        )
        .highlight_style(app.theme.selection_style());

    let selected = if suggestions.is_empty() {
        None
    } else {
        app.input.menu().selected()
    };
    app.dropdown_state.select(selected);
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut app.dropdown_state);
}

fn render_ledger(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Ledger && app.search_mode == SearchMode::Inactive;
    let mentions = app.input.mentions();
    let drifted = app.input.ledger().drifted(app.input.text());
    let tail = format!("({})", mentions.len());

    let items: Vec<ListItem> = mentions
        .iter()
        .map(|mention| {
            let is_drifted = drifted.iter().any(|entry| std::ptr::eq(*entry, mention));
            ListItem::new(ledger_line(mention, is_drifted, &app.theme))
        })
        .collect();

    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title("Mentions", Some(&tail)))
            .border_style(app.theme.panel_border_style(focused)),
    );
    if focused {
        list = list.highlight_style(app.theme.selection_style());
    }
    frame.render_stateful_widget(list, area, &mut app.ledger_state);
}

fn render_search_results(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let width = RESULTS_WIDTH.min(main_area.width);
    let title_width = usize::from(width).saturating_sub(30);

    let items: Vec<ListItem> = if text_len(app.search_query.trim()) < MIN_QUERY_LEN {
        vec![ListItem::new(Line::from(Span::styled(
            format!("Type at least {MIN_QUERY_LEN} characters"),
            app.theme.subtitle_style(),
        )))]
    } else if app.search_results.is_empty() {
        vec![ListItem::new(Line::from(Span::styled("No results", app.theme.subtitle_style())))]
    } else {
        app.search_results
            .iter()
            .map(|result| ListItem::new(result_line(result, &app.theme, title_width)))
            .collect()
    };

    let height = (items.len() as u16).saturating_add(2).min(main_area.height);
    let area = Rect::new(main_area.x, main_area.y, width, height);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Results", None))
                .border_style(app.theme.panel_border_style(true)),
        )
        .highlight_style(app.theme.selection_style());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut app.search_state);
}

// Extracted layout/footer/line helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
}

/// How candidate requests are resolved.
enum LookupMode {
    /// On the calling thread, applied immediately.
    #[cfg(test)]
    Inline,
    Spawn(Handle),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HookEvent {
    Notified { user_id: UserId, name: String },
    Navigated(String),
}

/// Collects hook calls so the app can surface them after each key.
#[derive(Debug, Default)]
struct AppHooks {
    events: Vec<HookEvent>,
}

impl MentionHooks for AppHooks {
    fn on_mention_user(&mut self, user_id: &UserId, user_name: &str) {
        tracing::info!(user_id = %user_id, user_name, "user mentioned; notification queued");
        let event = HookEvent::Notified { user_id: user_id.clone(), name: user_name.to_owned() };
        self.events.push(event);
    }

    fn on_navigate(&mut self, path: &str) {
        tracing::info!(path, "navigation requested");
        self.events.push(HookEvent::Navigated(path.to_owned()));
    }

    fn on_change(&mut self, text: &str, mentions: &[Mention]) {
        tracing::trace!(chars = text_len(text), mentions = mentions.len(), "note changed");
    }
}

struct App {
    input: MentionInput<StaticUserDirectory, AppHooks>,
    catalog: SearchCatalog,
    source: Arc<dyn CandidateSource>,
    lookup_mode: LookupMode,
    lookup_tx: UnboundedSender<CandidateLookup>,
    lookup_rx: UnboundedReceiver<CandidateLookup>,
    theme: TuiTheme,
    focus: Focus,
    dropdown_state: ListState,
    ledger_state: ListState,
    search_mode: SearchMode,
    search_query: String,
    search_results: Vec<SearchResult>,
    search_state: ListState,
    last_navigation: Option<String>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(
        dataset: Dataset,
        source: Arc<dyn CandidateSource>,
        lookup_mode: LookupMode,
        theme: TuiTheme,
    ) -> Self {
        let index = EntityIndex::new(dataset.directory());
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        Self {
            input: MentionInput::new(index, AppHooks::default()),
            catalog: dataset.catalog,
            source,
            lookup_mode,
            lookup_tx,
            lookup_rx,
            theme,
            focus: Focus::Editor,
            dropdown_state: ListState::default(),
            ledger_state: ListState::default(),
            search_mode: SearchMode::Inactive,
            search_query: String::new(),
            search_results: Vec::new(),
            search_state: ListState::default(),
            last_navigation: None,
            toast: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('f') => self.enter_search(),
                KeyCode::Char('o')
                    if self.focus == Focus::Editor && self.search_mode == SearchMode::Inactive =>
                {
                    self.open_mention_at_cursor();
                }
                _ => {}
            }
        } else if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
        self.drain_hook_events();
    }

    /// Returns true when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.search_mode == SearchMode::Editing {
            self.handle_search_key(code);
            return false;
        }

        match self.focus {
            Focus::Editor => self.handle_editor_key(code),
            Focus::Ledger => self.handle_ledger_key(code),
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode) -> bool {
        let menu_key = match code {
            KeyCode::Up => Some(MenuKey::Up),
            KeyCode::Down => Some(MenuKey::Down),
            KeyCode::Enter => Some(MenuKey::Enter),
            KeyCode::Tab => Some(MenuKey::Tab),
            KeyCode::Esc => Some(MenuKey::Escape),
            _ => None,
        };
        if let Some(menu_key) = menu_key {
            match self.input.handle_menu_key(menu_key) {
                MenuKeyOutcome::Ignored => {}
                MenuKeyOutcome::Consumed => return false,
                MenuKeyOutcome::Committed(mention) => {
                    tracing::debug!(
                        name = %mention.name,
                        kind = %mention.kind(),
                        "suggestion accepted"
                    );
                    self.ledger_state.select(Some(self.input.mentions().len() - 1));
                    return false;
                }
            }
        }

        let request = match code {
            KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.focus = self.focus.cycle();
                if self.ledger_state.selected().is_none() && !self.input.mentions().is_empty() {
                    self.ledger_state.select(Some(0));
                }
                None
            }
            KeyCode::Enter => self.input.insert_char('\n'),
            KeyCode::Char(ch) => self.input.insert_char(ch),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_forward(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => None,
        };
        self.dispatch(request);
        false
    }

    fn handle_ledger_key(&mut self, code: KeyCode) -> bool {
        let len = self.input.mentions().len();
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::Char('/') => self.enter_search(),
            KeyCode::Up | KeyCode::Char('k') => {
                let selected = self.ledger_state.selected().map_or(0, |idx| idx.saturating_sub(1));
                self.ledger_state.select((len > 0).then_some(selected));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = len.saturating_sub(1);
                let selected = self.ledger_state.selected().map_or(0, |idx| (idx + 1).min(last));
                self.ledger_state.select((len > 0).then_some(selected));
            }
            KeyCode::Enter => self.open_selected_mention(),
            _ => {}
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_search(),
            KeyCode::Enter => self.open_selected_result(),
            KeyCode::Up => {
                let selected = self.search_state.selected().map(|idx| idx.saturating_sub(1));
                self.search_state.select(selected);
            }
            KeyCode::Down => {
                let last = self.search_results.len().saturating_sub(1);
                let selected = self.search_state.selected().map(|idx| (idx + 1).min(last));
                self.search_state.select(selected);
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.update_search_results();
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.update_search_results();
            }
            _ => {}
        }
    }

    fn enter_search(&mut self) {
        self.search_mode = SearchMode::Editing;
        self.search_query.clear();
        self.search_results.clear();
        self.search_state.select(None);
    }

    fn close_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.search_results.clear();
        self.search_state.select(None);
    }

    fn update_search_results(&mut self) {
        self.search_results = rank(&self.search_query, &self.catalog);
        self.search_state.select((!self.search_results.is_empty()).then_some(0));
    }

    fn open_selected_result(&mut self) {
        let Some(result) =
            self.search_state.selected().and_then(|idx| self.search_results.get(idx)).cloned()
        else {
            self.set_toast("No result selected");
            return;
        };
        self.input.hooks_mut().on_navigate(&result.url);
        self.close_search();
    }

    fn open_selected_mention(&mut self) {
        let Some(mention) =
            self.ledger_state.selected().and_then(|idx| self.input.mentions().get(idx)).cloned()
        else {
            return;
        };
        match mention.target.navigation_path() {
            Some(path) => self.input.hooks_mut().on_navigate(&path),
            None => self.set_toast(format!("{} is a user; users have no page", mention.name)),
        }
    }

    fn open_mention_at_cursor(&mut self) {
        let cursor = self.input.cursor();
        let mut start = 0;
        for segment in self.input.segments() {
            let end = start + text_len(&segment.text());
            if segment.as_mention().is_some() && (start..=end).contains(&cursor) {
                if !self.input.activate(&segment) {
                    self.set_toast("Users have no page");
                }
                return;
            }
            start = end;
        }
        self.set_toast("No mention at cursor");
    }

    fn dispatch(&mut self, request: Option<CandidateRequest>) {
        let Some(request) = request else {
            return;
        };
        match &self.lookup_mode {
            #[cfg(test)]
            LookupMode::Inline => {
                let lookup = crate::input::run_lookup(self.source.as_ref(), request);
                self.input.apply_candidate_lookup(lookup);
            }
            LookupMode::Spawn(handle) => {
                spawn_lookup(handle, Arc::clone(&self.source), request, self.lookup_tx.clone());
            }
        }
    }

    fn drain_lookups(&mut self) {
        while let Ok(lookup) = self.lookup_rx.try_recv() {
            self.input.apply_candidate_lookup(lookup);
        }
    }

    fn drain_hook_events(&mut self) {
        let events = std::mem::take(&mut self.input.hooks_mut().events);
        for event in events {
            match event {
                HookEvent::Notified { user_id, name } => {
                    self.set_toast(format!("Notified {name} ({user_id})"));
                }
                HookEvent::Navigated(path) => {
                    self.set_toast(format!("Open {path}"));
                    self.last_navigation = Some(path);
                }
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        let expires_at = Instant::now() + TOAST_TTL;
        self.toast = Some(Toast { message: message.into(), expires_at });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
