// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rstest::{fixture, rstest};

use super::{
    run_lookup, spawn_lookup, CandidateRequest, MentionInput, MenuKey, MenuKeyOutcome, MenuState,
    RecordingHooks,
};
use crate::model::{fixtures, CandidateRecord, EntityKind, Mention, UserId};
use crate::query::entity_index::{
    CandidateSource, EntityIndex, RetrievalError, StaticCandidateSource, StaticUserDirectory,
};
use crate::query::trigger::{TriggerSession, TriggerState};
use crate::render::{MentionRenderer, Segment};

type TestInput = MentionInput<StaticUserDirectory, RecordingHooks>;

struct FailingSource;

impl CandidateSource for FailingSource {
    fn list_candidates(&self) -> Result<Vec<CandidateRecord>, RetrievalError> {
        Err(RetrievalError::Unavailable("offline".to_owned()))
    }
}

struct SlowSource(StaticCandidateSource);

impl CandidateSource for SlowSource {
    fn list_candidates(&self) -> Result<Vec<CandidateRecord>, RetrievalError> {
        std::thread::sleep(Duration::from_millis(50));
        self.0.list_candidates()
    }
}

/// Records what it was asked to render and returns a fixed segment.
#[derive(Clone, Default)]
struct FixedRenderer {
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MentionRenderer for FixedRenderer {
    fn render(&self, text: &str, mentions: &[Mention]) -> Vec<Segment> {
        self.calls.lock().unwrap().push((text.to_owned(), mentions.len()));
        vec![Segment::Plain("fixed".to_owned())]
    }
}

fn new_input() -> TestInput {
    let index = EntityIndex::new(StaticUserDirectory::new(fixtures::users()));
    MentionInput::new(index, RecordingHooks::default())
}

#[fixture]
fn input() -> TestInput {
    new_input()
}

fn source() -> StaticCandidateSource {
    StaticCandidateSource::new(fixtures::candidates())
}

/// Types `text` char by char and returns the last candidate request issued.
fn type_text(input: &mut TestInput, text: &str) -> Option<CandidateRequest> {
    let mut last = None;
    for ch in text.chars() {
        if let Some(request) = input.insert_char(ch) {
            last = Some(request);
        }
    }
    last
}

/// Types `text` and resolves the final candidate request synchronously.
fn type_and_resolve(input: &mut TestInput, text: &str) {
    let request = type_text(input, text).expect("candidate request");
    assert!(input.apply_candidate_lookup(run_lookup(&source(), request)));
}

fn names(input: &TestInput) -> Vec<&str> {
    input.suggestions().iter().map(|item| item.entity.display_name().as_str()).collect()
}

#[rstest]
fn typing_a_trigger_opens_the_menu_with_users_first(mut input: TestInput) {
    let request = type_text(&mut input, "Hello @Li").expect("request");
    assert_eq!(request.query, "Li");
    assert_eq!(
        input.trigger(),
        &TriggerState::Active(TriggerSession { start_index: 6, query: "Li".to_owned() })
    );
    assert_eq!(input.menu().state(), MenuState::Open { selected: 0 });
    assert!(input.awaiting_candidates());
    assert_eq!(names(&input), ["Lisa Bakker", "Linda Smit", "Liam Visser"]);

    assert!(input.apply_candidate_lookup(run_lookup(&source(), request)));
    assert!(!input.awaiting_candidates());
    assert_eq!(
        names(&input),
        [
            "Lisa Bakker",
            "Linda Smit",
            "Liam Visser",
            "Eva Lindeman",
            "Lieke Mulder",
            "Noah Linden",
            "Olivia Lint",
            "Sem Klinkers",
        ]
    );
    assert!(input.suggestions().iter().all(|item| item.matched_on == "Li"));
}

#[rstest]
fn enter_commits_the_selected_user_and_notifies(mut input: TestInput) {
    type_and_resolve(&mut input, "Hello @Li");

    assert_eq!(input.handle_menu_key(MenuKey::Down), MenuKeyOutcome::Consumed);
    let MenuKeyOutcome::Committed(mention) = input.handle_menu_key(MenuKey::Enter) else {
        panic!("expected a commit");
    };

    assert_eq!(mention.name, "Linda Smit");
    assert_eq!(mention.start_index, 6);
    assert_eq!(mention.end_index, 17);
    assert_eq!(input.text(), "Hello @Linda Smit ");
    assert_eq!(input.cursor(), 18);
    assert_eq!(input.mentions(), [mention]);
    assert_eq!(
        input.hooks().notified,
        [(UserId::new("u3").unwrap(), "Linda Smit".to_owned())]
    );
    assert!(!input.menu().is_open());
    assert_eq!(input.trigger(), &TriggerState::Inactive);
}

#[rstest]
fn tab_commits_a_candidate_without_notifying(mut input: TestInput) {
    type_and_resolve(&mut input, "@Eva");
    assert_eq!(names(&input), ["Eva Lindeman"]);

    let MenuKeyOutcome::Committed(mention) = input.handle_menu_key(MenuKey::Tab) else {
        panic!("expected a commit");
    };
    assert_eq!(mention.kind(), EntityKind::Candidate);
    assert_eq!(input.text(), "@Eva Lindeman ");
    assert!(input.hooks().notified.is_empty());
}

#[rstest]
fn escape_dismisses_until_a_new_session_starts(mut input: TestInput) {
    type_text(&mut input, "@L");
    assert!(input.menu().is_open());

    assert_eq!(input.handle_menu_key(MenuKey::Escape), MenuKeyOutcome::Consumed);
    assert!(!input.menu().is_open());
    assert!(input.mentions().is_empty());

    type_text(&mut input, "i");
    assert!(input.trigger().is_active());
    assert!(!input.menu().is_open());
    assert_eq!(input.handle_menu_key(MenuKey::Enter), MenuKeyOutcome::Ignored);

    type_text(&mut input, " @");
    assert_eq!(input.trigger().session().map(|s| s.start_index), Some(4));
    assert!(input.menu().is_open());
}

#[rstest]
fn closed_menu_ignores_navigation_keys(mut input: TestInput) {
    type_text(&mut input, "plain text");
    for key in [MenuKey::Up, MenuKey::Down, MenuKey::Enter, MenuKey::Tab, MenuKey::Escape] {
        assert_eq!(input.handle_menu_key(key), MenuKeyOutcome::Ignored);
    }
}

#[rstest]
fn stale_lookup_never_overwrites_a_newer_query(mut input: TestInput) {
    let older = type_text(&mut input, "@L").expect("request for L");
    let newer = type_text(&mut input, "i").expect("request for Li");
    assert!(newer.generation > older.generation);

    assert!(input.apply_candidate_lookup(run_lookup(&source(), newer.clone())));
    let applied = names(&input).join(",");

    assert!(!input.apply_candidate_lookup(run_lookup(&source(), older)));
    assert!(!input.apply_candidate_lookup(run_lookup(&source(), newer)));
    assert_eq!(names(&input).join(","), applied);
}

#[rstest]
fn lookup_after_the_session_ended_is_dropped(mut input: TestInput) {
    let request = type_text(&mut input, "@Li").expect("request");
    input.insert_char(' ');
    assert!(!input.apply_candidate_lookup(run_lookup(&source(), request)));
    assert!(input.suggestions().is_empty());
}

#[rstest]
fn failed_lookup_leaves_user_suggestions(mut input: TestInput) {
    let request = type_text(&mut input, "@Li").expect("request");
    assert!(input.apply_candidate_lookup(run_lookup(&FailingSource, request)));
    assert_eq!(names(&input), ["Lisa Bakker", "Linda Smit", "Liam Visser"]);
    assert!(input.menu().is_open());
}

#[rstest]
fn previous_candidates_are_refiltered_while_a_lookup_is_outstanding(mut input: TestInput) {
    type_and_resolve(&mut input, "@Li");
    type_text(&mut input, "n");

    assert!(input.awaiting_candidates());
    assert_eq!(
        names(&input),
        ["Linda Smit", "Eva Lindeman", "Noah Linden", "Olivia Lint", "Sem Klinkers"]
    );
}

#[rstest]
fn empty_results_keep_the_menu_open(mut input: TestInput) {
    type_and_resolve(&mut input, "@Li");
    type_and_resolve(&mut input, "zz");

    assert!(input.suggestions().is_empty());
    assert_eq!(input.menu().state(), MenuState::Open { selected: 0 });
    assert_eq!(input.handle_menu_key(MenuKey::Enter), MenuKeyOutcome::Consumed);
    assert!(input.mentions().is_empty());
    assert_eq!(input.text(), "@Lizz");
}

#[rstest]
fn moving_the_cursor_away_closes_and_returning_reopens(mut input: TestInput) {
    let first = type_text(&mut input, "Hi @Li").expect("request");

    assert_eq!(input.move_home(), None);
    assert_eq!(input.trigger(), &TriggerState::Inactive);
    assert!(!input.menu().is_open());

    let again = input.move_end().expect("session restarts");
    assert_eq!(again.query, "Li");
    assert!(again.generation > first.generation);
    assert!(input.menu().is_open());
}

#[rstest]
fn cursor_moves_inside_a_session_keep_the_generation(mut input: TestInput) {
    type_text(&mut input, "@Li");
    let generation = input.generation();
    assert_eq!(input.set_cursor(3), None);
    assert_eq!(input.generation(), generation);
}

#[rstest]
fn every_text_mutation_fires_on_change(mut input: TestInput) {
    type_text(&mut input, "ab");
    input.backspace();
    input.move_home();
    input.backspace();
    input.delete_forward();

    let texts: Vec<&str> = input.hooks().changes.iter().map(|(text, _)| text.as_str()).collect();
    assert_eq!(texts, ["a", "ab", "a", ""]);
}

#[rstest]
fn commit_reports_the_new_mention_count(mut input: TestInput) {
    type_and_resolve(&mut input, "@Lisa");
    input.handle_menu_key(MenuKey::Enter);
    assert_eq!(input.hooks().changes.last(), Some(&("@Lisa Bakker ".to_owned(), 1)));
}

#[rstest]
fn clear_forgets_text_and_mentions(mut input: TestInput) {
    type_and_resolve(&mut input, "@Lisa");
    input.handle_menu_key(MenuKey::Enter);
    input.clear();
    assert_eq!(input.text(), "");
    assert!(input.mentions().is_empty());
}

#[rstest]
fn stale_commit_is_rejected_without_touching_text(mut input: TestInput) {
    type_and_resolve(&mut input, "@Li");
    let entity = input.suggestions()[0].entity.clone();
    let stale = TriggerSession { start_index: 0, query: "L".to_owned() };

    let err = input.commit(&stale, &entity).expect_err("stale session");
    assert_eq!(err.session, stale);
    assert_eq!(input.text(), "@Li");
    assert!(input.mentions().is_empty());
    assert!(!input.menu().is_open());
}

#[rstest]
fn activating_spans_navigates_only_for_candidates(mut input: TestInput) {
    type_and_resolve(&mut input, "@Eva");
    input.handle_menu_key(MenuKey::Enter);
    type_and_resolve(&mut input, "and @Lisa");
    input.handle_menu_key(MenuKey::Enter);
    assert_eq!(input.text(), "@Eva Lindeman and @Lisa Bakker ");

    let segments = input.segments();
    let spans: Vec<&Segment> = segments.iter().filter(|s| s.as_mention().is_some()).collect();
    assert_eq!(spans.len(), 2);

    assert!(input.activate(spans[0]));
    assert!(!input.activate(spans[1]));
    assert!(!input.activate(&Segment::Plain("x".to_owned())));
    assert_eq!(input.hooks().navigated, ["/candidates/c2"]);
}

#[rstest]
fn segments_come_from_the_configured_renderer(input: TestInput) {
    let renderer = FixedRenderer::default();
    let mut input = input.with_renderer(renderer.clone());
    type_and_resolve(&mut input, "Hi @Lisa");
    input.handle_menu_key(MenuKey::Enter);

    assert_eq!(input.segments(), [Segment::Plain("fixed".to_owned())]);
    assert_eq!(*renderer.calls.lock().unwrap(), [("Hi @Lisa Bakker ".to_owned(), 1)]);

    let fixed = Segment::Plain("fixed".to_owned());
    assert!(!input.activate(&fixed));
    assert!(input.hooks().navigated.is_empty());
}

#[tokio::test]
async fn only_the_latest_spawned_lookup_is_applied() {
    let mut input = new_input();
    let handle = tokio::runtime::Handle::current();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let older = type_text(&mut input, "@L").expect("request for L");
    spawn_lookup(&handle, Arc::new(SlowSource(source())), older, tx.clone());
    let newer = type_text(&mut input, "i").expect("request for Li");
    let newer_generation = newer.generation;
    spawn_lookup(&handle, Arc::new(source()), newer, tx);

    let mut applied = Vec::new();
    while let Some(lookup) = rx.recv().await {
        let generation = lookup.generation;
        if input.apply_candidate_lookup(lookup) {
            applied.push(generation);
        }
    }

    assert_eq!(applied, [newer_generation]);
    assert_eq!(names(&input).len(), 8);
}
