// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use recruitline::input::{run_lookup, MentionInput, MenuKey, MenuKeyOutcome, RecordingHooks};
use recruitline::model::{EntityKey, EntityKind, UserId};
use recruitline::query::{rank, EntityIndex, StaticUserDirectory};
use recruitline::render::{render, Segment};
use recruitline::store::{demo_dataset, demo_folder};

type DemoInput = MentionInput<StaticUserDirectory, RecordingHooks>;

fn demo_input() -> DemoInput {
    let dataset = demo_dataset();
    MentionInput::new(EntityIndex::new(dataset.directory()), RecordingHooks::default())
}

/// Types `text` and resolves the last candidate request against the bundled data folder.
fn type_and_resolve(input: &mut DemoInput, text: &str) {
    let mut request = None;
    for ch in text.chars() {
        if let Some(next) = input.insert_char(ch) {
            request = Some(next);
        }
    }
    let request = request.unwrap_or_else(|| panic!("expected a candidate request for {text:?}"));
    assert!(input.apply_candidate_lookup(run_lookup(&demo_folder(), request)));
}

#[test]
fn hello_li_commits_the_first_user_and_notifies() {
    let mut input = demo_input();
    type_and_resolve(&mut input, "Hello @Li");

    let names: Vec<&str> =
        input.suggestions().iter().map(|item| item.entity.display_name().as_str()).collect();
    assert_eq!(
        names,
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

    let MenuKeyOutcome::Committed(mention) = input.handle_menu_key(MenuKey::Enter) else {
        panic!("expected a commit");
    };
    assert_eq!(mention.start_index, 6);
    assert_eq!(mention.end_index, 18);
    assert_eq!(input.text(), "Hello @Lisa Bakker ");
    assert_eq!(input.cursor(), 19);
    assert!(!input.menu().is_open());

    let user = UserId::new("u1").expect("user id");
    assert_eq!(input.hooks().notified, [(user.clone(), "Lisa Bakker".to_owned())]);

    let segments = render(input.text(), input.ledger());
    assert_eq!(segments.len(), 3);
    let span = segments[1].as_mention().expect("mention segment");
    assert_eq!(span.target, Some(EntityKey::User(user)));
    assert_eq!(span.navigation_path(), None);
}

#[test]
fn candidate_mentions_navigate_but_do_not_notify() {
    let mut input = demo_input();
    type_and_resolve(&mut input, "Call @Noah");

    let selected = input.selected_suggestion().expect("selected suggestion");
    assert_eq!(selected.entity.kind(), EntityKind::Candidate);
    assert!(matches!(input.handle_menu_key(MenuKey::Tab), MenuKeyOutcome::Committed(_)));
    assert_eq!(input.text(), "Call @Noah Linden ");
    assert!(input.hooks().notified.is_empty());

    let segments = input.segments();
    let mention = segments
        .iter()
        .find(|segment| matches!(segment, Segment::Mention(_)))
        .expect("mention segment")
        .clone();
    assert!(input.activate(&mention));
    assert_eq!(input.hooks().navigated, ["/candidates/c4"]);
}

#[test]
fn every_mutation_reports_the_text_and_mention_count() {
    let mut input = demo_input();
    type_and_resolve(&mut input, "@Zo");
    assert!(matches!(input.handle_menu_key(MenuKey::Enter), MenuKeyOutcome::Committed(_)));
    input.clear();

    let changes = &input.hooks().changes;
    assert_eq!(changes.first(), Some(&("@".to_owned(), 0)));
    assert!(changes.contains(&("@Zoë Peeters ".to_owned(), 1)));
    assert_eq!(changes.last(), Some(&(String::new(), 0)));
    assert!(input.mentions().is_empty());
}

#[test]
fn global_search_over_the_demo_catalog() {
    let dataset = demo_dataset();

    let urls: Vec<String> =
        rank("amsterdam", &dataset.catalog).into_iter().map(|result| result.url).collect();
    assert_eq!(urls, ["/vacancies/v3", "/talent-pools/p3", "/vacancies/v4", "/candidates/c8"]);

    let globex: Vec<String> =
        rank("GLOBEX", &dataset.catalog).into_iter().map(|result| result.title).collect();
    assert_eq!(globex, ["Amsterdam Office Manager", "Recruitment Lead"]);

    assert!(rank(" a ", &dataset.catalog).is_empty());
}
