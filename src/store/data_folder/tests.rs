// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{
    DataFolder, StoreError, CANDIDATES_FILENAME, TALENT_POOLS_FILENAME, USERS_FILENAME,
    VACANCIES_FILENAME,
};
use crate::model::{CandidateId, UserId};
use crate::query::entity_index::{CandidateSource, RetrievalError, UserDirectory};
use crate::query::global_search::rank;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("recruitline-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct DataFolderTestCtx {
    tmp: TempDir,
    folder: DataFolder,
}

impl DataFolderTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let folder = DataFolder::new(tmp.path());
        Self { tmp, folder }
    }

    fn write(&self, filename: &str, json: &str) {
        std::fs::write(self.tmp.path().join(filename), json).unwrap();
    }
}

#[fixture]
fn ctx() -> DataFolderTestCtx {
    DataFolderTestCtx::new("data-folder")
}

const USERS_JSON: &str = r#"[
    {"id": "u1", "name": "Lisa Bakker", "role": "Recruiter"},
    {"id": "u2", "name": "Lars de Vries"}
]"#;

#[rstest]
fn loads_every_list(ctx: DataFolderTestCtx) {
    ctx.write(USERS_FILENAME, USERS_JSON);
    ctx.write(
        CANDIDATES_FILENAME,
        r#"[{"id": "c1", "first_name": "Jan", "last_name": "Jansen", "location": "Utrecht"}]"#,
    );
    ctx.write(
        VACANCIES_FILENAME,
        r#"[{"id": "v1", "title": "Engineer", "company": "Acme", "location": "Rotterdam"}]"#,
    );
    ctx.write(TALENT_POOLS_FILENAME, r#"[{"id": "p1", "name": "Engineering alumni"}]"#);

    let dataset = ctx.folder.load().unwrap();

    assert_eq!(dataset.users.len(), 2);
    assert_eq!(dataset.users[0].id, UserId::new("u1").unwrap());
    assert_eq!(dataset.users[0].role, "Recruiter");
    assert_eq!(dataset.users[1].role, "");
    assert_eq!(dataset.directory().users().len(), 2);

    let candidate = &dataset.catalog.candidates[0];
    assert_eq!(candidate.id, CandidateId::new("c1").unwrap());
    assert_eq!(candidate.full_name(), "Jan Jansen");
    assert_eq!(candidate.current_function, None);

    let titles: Vec<String> =
        rank("acme", &dataset.catalog).into_iter().map(|result| result.title).collect();
    assert_eq!(titles, ["Engineer"]);
    assert_eq!(dataset.catalog.talent_pools[0].name, "Engineering alumni");
}

#[rstest]
fn optional_files_default_to_empty(ctx: DataFolderTestCtx) {
    ctx.write(USERS_FILENAME, USERS_JSON);

    let dataset = ctx.folder.load().unwrap();
    assert_eq!(dataset.users.len(), 2);
    assert!(dataset.catalog.candidates.is_empty());
    assert!(dataset.catalog.vacancies.is_empty());
    assert!(dataset.catalog.talent_pools.is_empty());
}

#[rstest]
fn missing_user_directory_is_an_error(ctx: DataFolderTestCtx) {
    let err = ctx.folder.load().unwrap_err();
    match err {
        StoreError::Io { path, source } => {
            assert!(path.ends_with(USERS_FILENAME));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other}"),
    }
}

#[rstest]
#[case::not_an_array(USERS_FILENAME, r#"{"id": "u1"}"#)]
#[case::slash_in_id(USERS_FILENAME, r#"[{"id": "u/1", "name": "Lisa"}]"#)]
#[case::empty_id(USERS_FILENAME, r#"[{"id": "", "name": "Lisa"}]"#)]
#[case::missing_name(USERS_FILENAME, r#"[{"id": "u1"}]"#)]
#[case::truncated_candidates(CANDIDATES_FILENAME, r#"[{"id": "c1""#)]
fn malformed_json_reports_the_file(
    ctx: DataFolderTestCtx,
    #[case] filename: &str,
    #[case] json: &str,
) {
    ctx.write(USERS_FILENAME, USERS_JSON);
    ctx.write(filename, json);

    match ctx.folder.load().unwrap_err() {
        StoreError::Json { path, .. } => assert!(path.ends_with(filename)),
        other => panic!("expected json error, got {other}"),
    }
}

#[rstest]
fn candidate_source_rereads_the_file(ctx: DataFolderTestCtx) {
    assert!(ctx.folder.list_candidates().unwrap().is_empty());

    ctx.write(CANDIDATES_FILENAME, r#"[{"id": "c1", "first_name": "Jan", "last_name": "Jansen"}]"#);
    assert_eq!(ctx.folder.list_candidates().unwrap().len(), 1);

    ctx.write(CANDIDATES_FILENAME, "not json");
    let err = ctx.folder.list_candidates().unwrap_err();
    assert!(matches!(err, RetrievalError::Failed(_)));
    assert!(err.to_string().contains("candidates.json"));
}
