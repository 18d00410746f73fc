// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mention suggestion lookup over the user directory and the candidate records.
//!
//! Both pools are filtered with the same case-insensitive substring rule. The merge is a fixed
//! priority (users first), not a relevance ranking: the user pool is small and local, candidates
//! are remote and come second.

use std::sync::Arc;

use crate::model::{CandidateEntity, CandidateRecord, Entity, SuggestionItem, UserEntity};

pub const MAX_USER_SUGGESTIONS: usize = 3;
pub const MAX_CANDIDATE_SUGGESTIONS: usize = 5;

/// Read-only access to the people who can be notified through a mention.
pub trait UserDirectory {
    fn users(&self) -> &[UserEntity];
}

impl<T: UserDirectory + ?Sized> UserDirectory for Arc<T> {
    fn users(&self) -> &[UserEntity] {
        (**self).users()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticUserDirectory {
    users: Vec<UserEntity>,
}

impl StaticUserDirectory {
    pub fn new(users: Vec<UserEntity>) -> Self {
        Self { users }
    }
}

impl UserDirectory for StaticUserDirectory {
    fn users(&self) -> &[UserEntity] {
        &self.users
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),
    #[error("candidate retrieval failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The external list call for candidate records.
///
/// Implementations may block (network, disk); hosts run them off the input thread.
pub trait CandidateSource: Send + Sync {
    fn list_candidates(&self) -> Result<Vec<CandidateRecord>, RetrievalError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCandidateSource {
    records: Vec<CandidateRecord>,
}

impl StaticCandidateSource {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self { records }
    }
}

impl CandidateSource for StaticCandidateSource {
    fn list_candidates(&self) -> Result<Vec<CandidateRecord>, RetrievalError> {
        Ok(self.records.clone())
    }
}

/// Case-insensitive substring match; `needle` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[derive(Debug, Clone)]
pub struct EntityIndex<U> {
    users: U,
}

impl<U: UserDirectory> EntityIndex<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    pub fn directory(&self) -> &U {
        &self.users
    }

    pub fn search_users(&self, query: &str) -> Vec<Entity> {
        let needle = query.to_lowercase();
        self.users
            .users()
            .iter()
            .filter(|user| contains_folded(&user.display_name, &needle))
            .take(MAX_USER_SUGGESTIONS)
            .cloned()
            .map(Entity::User)
            .collect()
    }

    /// Users and candidates for `query`, fetching candidates synchronously from `source`.
    pub fn search(&self, query: &str, source: &dyn CandidateSource) -> Vec<Entity> {
        let candidates = candidate_entities_or_empty(source.list_candidates(), query);
        merge_suggestions(self.search_users(query), candidates)
    }

    pub fn suggestions(&self, query: &str, source: &dyn CandidateSource) -> Vec<SuggestionItem> {
        into_suggestion_items(self.search(query, source), query)
    }
}

pub fn filter_candidates(records: &[CandidateRecord], query: &str) -> Vec<Entity> {
    let needle = query.to_lowercase();
    records
        .iter()
        .map(CandidateEntity::from)
        .filter(|candidate| contains_folded(&candidate.display_name, &needle))
        .take(MAX_CANDIDATE_SUGGESTIONS)
        .map(Entity::Candidate)
        .collect()
}

/// Filters a retrieval result, degrading a failure to "no candidates".
pub fn candidate_entities_or_empty(
    result: Result<Vec<CandidateRecord>, RetrievalError>,
    query: &str,
) -> Vec<Entity> {
    match result {
        Ok(records) => filter_candidates(&records, query),
        Err(err) => {
            tracing::warn!(
                error = %err,
                query,
                "candidate retrieval failed; no candidate suggestions"
            );
            Vec::new()
        }
    }
}

/// Users first, then candidates, each pool capped independently.
pub fn merge_suggestions(users: Vec<Entity>, candidates: Vec<Entity>) -> Vec<Entity> {
    users
        .into_iter()
        .take(MAX_USER_SUGGESTIONS)
        .chain(candidates.into_iter().take(MAX_CANDIDATE_SUGGESTIONS))
        .collect()
}

pub fn into_suggestion_items(entities: Vec<Entity>, query: &str) -> Vec<SuggestionItem> {
    entities
        .into_iter()
        .map(|entity| SuggestionItem { entity, matched_on: query.to_owned() })
        .collect()
}
