// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ranking for the global search bar.
//!
//! The order is a hand-tuned heuristic rather than a score:
//! 1. a company whose name matches surfaces *all* of its vacancies (company drill-down),
//! 2. remaining vacancies match on title or location,
//! 3. candidates match on full name only,
//! 4. talent pools match on name,
//!
//! then a stable sort puts titles that start with the query first and breaks ties by kind
//! (vacancy, candidate, talent pool).

use std::collections::HashSet;

use super::entity_index::contains_folded;
use crate::model::{SearchCatalog, SearchResult};
use crate::text::text_len;

pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_RESULTS: usize = 10;

pub fn rank(query: &str, catalog: &SearchCatalog) -> Vec<SearchResult> {
    let query = query.trim();
    if text_len(query) < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut results = Vec::new();
    let mut emitted_vacancies = HashSet::<usize>::new();

    let mut companies = Vec::<&str>::new();
    for vacancy in &catalog.vacancies {
        let company = vacancy.company.as_str();
        if !companies.contains(&company) && contains_folded(company, &needle) {
            companies.push(company);
        }
    }
    for company in companies {
        for (idx, vacancy) in catalog.vacancies.iter().enumerate() {
            if vacancy.company == company && emitted_vacancies.insert(idx) {
                results.push(SearchResult::from_vacancy(vacancy));
            }
        }
    }

    for (idx, vacancy) in catalog.vacancies.iter().enumerate() {
        if emitted_vacancies.contains(&idx) {
            continue;
        }
        if contains_folded(&vacancy.title, &needle) || contains_folded(&vacancy.location, &needle)
        {
            emitted_vacancies.insert(idx);
            results.push(SearchResult::from_vacancy(vacancy));
        }
    }

    results.extend(
        catalog
            .candidates
            .iter()
            .filter(|candidate| contains_folded(&candidate.full_name(), &needle))
            .map(SearchResult::from_candidate),
    );

    results.extend(
        catalog
            .talent_pools
            .iter()
            .filter(|pool| contains_folded(&pool.name, &needle))
            .map(SearchResult::from_talent_pool),
    );

    // `sort_by_key` is stable, so emission order survives within a tier and kind.
    results.sort_by_key(|result| {
        let prefix_tier = u8::from(!result.title.to_lowercase().starts_with(&needle));
        (prefix_tier, result.kind.priority())
    });
    results.truncate(MAX_RESULTS);
    results
}
