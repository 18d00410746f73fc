// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::records::{CandidateRecord, TalentPool, Vacancy};

/// Result kinds of the global search bar, declared in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResultKind {
    Vacancy,
    Candidate,
    TalentPool,
}

impl SearchResultKind {
    pub fn priority(self) -> u8 {
        match self {
            Self::Vacancy => 0,
            Self::Candidate => 1,
            Self::TalentPool => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Vacancy => "vacancy",
            Self::Candidate => "candidate",
            Self::TalentPool => "talent pool",
        }
    }

    fn route_prefix(self) -> &'static str {
        match self {
            Self::Vacancy => "/vacancies",
            Self::Candidate => "/candidates",
            Self::TalentPool => "/talent-pools",
        }
    }

    pub fn url_for(self, id: &str) -> String {
        format!("{}/{id}", self.route_prefix())
    }
}

impl fmt::Display for SearchResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub kind: SearchResultKind,
    pub title: String,
    pub subtitle: String,
    pub url: String,
}

impl SearchResult {
    pub fn from_vacancy(vacancy: &Vacancy) -> Self {
        let subtitle = if vacancy.location.is_empty() {
            vacancy.company.clone()
        } else {
            format!("{} · {}", vacancy.company, vacancy.location)
        };
        let kind = SearchResultKind::Vacancy;
        Self {
            id: vacancy.id.to_string(),
            kind,
            title: vacancy.title.clone(),
            subtitle,
            url: kind.url_for(vacancy.id.as_str()),
        }
    }

    pub fn from_candidate(candidate: &CandidateRecord) -> Self {
        let kind = SearchResultKind::Candidate;
        Self {
            id: candidate.id.to_string(),
            kind,
            title: candidate.full_name(),
            subtitle: candidate.current_function.clone().unwrap_or_default(),
            url: kind.url_for(candidate.id.as_str()),
        }
    }

    pub fn from_talent_pool(pool: &TalentPool) -> Self {
        let kind = SearchResultKind::TalentPool;
        Self {
            id: pool.id.to_string(),
            kind,
            title: pool.name.clone(),
            subtitle: pool.description.clone().unwrap_or_default(),
            url: kind.url_for(pool.id.as_str()),
        }
    }
}

/// Snapshot of everything the global search bar can find.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCatalog {
    pub vacancies: Vec<Vacancy>,
    pub candidates: Vec<CandidateRecord>,
    pub talent_pools: Vec<TalentPool>,
}
