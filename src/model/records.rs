// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Raw records as handed over by the data sources.

use serde::{Deserialize, Serialize};

use super::ids::{CandidateId, TalentPoolId, VacancyId};

/// A candidate row as returned by the candidate list call.
///
/// `location` is carried for display only; search never matches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CandidateRecord {
    pub fn new(
        id: CandidateId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            current_function: None,
            location: None,
        }
    }

    pub fn with_current_function(mut self, current_function: impl Into<String>) -> Self {
        self.current_function = Some(current_function.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// `first_name last_name`, trimmed so a missing half does not leave a stray space.
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_owned(),
            (true, false) => last.to_owned(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: VacancyId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
}

impl Vacancy {
    pub fn new(
        id: VacancyId,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self { id, title: title.into(), company: company.into(), location: location.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentPool {
    pub id: TalentPoolId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TalentPool {
    pub fn new(id: TalentPoolId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), description: None }
    }
}
