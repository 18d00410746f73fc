// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Entities (users, candidates) are what mentions point at; vacancies, candidates and talent
//! pools are what the global search bar finds.

pub mod entity;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod mention;
pub mod records;
pub mod search;

pub use entity::{CandidateEntity, Entity, EntityKey, EntityKind, SuggestionItem, UserEntity};
pub use ids::{CandidateId, IdError, TalentPoolId, UserId, VacancyId};
pub use mention::Mention;
pub use records::{CandidateRecord, TalentPool, Vacancy};
pub use search::{SearchCatalog, SearchResult, SearchResultKind};
