// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries.
//!
//! Trigger detection and entity suggestions power the mention input; the global search ranks
//! vacancies, candidates and talent pools for the search bar.

pub mod entity_index;
pub mod global_search;
pub mod trigger;

pub use entity_index::{
    CandidateSource, EntityIndex, RetrievalError, StaticCandidateSource, StaticUserDirectory,
    UserDirectory,
};
pub use global_search::rank;
pub use trigger::{detect, TriggerSession, TriggerState};
