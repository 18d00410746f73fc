// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading users, candidates, vacancies and talent pools from disk.
//!
//! A data folder holds one JSON array per list. The folder doubles as a [`CandidateSource`] that
//! re-reads its candidate file on each lookup.
//!
//! [`CandidateSource`]: crate::query::entity_index::CandidateSource

pub mod data_folder;
pub mod demo;

pub use data_folder::{DataFolder, Dataset, StoreError};
pub use demo::{demo_dataset, demo_folder};
