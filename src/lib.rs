// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recruitline: mention-aware note editing and ranked global search for recruitment tracking.
//!
//! The engine lives in [`input`] (the `@`-mention state machine), [`query`] (trigger detection,
//! suggestion lookup, global ranking), [`ops`] (text edits and the mention ledger) and [`render`]
//! (text to highlighted segments). [`store`] loads datasets from disk and [`tui`] hosts the
//! engine in a terminal.

pub mod input;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod store;
pub mod text;
pub mod tui;
