// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Candidate retrieval off the input thread.
//!
//! Every query change issues a request tagged with a monotonically increasing generation. Hosts
//! run the request wherever they like and hand the [`CandidateLookup`] back; the input applies it
//! only if its generation is still the latest one issued.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::model::CandidateRecord;
use crate::query::entity_index::{CandidateSource, RetrievalError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct CandidateLookup {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<CandidateRecord>, RetrievalError>,
}

pub fn run_lookup(source: &dyn CandidateSource, request: CandidateRequest) -> CandidateLookup {
    CandidateLookup {
        generation: request.generation,
        query: request.query,
        result: source.list_candidates(),
    }
}

/// Runs the lookup on the blocking pool and sends the outcome to `tx`.
///
/// A closed receiver means the input is gone; the result is dropped.
pub fn spawn_lookup(
    handle: &Handle,
    source: Arc<dyn CandidateSource>,
    request: CandidateRequest,
    tx: UnboundedSender<CandidateLookup>,
) -> JoinHandle<()> {
    handle.spawn_blocking(move || {
        let lookup = run_lookup(source.as_ref(), request);
        if tx.send(lookup).is_err() {
            tracing::debug!("candidate lookup finished after the input closed");
        }
    })
}
