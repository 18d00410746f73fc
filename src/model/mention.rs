// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::entity::{EntityKey, EntityKind};

/// A resolved mention as recorded at commit time.
///
/// `[start_index, end_index)` is a half-open range of *character* offsets into the text as it was
/// right after the commit, covering `@` followed by `name`. The range is a snapshot: later edits
/// are not reflected (see `MentionLedger::drifted`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub target: EntityKey,
    pub name: SmolStr,
    pub start_index: usize,
    pub end_index: usize,
}

impl Mention {
    pub fn id(&self) -> &str {
        self.target.id_str()
    }

    pub fn kind(&self) -> EntityKind {
        self.target.kind()
    }

    pub fn char_len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// The literal text the range covered when the mention was committed.
    pub fn mention_text(&self) -> String {
        format!("@{}", self.name)
    }
}
