// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::{CandidateId, UserId};
use super::records::CandidateRecord;

/// The two entity pools a mention can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Candidate,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Candidate => "candidate",
        }
    }

    /// Users live in a local directory without detail pages.
    pub fn is_navigable(self) -> bool {
        match self {
            Self::User => false,
            Self::Candidate => true,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full identity of an entity: ids are only unique within their kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityKey {
    User(UserId),
    Candidate(CandidateId),
}

impl EntityKey {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Candidate(_) => EntityKind::Candidate,
        }
    }

    pub fn id_str(&self) -> &str {
        match self {
            Self::User(id) => id.as_str(),
            Self::Candidate(id) => id.as_str(),
        }
    }

    /// Route of the detail page, if the entity has one.
    pub fn navigation_path(&self) -> Option<String> {
        match self {
            Self::User(_) => None,
            Self::Candidate(id) => Some(format!("/candidates/{id}")),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: UserId,
    pub display_name: SmolStr,
    #[serde(default)]
    pub role: SmolStr,
}

impl UserEntity {
    pub fn new(id: UserId, display_name: impl Into<SmolStr>, role: impl Into<SmolStr>) -> Self {
        Self { id, display_name: display_name.into(), role: role.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub id: CandidateId,
    pub display_name: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<SmolStr>,
}

impl From<&CandidateRecord> for CandidateEntity {
    fn from(record: &CandidateRecord) -> Self {
        Self {
            id: record.id.clone(),
            display_name: SmolStr::new(record.full_name()),
            subtitle: record.current_function.as_deref().map(SmolStr::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    User(UserEntity),
    Candidate(CandidateEntity),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Candidate(_) => EntityKind::Candidate,
        }
    }

    pub fn key(&self) -> EntityKey {
        match self {
            Self::User(user) => EntityKey::User(user.id.clone()),
            Self::Candidate(candidate) => EntityKey::Candidate(candidate.id.clone()),
        }
    }

    pub fn display_name(&self) -> &SmolStr {
        match self {
            Self::User(user) => &user.display_name,
            Self::Candidate(candidate) => &candidate.display_name,
        }
    }

    /// Secondary line shown in the suggestion list: the user's role or the candidate's function.
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            Self::User(user) => Some(user.role.as_str()).filter(|role| !role.is_empty()),
            Self::Candidate(candidate) => candidate.subtitle.as_deref(),
        }
    }
}

impl From<UserEntity> for Entity {
    fn from(user: UserEntity) -> Self {
        Self::User(user)
    }
}

impl From<CandidateEntity> for Entity {
    fn from(candidate: CandidateEntity) -> Self {
        Self::Candidate(candidate)
    }
}

/// One row of the mention dropdown. Recomputed on every query change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub entity: Entity,
    pub matched_on: String,
}
