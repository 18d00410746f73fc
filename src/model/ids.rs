// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("record id must not be empty")]
    Empty,
    #[error("record id {0:?} contains '/'")]
    ContainsSlash(String),
}

/// Ids end up in navigation paths like `/candidates/<id>`, so each one must be a single
/// non-empty path segment.
fn check_path_segment(value: String) -> Result<String, IdError> {
    if value.is_empty() {
        Err(IdError::Empty)
    } else if value.contains('/') {
        Err(IdError::ContainsSlash(value))
    } else {
        Ok(value)
    }
}

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                check_path_segment(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Self::new(String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
            }
        }
    };
}

record_id! {
    /// A member of the local user directory.
    UserId
}

record_id! {
    /// A candidate as known to the candidate list call.
    CandidateId
}

record_id! {
    VacancyId
}

record_id! {
    TalentPoolId
}
