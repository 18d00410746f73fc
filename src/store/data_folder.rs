// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::{CandidateRecord, SearchCatalog, TalentPool, UserEntity, UserId, Vacancy};
use crate::query::entity_index::{CandidateSource, RetrievalError, StaticUserDirectory};

pub const USERS_FILENAME: &str = "users.json";
pub const CANDIDATES_FILENAME: &str = "candidates.json";
pub const VACANCIES_FILENAME: &str = "vacancies.json";
pub const TALENT_POOLS_FILENAME: &str = "talent-pools.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("json error at {path:?}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
}

/// One row of `users.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserJson {
    id: UserId,
    name: String,
    #[serde(default)]
    role: String,
}

impl From<UserJson> for UserEntity {
    fn from(json: UserJson) -> Self {
        UserEntity::new(json.id, json.name, json.role)
    }
}

/// Everything the app needs from a data folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub users: Vec<UserEntity>,
    pub catalog: SearchCatalog,
}

impl Dataset {
    pub fn directory(&self) -> StaticUserDirectory {
        StaticUserDirectory::new(self.users.clone())
    }
}

/// A folder of JSON lists.
///
/// `users.json` must exist; the other files default to empty lists when missing. Every file is a
/// JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFolder {
    root: PathBuf,
}

impl DataFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load(&self) -> Result<Dataset, StoreError> {
        let dataset = Dataset {
            users: self.load_users()?,
            catalog: SearchCatalog {
                vacancies: self.load_vacancies()?,
                candidates: self.load_candidates()?,
                talent_pools: self.load_talent_pools()?,
            },
        };
        tracing::info!(
            root = %self.root.display(),
            users = dataset.users.len(),
            candidates = dataset.catalog.candidates.len(),
            vacancies = dataset.catalog.vacancies.len(),
            talent_pools = dataset.catalog.talent_pools.len(),
            "data folder loaded"
        );
        Ok(dataset)
    }

    pub fn load_users(&self) -> Result<Vec<UserEntity>, StoreError> {
        let path = self.root.join(USERS_FILENAME);
        let rows: Vec<UserJson> = read_json_list(&path)?.ok_or_else(|| StoreError::Io {
            path: path.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "user directory is required"),
        })?;
        Ok(rows.into_iter().map(UserEntity::from).collect())
    }

    pub fn load_candidates(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        self.load_optional(CANDIDATES_FILENAME)
    }

    pub fn load_vacancies(&self) -> Result<Vec<Vacancy>, StoreError> {
        self.load_optional(VACANCIES_FILENAME)
    }

    pub fn load_talent_pools(&self) -> Result<Vec<TalentPool>, StoreError> {
        self.load_optional(TALENT_POOLS_FILENAME)
    }

    fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>, StoreError> {
        let path = self.root.join(filename);
        match read_json_list(&path)? {
            Some(rows) => Ok(rows),
            None => {
                tracing::debug!(
                    path = %path.display(),
                    "optional data file missing; using an empty list"
                );
                Ok(Vec::new())
            }
        }
    }
}

/// Re-reads `candidates.json` on every lookup, so edits on disk show up in the next query.
impl CandidateSource for DataFolder {
    fn list_candidates(&self) -> Result<Vec<CandidateRecord>, RetrievalError> {
        self.load_candidates().map_err(|err| RetrievalError::Failed(Box::new(err)))
    }
}

/// `Ok(None)` when the file does not exist.
fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    };

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests;
