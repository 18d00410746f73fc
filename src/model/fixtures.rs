// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::entity::UserEntity;
use super::ids::{CandidateId, TalentPoolId, UserId, VacancyId};
use super::records::{CandidateRecord, TalentPool, Vacancy};
use super::search::SearchCatalog;

fn uid(value: &str) -> UserId {
    UserId::new(value).expect("user id")
}

fn cid(value: &str) -> CandidateId {
    CandidateId::new(value).expect("candidate id")
}

fn vid(value: &str) -> VacancyId {
    VacancyId::new(value).expect("vacancy id")
}

pub(crate) fn users() -> Vec<UserEntity> {
    vec![
        UserEntity::new(uid("u1"), "Lisa Bakker", "Recruiter"),
        UserEntity::new(uid("u2"), "Lars de Vries", "Hiring Manager"),
        UserEntity::new(uid("u3"), "Linda Smit", "Sourcer"),
        UserEntity::new(uid("u4"), "Liam Visser", "Recruiter"),
        UserEntity::new(uid("u5"), "Mark Jansen", "Team Lead"),
    ]
}

pub(crate) fn candidates() -> Vec<CandidateRecord> {
    vec![
        CandidateRecord::new(cid("c1"), "Jan", "Jansen")
            .with_current_function("Backend Developer")
            .with_location("Amsterdam"),
        CandidateRecord::new(cid("c2"), "Eva", "Lindeman").with_current_function("Data Analyst"),
        CandidateRecord::new(cid("c3"), "Lieke", "Mulder").with_current_function("Designer"),
        CandidateRecord::new(cid("c4"), "Noah", "Linden"),
        CandidateRecord::new(cid("c5"), "Olivia", "Lint"),
        CandidateRecord::new(cid("c6"), "Sem", "Klinkers"),
        CandidateRecord::new(cid("c7"), "Lotte", "de Groot"),
    ]
}

pub(crate) fn vacancies() -> Vec<Vacancy> {
    vec![
        Vacancy::new(vid("v1"), "Engineer", "Acme", "Rotterdam"),
        Vacancy::new(vid("v2"), "Sales Rep", "Acme", "Utrecht"),
        Vacancy::new(vid("v3"), "Amsterdam Office Manager", "Globex", "Amsterdam"),
        Vacancy::new(vid("v4"), "Data Engineer", "Initech", "Amsterdam"),
        Vacancy::new(vid("v5"), "Backend Developer", "Umbrella", "Eindhoven"),
    ]
}

pub(crate) fn talent_pools() -> Vec<TalentPool> {
    vec![
        TalentPool::new(TalentPoolId::new("p1").expect("pool id"), "Engineering alumni"),
        TalentPool::new(TalentPoolId::new("p2").expect("pool id"), "Sales pipeline"),
    ]
}

pub(crate) fn catalog() -> SearchCatalog {
    SearchCatalog { vacancies: vacancies(), candidates: candidates(), talent_pools: talent_pools() }
}
