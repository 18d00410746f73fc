// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use super::data_folder::{DataFolder, Dataset};
use crate::model::{
    CandidateId, CandidateRecord, SearchCatalog, TalentPool, TalentPoolId, UserEntity, UserId,
    Vacancy, VacancyId,
};

pub fn demo_folder() -> DataFolder {
    DataFolder::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("demo"))
}

/// The bundled demo folder, or a compiled-in copy when it cannot be read.
pub fn demo_dataset() -> Dataset {
    let folder = demo_folder();
    match folder.load() {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::warn!(
                root = %folder.root().display(),
                error = %err,
                "failed to load demo data; falling back to built-in demo data"
            );
            demo_dataset_fallback()
        }
    }
}

fn demo_dataset_fallback() -> Dataset {
    fn uid(value: &str) -> UserId {
        UserId::new(value).expect("user id")
    }
    fn cid(value: &str) -> CandidateId {
        CandidateId::new(value).expect("candidate id")
    }
    fn vid(value: &str) -> VacancyId {
        VacancyId::new(value).expect("vacancy id")
    }
    fn pid(value: &str) -> TalentPoolId {
        TalentPoolId::new(value).expect("talent pool id")
    }

    let users = vec![
        UserEntity::new(uid("u1"), "Lisa Bakker", "Recruiter"),
        UserEntity::new(uid("u2"), "Lars de Vries", "Hiring Manager"),
        UserEntity::new(uid("u3"), "Linda Smit", "Sourcer"),
        UserEntity::new(uid("u4"), "Liam Visser", "Recruiter"),
        UserEntity::new(uid("u5"), "Mark Jansen", "Team Lead"),
        UserEntity::new(uid("u6"), "Zoë Peeters", "Talent Partner"),
    ];

    let candidates = vec![
        CandidateRecord::new(cid("c1"), "Jan", "Jansen")
            .with_current_function("Backend Developer")
            .with_location("Amsterdam"),
        CandidateRecord::new(cid("c2"), "Eva", "Lindeman")
            .with_current_function("Data Analyst")
            .with_location("Utrecht"),
        CandidateRecord::new(cid("c3"), "Lieke", "Mulder")
            .with_current_function("Product Designer"),
        CandidateRecord::new(cid("c4"), "Noah", "Linden").with_location("Rotterdam"),
        CandidateRecord::new(cid("c5"), "Olivia", "Lint").with_current_function("Account Manager"),
        CandidateRecord::new(cid("c6"), "Sem", "Klinkers"),
        CandidateRecord::new(cid("c7"), "Lotte", "de Groot")
            .with_current_function("Engineer")
            .with_location("Eindhoven"),
        CandidateRecord::new(cid("c8"), "Daan", "Amsterdammer")
            .with_current_function("Sales Engineer"),
    ];

    let vacancies = vec![
        Vacancy::new(vid("v1"), "Engineer", "Acme", "Rotterdam"),
        Vacancy::new(vid("v2"), "Sales Rep", "Acme", "Utrecht"),
        Vacancy::new(vid("v3"), "Amsterdam Office Manager", "Globex", "Amsterdam"),
        Vacancy::new(vid("v4"), "Data Engineer", "Initech", "Amsterdam"),
        Vacancy::new(vid("v5"), "Backend Developer", "Umbrella", "Eindhoven"),
        Vacancy::new(vid("v6"), "Recruitment Lead", "Globex", "Den Haag"),
    ];

    let mut engineering = TalentPool::new(pid("p1"), "Engineering alumni");
    engineering.description = Some("Former engineering finalists".to_owned());
    let mut designers = TalentPool::new(pid("p3"), "Amsterdam designers");
    designers.description = Some("Design profiles in the Amsterdam area".to_owned());
    let talent_pools = vec![engineering, TalentPool::new(pid("p2"), "Sales pipeline"), designers];

    Dataset { users, catalog: SearchCatalog { vacancies, candidates, talent_pools } }
}
