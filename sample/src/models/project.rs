// Project model - three releases of the same record

use derive_more::{From, TryInto};
use model_upgrade::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIter, IntoStaticStr};

/// First release: a project was a uid and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version1 {
    pub uid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version2 {
    pub id: String,
    pub project_name: String,
}

/// Current release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version3 {
    pub project_id: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, From, TryInto, EnumDiscriminants)]
#[strum_discriminants(name(ProjectVersion), derive(Hash, IntoStaticStr, EnumIter))]
pub enum Project {
    Version1(Version1),
    Version2(Version2),
    Version3(Version3),
}

impl VersionedModel for Project {
    type Version = ProjectVersion;

    fn version(&self) -> ProjectVersion {
        self.into()
    }
}

impl ModelVersion<Project> for Version1 {
    const VERSION: ProjectVersion = ProjectVersion::Version1;
}

impl ModelVersion<Project> for Version2 {
    const VERSION: ProjectVersion = ProjectVersion::Version2;
}

impl ModelVersion<Project> for Version3 {
    const VERSION: ProjectVersion = ProjectVersion::Version3;
}

impl VersionStoreModel<Project> for Version1 {
    fn model_id(&self) -> String {
        self.uid.clone()
    }
}

impl VersionStoreModel<Project> for Version3 {
    fn model_id(&self) -> String {
        self.project_id.clone()
    }
}

pub fn version1_to_version2(model: Version1) -> Version2 {
    Version2 {
        id: model.uid,
        project_name: model.name,
    }
}

pub fn version2_to_version3(model: Version2) -> Version3 {
    Version3 {
        project_id: model.id,
        project_name: model.project_name,
    }
}
