// Common test fixtures: a five-version project family and its converters

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use derive_more::{From, TryInto};
use model_upgrade::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIter, IntoStaticStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version1 {
    pub uid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version2 {
    pub id: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version3 {
    pub project_id: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version4 {
    pub project_id: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version5 {
    pub project_id: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, From, TryInto, EnumDiscriminants)]
#[strum_discriminants(name(ProjectVersion), derive(Hash, IntoStaticStr, EnumIter))]
pub enum Project {
    Version1(Version1),
    Version2(Version2),
    Version3(Version3),
    Version4(Version4),
    Version5(Version5),
}

impl VersionedModel for Project {
    type Version = ProjectVersion;

    fn version(&self) -> ProjectVersion {
        self.into()
    }
}

macro_rules! project_version {
    ($name:ident, $id:ident) => {
        impl ModelVersion<Project> for $name {
            const VERSION: ProjectVersion = ProjectVersion::$name;
        }

        impl VersionStoreModel<Project> for $name {
            fn model_id(&self) -> String {
                self.$id.clone()
            }
        }
    };
}

project_version!(Version1, uid);
project_version!(Version2, id);
project_version!(Version3, project_id);
project_version!(Version4, project_id);
project_version!(Version5, project_id);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn version1(uid: &str, name: &str) -> Version1 {
    Version1 {
        uid: uid.to_string(),
        name: name.to_string(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptedError {
    #[error("encoding switched off")]
    EncodeRefused,
    #[error("decoding switched off")]
    DecodeRefused,
    #[error("json: {0}")]
    Json(String),
}

/// JSON serializer whose either direction can be switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedSerializer {
    pub fail_encode: bool,
    pub fail_decode: bool,
}

impl ScriptedSerializer {
    pub fn failing_encode() -> Self {
        Self {
            fail_encode: true,
            fail_decode: false,
        }
    }

    pub fn failing_decode() -> Self {
        Self {
            fail_encode: false,
            fail_decode: true,
        }
    }
}

impl ModelSerializer for ScriptedSerializer {
    type Error = ScriptedError;

    fn serialize<V: Serialize>(&self, model: &V) -> Result<String, Self::Error> {
        if self.fail_encode {
            return Err(ScriptedError::EncodeRefused);
        }
        serde_json::to_string(model).map_err(|e| ScriptedError::Json(e.to_string()))
    }

    fn deserialize<V: DeserializeOwned>(&self, data: &str) -> Result<V, Self::Error> {
        if self.fail_decode {
            return Err(ScriptedError::DecodeRefused);
        }
        serde_json::from_str(data).map_err(|e| ScriptedError::Json(e.to_string()))
    }
}

/// Names of the converters applied, in application order.
#[derive(Debug, Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<&'static str>>>);

impl Calls {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, name: &'static str) {
        self.0.lock().unwrap().push(name);
    }

    pub fn take(&self) -> Vec<&'static str> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

pub fn v1_to_v2(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version1| {
        calls.push("Version1ToVersion2");
        Version2 {
            id: m.uid,
            project_name: m.name,
        }
    })
    .unwrap()
}

pub fn v2_to_v3(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version2| {
        calls.push("Version2ToVersion3");
        Version3 {
            project_id: m.id,
            project_name: m.project_name,
        }
    })
    .unwrap()
}

pub fn v3_to_v4(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version3| {
        calls.push("Version3ToVersion4");
        Version4 {
            project_id: m.project_id,
            project_name: m.project_name,
        }
    })
    .unwrap()
}

pub fn v4_to_v5(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version4| {
        calls.push("Version4ToVersion5");
        Version5 {
            project_id: m.project_id,
            project_name: m.project_name,
        }
    })
    .unwrap()
}

/// Jump converter; marks its output so tests can tell it from the linear path.
pub fn v1_to_v4(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version1| {
        calls.push("Version1ToVersion4");
        Version4 {
            project_id: m.uid,
            project_name: format!("{} (jump)", m.name),
        }
    })
    .unwrap()
}

pub fn v1_to_v3(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version1| {
        calls.push("Version1ToVersion3");
        Version3 {
            project_id: m.uid,
            project_name: m.name,
        }
    })
    .unwrap()
}

pub fn v2_to_v4(calls: &Calls) -> Converter<Project> {
    let calls = calls.clone();
    Converter::new(move |m: Version2| {
        calls.push("Version2ToVersion4");
        Version4 {
            project_id: m.id,
            project_name: m.project_name,
        }
    })
    .unwrap()
}

/// Version1 -> Version2 -> Version3, as the sample application wires it.
pub fn three_versions(calls: &Calls) -> (ChainResolver<Project>, ChainId) {
    let mut builder = ChainBuilder::<Project>::new();
    let v1 = builder.chain(v1_to_v2(calls), &[]).unwrap();
    let v2 = builder.chain(v2_to_v3(calls), &[v1]).unwrap();
    (builder.build(), v2)
}

/// Linear Version1..Version5 plus a Version1 -> Version4 jump into the head.
pub fn linear_with_jump(calls: &Calls) -> (ChainResolver<Project>, ChainId) {
    let mut builder = ChainBuilder::<Project>::new();
    let v1 = builder.chain(v1_to_v2(calls), &[]).unwrap();
    let v2 = builder.chain(v2_to_v3(calls), &[v1]).unwrap();
    let v3 = builder.chain(v3_to_v4(calls), &[v2]).unwrap();
    let jump = builder.chain(v1_to_v4(calls), &[]).unwrap();
    let v4 = builder.chain(v4_to_v5(calls), &[v3, jump]).unwrap();
    (builder.build(), v4)
}

/// Two routes of equal length from Version1 into the Version4 -> Version5 head:
/// Version1 -> Version3 -> Version4 and Version1 -> Version2 -> Version4.
/// `via_v3_first` decides which upstream is merged first.
pub fn tied_routes(calls: &Calls, via_v3_first: bool) -> (ChainResolver<Project>, ChainId) {
    let mut builder = ChainBuilder::<Project>::new();
    let j13 = builder.chain(v1_to_v3(calls), &[]).unwrap();
    let v3 = builder.chain(v3_to_v4(calls), &[j13]).unwrap();
    let v1 = builder.chain(v1_to_v2(calls), &[]).unwrap();
    let j24 = builder.chain(v2_to_v4(calls), &[v1]).unwrap();

    let upstream = if via_v3_first { [v3, j24] } else { [j24, v3] };
    let head = builder.chain(v4_to_v5(calls), &upstream).unwrap();
    (builder.build(), head)
}
