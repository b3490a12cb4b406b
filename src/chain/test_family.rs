//! Small four-version family used by the chain unit tests.
//!
//! Every converter appends its name to `trail`, so tests can assert the exact
//! sequence of converters an upgrade applied.

use derive_more::{From, TryInto};
use strum::{EnumDiscriminants, IntoStaticStr};

use super::Converter;
use crate::traits::migration::{ModelVersion, VersionedModel};

macro_rules! doc_version {
    ($($name:ident),*) => {
        $(
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                pub text: String,
                pub trail: Vec<&'static str>,
            }

            impl ModelVersion<Doc> for $name {
                const VERSION: DocVersion = DocVersion::$name;
            }
        )*
    };
}

doc_version!(A, B, C, D);

#[derive(Debug, Clone, PartialEq, From, TryInto, EnumDiscriminants)]
#[strum_discriminants(name(DocVersion), derive(Hash, IntoStaticStr))]
pub enum Doc {
    A(A),
    B(B),
    C(C),
    D(D),
}

impl VersionedModel for Doc {
    type Version = DocVersion;

    fn version(&self) -> DocVersion {
        self.into()
    }
}

pub fn doc_a(text: &str) -> Doc {
    A {
        text: text.to_string(),
        trail: vec![],
    }
    .into()
}

pub fn doc_b(text: &str) -> Doc {
    B {
        text: text.to_string(),
        trail: vec![],
    }
    .into()
}

fn step(mut trail: Vec<&'static str>, name: &'static str) -> Vec<&'static str> {
    trail.push(name);
    trail
}

pub fn a_to_b() -> Converter<Doc> {
    Converter::new(|m: A| B {
        text: m.text,
        trail: step(m.trail, "AToB"),
    })
    .unwrap()
}

pub fn b_to_c() -> Converter<Doc> {
    Converter::new(|m: B| C {
        text: m.text,
        trail: step(m.trail, "BToC"),
    })
    .unwrap()
}

pub fn c_to_d() -> Converter<Doc> {
    Converter::new(|m: C| D {
        text: m.text,
        trail: step(m.trail, "CToD"),
    })
    .unwrap()
}

pub fn a_to_c() -> Converter<Doc> {
    Converter::new(|m: A| C {
        text: m.text,
        trail: step(m.trail, "AToC"),
    })
    .unwrap()
}
