//! Graph nodes and the minimum-hop route table.

use std::collections::HashMap;
use std::hash::Hash;

use derive_more::{From, Into};
use log::trace;
use serde::Serialize;

use super::converter::Converter;
use crate::traits::migration::VersionedModel;

/// Index of a converter registered in a [`ChainBuilder`](super::ChainBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Serialize)]
pub struct ChainId(usize);

impl ChainId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a node reaches one source version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Converter applications needed before this node's own transform.
    pub hops: usize,
    /// Upstream chain owning the route; `None` only for the node's own source.
    pub via: Option<ChainId>,
}

impl Route {
    pub(crate) fn origin() -> Self {
        Self { hops: 0, via: None }
    }
}

/// A converter plus every version it can accept, each with its cheapest route.
pub struct ChainNode<F: VersionedModel> {
    converter: Converter<F>,
    reachable: HashMap<F::Version, Route>,
}

impl<F: VersionedModel> ChainNode<F> {
    pub(crate) fn new(converter: Converter<F>) -> Self {
        let mut reachable = HashMap::new();
        reachable.insert(converter.source(), Route::origin());
        Self {
            converter,
            reachable,
        }
    }

    pub fn converter(&self) -> &Converter<F> {
        &self.converter
    }

    pub fn route(&self, version: F::Version) -> Option<Route> {
        self.reachable.get(&version).copied()
    }

    pub fn reachable(&self) -> impl Iterator<Item = (F::Version, Route)> + '_ {
        self.reachable.iter().map(|(version, route)| (*version, *route))
    }

    /// `(version, hops)` pairs as seen by a downstream node.
    pub(crate) fn hop_table(&self) -> Vec<(F::Version, usize)> {
        self.reachable
            .iter()
            .map(|(version, route)| (*version, route.hops))
            .collect()
    }

    pub(crate) fn table_mut(&mut self) -> &mut HashMap<F::Version, Route> {
        &mut self.reachable
    }
}

impl<F: VersionedModel> std::fmt::Debug for ChainNode<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainNode")
            .field("converter", &self.converter)
            .field("reachable", &self.reachable)
            .finish()
    }
}

/// Merges an upstream chain's hop table into `table`.
///
/// Every incoming entry costs one extra hop through `via`. An entry is taken
/// only when the version is new or the candidate is strictly cheaper, so the
/// first upstream to reach a version at a given cost keeps it. Returns how many
/// entries were inserted or improved; merging the same table twice returns 0.
pub fn merge_routes<V, I>(table: &mut HashMap<V, Route>, incoming: I, via: ChainId) -> usize
where
    V: Eq + Hash + std::fmt::Debug,
    I: IntoIterator<Item = (V, usize)>,
{
    let mut changed = 0;

    for (version, hops) in incoming {
        let candidate = hops + 1;
        match table.get_mut(&version) {
            None => {
                trace!("merge: {version:?} reachable in {candidate} via {via}");
                table.insert(
                    version,
                    Route {
                        hops: candidate,
                        via: Some(via),
                    },
                );
                changed += 1;
            }
            Some(existing) if candidate < existing.hops => {
                trace!(
                    "merge: {version:?} shortened {} -> {candidate} via {via}",
                    existing.hops
                );
                *existing = Route {
                    hops: candidate,
                    via: Some(via),
                };
                changed += 1;
            }
            Some(_) => {}
        }
    }

    changed
}
