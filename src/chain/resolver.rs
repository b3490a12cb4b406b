//! Query phase of the upgrade graph.

use log::{trace, warn};

use super::node::{ChainId, ChainNode};
use super::schema::{ChainSchema, ChainSchemaEntry, RouteSchema};
use crate::errors::{UpgradeError, UpgradeResult};
use crate::traits::migration::{ModelVersion, VersionTag, VersionedModel};

/// Frozen upgrade graph.
///
/// Produced by [`ChainBuilder::build`](super::ChainBuilder::build). Nothing
/// mutates the graph after that, so a resolver can be shared across threads
/// (wrap it in an `Arc`) and queried concurrently.
pub struct ChainResolver<F: VersionedModel> {
    nodes: Vec<ChainNode<F>>,
}

/// One converter application on an [`UpgradePath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<V> {
    pub chain: ChainId,
    pub converter: String,
    pub source: V,
    pub target: V,
}

/// The exact converter sequence an upgrade applies, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePath<V> {
    pub from: V,
    pub to: V,
    pub steps: Vec<PathStep<V>>,
}

impl<V> UpgradePath<V> {
    /// Number of converter applications.
    pub fn hops(&self) -> usize {
        self.steps.len()
    }

    pub fn converters(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.converter.as_str()).collect()
    }
}

impl<F: VersionedModel> ChainResolver<F> {
    pub(crate) fn new(nodes: Vec<ChainNode<F>>) -> Self {
        Self { nodes }
    }

    pub fn node(&self, chain: ChainId) -> UpgradeResult<&ChainNode<F>> {
        self.nodes
            .get(chain.index())
            .ok_or_else(|| UpgradeError::InvalidArgument(format!("unknown chain {chain}")))
    }

    pub fn source(&self, chain: ChainId) -> UpgradeResult<F::Version> {
        Ok(self.node(chain)?.converter().source())
    }

    pub fn target(&self, chain: ChainId) -> UpgradeResult<F::Version> {
        Ok(self.node(chain)?.converter().target())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Upgrades `model` to the target version of `chain`.
    ///
    /// A model already at the target is returned unchanged. Otherwise the
    /// cheapest registered route is applied, hop by hop.
    pub fn upgrade(&self, chain: ChainId, model: F) -> UpgradeResult<F> {
        let target = self.target(chain)?;
        let version = model.version();

        let upgraded = self.upgrade_at(chain, model).inspect_err(|err| {
            if err.is_wiring_error() {
                warn!("ChainResolver: {} -> {} failed: {err}", version.name(), target.name());
            }
        })?;

        let found = upgraded.version();
        if found != target {
            return Err(UpgradeError::UpgradeIncomplete {
                version: version.name().to_string(),
                expected: target.name().to_string(),
                found: found.name().to_string(),
            });
        }

        Ok(upgraded)
    }

    /// Upgrades `model` and unwraps the target version struct.
    ///
    /// `T` must be the target version of `chain`.
    pub fn upgrade_to<T: ModelVersion<F>>(&self, chain: ChainId, model: F) -> UpgradeResult<T> {
        let node = self.node(chain)?;
        let target = node.converter().target();
        if T::VERSION != target {
            return Err(UpgradeError::IncompatibleChain {
                converter: node.converter().name().to_string(),
                expected: T::VERSION.name().to_string(),
                found: target.name().to_string(),
            });
        }

        let version = model.version();
        let upgraded = self.upgrade(chain, model)?;
        let found = upgraded.version();
        T::try_from(upgraded).map_err(|_| UpgradeError::UpgradeIncomplete {
            version: version.name().to_string(),
            expected: target.name().to_string(),
            found: found.name().to_string(),
        })
    }

    /// Number of converter applications needed to bring `version` to the
    /// target of `chain`, or `None` when no route exists.
    ///
    /// Counted along the walk [`ChainResolver::upgrade`] takes. A node's own
    /// table can overstate it when an upstream gained a shorter route after
    /// the node was wired.
    pub fn hop_count(&self, chain: ChainId, version: F::Version) -> Option<usize> {
        self.path(chain, version).ok().map(|path| path.hops())
    }

    pub fn can_upgrade(&self, chain: ChainId, version: F::Version) -> bool {
        self.hop_count(chain, version).is_some()
    }

    /// Converter sequence [`ChainResolver::upgrade`] applies to a value of
    /// `version`.
    pub fn path(&self, chain: ChainId, version: F::Version) -> UpgradeResult<UpgradePath<F::Version>> {
        let target = self.target(chain)?;
        let mut steps = Vec::new();
        if version != target {
            self.collect_steps(chain, version, &mut steps)?;
        }
        Ok(UpgradePath {
            from: version,
            to: target,
            steps,
        })
    }

    /// Route tables of every chain, for inspection or export.
    ///
    /// Hop counts are those of the walk [`ChainResolver::upgrade`] takes, not
    /// the counts recorded when each route was merged.
    pub fn schema(&self) -> ChainSchema {
        let chains = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let converter = node.converter();
                let mut routes: Vec<RouteSchema> = node
                    .reachable()
                    .map(|(version, route)| RouteSchema {
                        version: version.name().to_string(),
                        hops: self
                            .path(ChainId::from(index), version)
                            .map(|path| path.hops().saturating_sub(1))
                            .unwrap_or(route.hops),
                        via: route.via.map(ChainId::index),
                    })
                    .collect();
                routes.sort_by(|a, b| a.hops.cmp(&b.hops).then_with(|| a.version.cmp(&b.version)));

                ChainSchemaEntry {
                    id: index,
                    name: converter.name().to_string(),
                    source: converter.source().name().to_string(),
                    target: converter.target().name().to_string(),
                    routes,
                }
            })
            .collect();

        ChainSchema { chains }
    }

    fn upgrade_at(&self, chain: ChainId, model: F) -> UpgradeResult<F> {
        let node = self.node(chain)?;
        let converter = node.converter();
        let version = model.version();

        if version == converter.target() {
            return Ok(model);
        }

        if version == converter.source() {
            trace!("ChainResolver: Applying {} to {}", converter.name(), version.name());
            return converter.apply(model);
        }

        let via = match node.route(version) {
            None => {
                return Err(UpgradeError::NoPathFound {
                    version: version.name().to_string(),
                    target: converter.target().name().to_string(),
                });
            }
            Some(route) => route.via,
        };
        let Some(via) = via else {
            return Err(UpgradeError::ChainIncomplete {
                converter: converter.name().to_string(),
                expected: converter.source().name().to_string(),
                found: version.name().to_string(),
            });
        };

        let previous = self.upgrade_at(via, model)?;
        let found = previous.version();
        if found != converter.source() {
            return Err(UpgradeError::ChainIncomplete {
                converter: converter.name().to_string(),
                expected: converter.source().name().to_string(),
                found: found.name().to_string(),
            });
        }

        trace!("ChainResolver: Applying {} to {}", converter.name(), found.name());
        converter.apply(previous)
    }

    fn collect_steps(
        &self,
        chain: ChainId,
        version: F::Version,
        steps: &mut Vec<PathStep<F::Version>>,
    ) -> UpgradeResult<()> {
        let node = self.node(chain)?;
        let converter = node.converter();

        if version != converter.source() {
            let route = node.route(version).ok_or_else(|| UpgradeError::NoPathFound {
                version: version.name().to_string(),
                target: converter.target().name().to_string(),
            })?;
            let Some(via) = route.via else {
                return Err(UpgradeError::ChainIncomplete {
                    converter: converter.name().to_string(),
                    expected: converter.source().name().to_string(),
                    found: version.name().to_string(),
                });
            };
            self.collect_steps(via, version, steps)?;
        }

        steps.push(PathStep {
            chain,
            converter: converter.name().to_string(),
            source: converter.source(),
            target: converter.target(),
        });
        Ok(())
    }
}

impl<F: VersionedModel> std::fmt::Debug for ChainResolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainResolver")
            .field("nodes", &self.nodes)
            .finish()
    }
}
