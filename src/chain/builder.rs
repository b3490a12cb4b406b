//! Build phase of the upgrade graph.

use log::debug;

use super::converter::Converter;
use super::node::{ChainId, ChainNode, merge_routes};
use super::resolver::ChainResolver;
use crate::errors::{UpgradeError, UpgradeResult};
use crate::traits::migration::{VersionTag, VersionedModel};

/// Registers converters from the oldest version to the newest.
///
/// Each converter is wired to the upstream converters that produce its source
/// version. Every upstream's reachable versions are merged into the new node
/// with one extra hop, keeping the cheapest route per version. Once all
/// converters are registered, [`ChainBuilder::build`] freezes the graph into a
/// [`ChainResolver`].
pub struct ChainBuilder<F: VersionedModel> {
    nodes: Vec<ChainNode<F>>,
}

impl<F: VersionedModel> Default for ChainBuilder<F> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<F: VersionedModel> ChainBuilder<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `converter` with its initial upstream chains.
    ///
    /// Every upstream must target this converter's source version, otherwise
    /// nothing is registered and [`UpgradeError::IncompatibleChain`] names the
    /// first offender. Upstreams are merged in the given order, which decides
    /// ties between equally short routes.
    pub fn chain(&mut self, converter: Converter<F>, upstream: &[ChainId]) -> UpgradeResult<ChainId> {
        for &up in upstream {
            self.check_slot(converter.source(), up)?;
        }

        let id = ChainId::from(self.nodes.len());
        debug!(
            "ChainBuilder: Registering {} as {id} ({} upstream)",
            converter.name(),
            upstream.len()
        );
        self.nodes.push(ChainNode::new(converter));

        for &up in upstream {
            self.merge(id, up);
        }

        Ok(id)
    }

    /// Wires one more upstream chain into an already registered chain.
    ///
    /// Follows the same rules as the upstreams given to
    /// [`ChainBuilder::chain`]: existing routes win ties, strictly shorter
    /// routes replace them. Adding the same upstream twice changes nothing.
    pub fn add(&mut self, chain: ChainId, upstream: ChainId) -> UpgradeResult<()> {
        let source = self.node(chain)?.converter().source();
        self.check_slot(source, upstream)?;
        self.merge(chain, upstream);
        Ok(())
    }

    pub fn node(&self, chain: ChainId) -> UpgradeResult<&ChainNode<F>> {
        self.nodes
            .get(chain.index())
            .ok_or_else(|| UpgradeError::InvalidArgument(format!("unknown chain {chain}")))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freezes the graph. No chain can be added afterwards.
    pub fn build(self) -> ChainResolver<F> {
        debug!("ChainBuilder: Frozen with {} chains", self.nodes.len());
        ChainResolver::new(self.nodes)
    }

    fn check_slot(&self, source: F::Version, upstream: ChainId) -> UpgradeResult<()> {
        let up = self.node(upstream)?.converter();
        if up.target() != source {
            return Err(UpgradeError::IncompatibleChain {
                converter: up.name().to_string(),
                expected: source.name().to_string(),
                found: up.target().name().to_string(),
            });
        }
        Ok(())
    }

    fn merge(&mut self, chain: ChainId, upstream: ChainId) {
        let incoming = self.nodes[upstream.index()].hop_table();
        let changed = merge_routes(self.nodes[chain.index()].table_mut(), incoming, upstream);
        debug!("ChainBuilder: Merged {upstream} into {chain} ({changed} routes updated)");
    }
}
