//! Portal registry for OP Stack chains.
//!
//! Each L2 chain maps to the ordered list of portal contracts deployed for
//! it on L1. Portals are upgraded over time; the version determines the
//! finalize call shape, so a chain keeps its historical entries around and
//! callers may pin an older one by address.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Portal protocol generation.
///
/// Drives the shape of the finalize call; adding a future generation means
/// adding a variant here and a match arm in the call builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalVersion {
    /// Pre-fault-proof portal: two-step prove/finalize, proofs keyed by
    /// withdrawal hash only.
    Legacy,
    /// Fault-proof portal: proofs keyed by (hash, submitter), supports
    /// finalizing on behalf of a third-party proof submitter.
    FaultProof,
}

/// A deployed portal contract on L1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalDescriptor {
    /// Portal contract address on the settlement chain
    pub address: Address,
    /// Protocol generation of the deployed contract
    pub version: PortalVersion,
}

impl PortalDescriptor {
    pub const fn new(address: Address, version: PortalVersion) -> Self {
        Self { address, version }
    }
}

/// Portal configuration for one L2 chain.
///
/// `portals` is ordered oldest first; the last entry is the chain's current
/// portal and the resolver's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// L2 chain ID
    pub chain_id: u64,
    /// Deployed portals, oldest first
    pub portals: Vec<PortalDescriptor>,
}

impl ChainConfig {
    pub const fn new(chain_id: u64, portals: Vec<PortalDescriptor>) -> Self {
        Self { chain_id, portals }
    }

    /// The chain's current portal, if any is registered.
    pub fn current_portal(&self) -> Option<&PortalDescriptor> {
        self.portals.last()
    }

    /// Look up a registered portal by address.
    pub fn portal_by_address(&self, address: Address) -> Option<&PortalDescriptor> {
        self.portals.iter().find(|p| p.address == address)
    }

    /// OP Mainnet configuration.
    ///
    /// The portal proxy was upgraded in place to OptimismPortal2 with the
    /// fault-proof launch.
    pub fn optimism() -> Self {
        Self {
            chain_id: 10,
            // https://etherscan.io/address/0xbEb5Fc579115071764c7423A4f12eDde41f106Ed
            portals: vec![PortalDescriptor::new(
                address!("0xbEb5Fc579115071764c7423A4f12eDde41f106Ed"),
                PortalVersion::FaultProof,
            )],
        }
    }

    /// OP Sepolia configuration.
    pub fn optimism_sepolia() -> Self {
        Self {
            chain_id: 11155420,
            // https://sepolia.etherscan.io/address/0x16Fc5058F25648194471939df75CF27A2fdC48BC
            portals: vec![PortalDescriptor::new(
                address!("0x16Fc5058F25648194471939df75CF27A2fdC48BC"),
                PortalVersion::FaultProof,
            )],
        }
    }

    /// Base Mainnet configuration.
    pub fn base() -> Self {
        Self {
            chain_id: 8453,
            // https://etherscan.io/address/0x49048044D57e1C92A77f79988d21Fa8fAF74E97e
            portals: vec![PortalDescriptor::new(
                address!("0x49048044D57e1C92A77f79988d21Fa8fAF74E97e"),
                PortalVersion::FaultProof,
            )],
        }
    }

    /// Unichain Mainnet configuration.
    pub fn unichain() -> Self {
        Self {
            chain_id: 130,
            // https://etherscan.io/address/0x0bd48f6B86a26D3a217d0Fa6FfE2B491B956A7a2
            portals: vec![PortalDescriptor::new(
                address!("0x0bd48f6B86a26D3a217d0Fa6FfE2B491B956A7a2"),
                PortalVersion::FaultProof,
            )],
        }
    }
}

/// Registry of portal configurations keyed by L2 chain ID.
///
/// A plain value passed into call sites; holds no process-wide state so
/// tests can run against synthetic registries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    chains: BTreeMap<u64, ChainConfig>,
}

impl Registry {
    /// Empty registry.
    pub const fn new() -> Self {
        Self {
            chains: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with the known mainnet and testnet chains.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for chain in [
            ChainConfig::optimism(),
            ChainConfig::optimism_sepolia(),
            ChainConfig::base(),
            ChainConfig::unichain(),
        ] {
            registry.insert(chain);
        }
        registry
    }

    /// Register (or replace) a chain configuration.
    pub fn insert(&mut self, chain: ChainConfig) {
        self.chains.insert(chain.chain_id, chain);
    }

    /// Portal list for a chain, oldest first.
    pub fn portals_for(&self, chain_id: u64) -> Option<&[PortalDescriptor]> {
        self.chains.get(&chain_id).map(|c| c.portals.as_slice())
    }

    /// Full configuration for a chain.
    pub fn chain(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.get(&chain_id)
    }
}
