//! Portal resolution.
//!
//! Maps a target chain (plus an optional explicit portal address) to the
//! portal descriptor the finalize call must be built against. Pure and
//! deterministic given the chain's static configuration; performs no I/O.

use crate::registry::{ChainConfig, PortalDescriptor};
use alloy_primitives::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The explicit portal address is not among the chain's registered
    /// portals, so its version (and therefore the call shape) is unknown.
    #[error("portal {address} is not registered for chain {chain_id}")]
    UnknownPortalAddress { address: Address, chain_id: u64 },

    /// The chain configuration has an empty portal list.
    #[error("chain {chain_id} has no registered portal")]
    NoPortalRegistered { chain_id: u64 },
}

/// Resolve the portal to finalize against.
///
/// An explicit address must match one of the chain's registered entries;
/// otherwise the chain's current (last-registered) portal is used.
pub fn resolve(
    chain: &ChainConfig,
    explicit_address: Option<Address>,
) -> Result<PortalDescriptor, ResolveError> {
    match explicit_address {
        Some(address) => chain
            .portal_by_address(address)
            .copied()
            .ok_or(ResolveError::UnknownPortalAddress {
                address,
                chain_id: chain.chain_id,
            }),
        None => chain
            .current_portal()
            .copied()
            .ok_or(ResolveError::NoPortalRegistered {
                chain_id: chain.chain_id,
            }),
    }
}
