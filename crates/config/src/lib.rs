//! Chain configuration for withdrawal finalization.
//!
//! This crate provides:
//! - Portal contract descriptors (address + protocol version)
//! - Per-chain portal registries with mainnet/testnet presets
//! - The portal resolver (address override vs. current default)

pub mod registry;
pub mod resolver;

pub use registry::{ChainConfig, PortalDescriptor, PortalVersion, Registry};
pub use resolver::{resolve, ResolveError};
