//! Withdrawal finalization.
//!
//! The pipeline is resolve → build → (estimate) → submit:
//! - [`config::resolve`] picks the portal contract and version
//! - [`call::build_finalize_call`] renders the versioned contract call
//! - [`gas::estimate_finalize_gas`] prices it, surfacing revert detail
//! - [`finalize::finalize_withdrawal`] submits and returns the tx hash
//!
//! Each invocation is a single request/response round trip; there is no
//! resumable state and no internal retry.

pub mod call;
pub mod finalize;
pub mod gas;

pub use call::{build_finalize_call, FinalizeCall};
pub use finalize::{
    estimate_finalize_withdrawal_gas, finalize_withdrawal, FinalizeOptions, GasEstimateOptions,
    GasLimit, SigningChain,
};
pub use gas::estimate_finalize_gas;

use alloy_primitives::{Address, Bytes};
use client::TransportError;
use config::ResolveError;
use thiserror::Error;

/// Failures of the finalization pipeline.
///
/// None of these are retryable from inside the pipeline: resolution and
/// builder errors are caller mistakes, and a revert during estimation
/// usually means the call is structurally invalid on current chain state.
#[derive(Debug, Error)]
pub enum FinalizeError {
    /// Portal resolution failed (unknown explicit address, or no portal
    /// registered for the chain).
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A proof submitter was supplied against a legacy portal, which has no
    /// concept of third-party provers.
    #[error("legacy portal {portal} does not support an external proof submitter")]
    ProofSubmitterUnsupported { portal: Address },

    /// The requested signing chain differs from the transport's configured
    /// chain. Caught locally, before any round trip.
    #[error("signing chain mismatch: requested {requested}, transport is configured for {configured}")]
    ChainMismatch { requested: u64, configured: u64 },

    /// The estimation round trip reverted or errored. Carries the exact
    /// call for diagnosis: the portal forwards a gas-capped sub-call, so the
    /// decoded reason may come from the inner target rather than the portal
    /// itself.
    #[error(
        "eth_estimateGas failed for portal {portal}: {reason} (from {from}, {} calldata bytes)",
        .calldata.len()
    )]
    EstimationFailed {
        portal: Address,
        from: Address,
        calldata: Bytes,
        reason: String,
        #[source]
        source: TransportError,
    },

    /// The send step failed; passed through from the transport unmodified.
    #[error("transaction submission failed: {0}")]
    SubmissionFailed(#[source] TransportError),
}
