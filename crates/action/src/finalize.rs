//! Finalize withdrawal orchestration.
//!
//! Straight-line pipeline: resolve the portal, render the call, price it
//! unless the caller settled gas themselves, submit, return the transaction
//! hash. Confirmation is the caller's concern.

use crate::{call::build_finalize_call, gas::estimate_finalize_gas, FinalizeError};
use alloy_primitives::{Address, TxHash, TxKind};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use client::Transport;
use config::{resolve, ChainConfig};
use tracing::info;
use withdrawal::types::Withdrawal;

/// Gas limit policy for the finalize transaction.
///
/// Tri-state on purpose: "estimate for me", "let the transport fill its own
/// default", and "use exactly this" are three different requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GasLimit {
    /// Estimate via the transport before submitting.
    #[default]
    Estimate,
    /// Skip estimation entirely; the transport supplies its default.
    TransportDefault,
    /// Use exactly this limit; skips estimation.
    Exact(u64),
}

/// Signing chain policy for the finalize transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningChain {
    /// Pin the transport's configured chain.
    #[default]
    ClientDefault,
    /// Perform no chain-match validation; leave the chain to the transport.
    Unchecked,
    /// Require this chain; must match the transport's configured chain.
    Id(u64),
}

/// Options for [`finalize_withdrawal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalizeOptions {
    pub chain: SigningChain,
    pub gas: GasLimit,
    /// Pin a specific registered portal instead of the chain's current one
    pub portal_address: Option<Address>,
    /// Finalize on behalf of a third-party proof submitter (fault-proof
    /// portals only)
    pub proof_submitter: Option<Address>,
}

/// Options for [`estimate_finalize_withdrawal_gas`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GasEstimateOptions {
    pub portal_address: Option<Address>,
    pub proof_submitter: Option<Address>,
}

/// Estimate the gas of finalizing `withdrawal` without submitting anything.
pub async fn estimate_finalize_withdrawal_gas<T>(
    transport: &T,
    account: Address,
    withdrawal: &Withdrawal,
    target_chain: &ChainConfig,
    options: GasEstimateOptions,
) -> Result<u64, FinalizeError>
where
    T: Transport,
{
    let portal = resolve(target_chain, options.portal_address)?;
    let call = build_finalize_call(withdrawal, &portal, options.proof_submitter)?;
    estimate_finalize_gas(transport, &call, account).await
}

/// Finalize a proven withdrawal on the settlement chain.
///
/// Returns the submitted transaction hash; does not wait for inclusion.
/// An estimation failure aborts the pipeline before submission: a call
/// already known to revert is never sent with a fallback gas figure.
pub async fn finalize_withdrawal<T>(
    transport: &T,
    account: Address,
    withdrawal: &Withdrawal,
    target_chain: &ChainConfig,
    options: FinalizeOptions,
) -> Result<TxHash, FinalizeError>
where
    T: Transport,
{
    let portal = resolve(target_chain, options.portal_address)?;
    let call = build_finalize_call(withdrawal, &portal, options.proof_submitter)?;

    // Local check, before any round trip
    let chain_id = match options.chain {
        SigningChain::ClientDefault => Some(transport.chain_id()),
        SigningChain::Unchecked => None,
        SigningChain::Id(requested) => {
            let configured = transport.chain_id();
            if requested != configured {
                return Err(FinalizeError::ChainMismatch {
                    requested,
                    configured,
                });
            }
            Some(requested)
        }
    };

    let gas = match options.gas {
        GasLimit::Exact(gas) => Some(gas),
        GasLimit::TransportDefault => None,
        GasLimit::Estimate => Some(estimate_finalize_gas(transport, &call, account).await?),
    };

    info!(
        withdrawal_hash = %withdrawal.withdrawal_hash,
        portal = %call.portal,
        portal_version = ?portal.version,
        gas = ?gas,
        "Finalizing withdrawal"
    );

    let tx = TransactionRequest {
        from: Some(account),
        to: Some(TxKind::Call(call.portal)),
        input: TransactionInput::new(call.input),
        gas,
        chain_id,
        ..Default::default()
    };

    let tx_hash = transport
        .send_transaction(tx)
        .await
        .map_err(FinalizeError::SubmissionFailed)?;

    info!(
        tx_hash = %tx_hash,
        withdrawal_hash = %withdrawal.withdrawal_hash,
        "Finalize transaction submitted"
    );

    Ok(tx_hash)
}
