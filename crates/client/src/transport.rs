//! The transport boundary.
//!
//! [`Transport`] is the narrow interface the finalization pipeline consumes:
//! one gas-estimation round trip and one submission round trip, plus the
//! locally-known signing chain id. [`RpcTransport`] backs it with an alloy
//! provider and a [`SignerFn`].

use crate::SignerFn;
use alloy_json_rpc::ErrorPayload;
use alloy_primitives::{hex, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{Revert, SolError};
use alloy_transport::TransportError as RpcError;
use std::future::Future;
use thiserror::Error;

/// Failure of a single RPC round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The simulated or submitted call reverted. `reason` is the revert
    /// payload decoded one level (`Error(string)`), or the raw data as hex
    /// when it does not match that shape.
    #[error("execution reverted: {reason}")]
    Reverted { reason: String, data: Bytes },

    /// Signing failed before anything was broadcast.
    #[error("signing failed: {0}")]
    Signer(String),

    /// Any other RPC failure (network, nonce, malformed request).
    #[error("rpc error: {0}")]
    Rpc(String),
}

impl TransportError {
    /// The decoded revert reason, if this failure carries one.
    pub fn revert_reason(&self) -> Option<&str> {
        match self {
            Self::Reverted { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Narrow RPC interface consumed by the finalization pipeline.
///
/// Implementations own retry, timeout, and cancellation policy; callers get
/// exactly one attempt per invocation.
pub trait Transport: Send + Sync {
    /// Chain id the transport's signer is configured for. Known locally;
    /// must not cost a network round trip.
    fn chain_id(&self) -> u64;

    /// `eth_estimateGas` against the given request.
    fn estimate_gas(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<u64, TransportError>> + Send;

    /// Sign and broadcast, returning the transaction hash without waiting
    /// for inclusion.
    fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<TxHash, TransportError>> + Send;
}

/// Provider-backed [`Transport`].
#[derive(Clone)]
pub struct RpcTransport<P> {
    provider: P,
    signer: SignerFn,
    chain_id: u64,
}

impl<P> RpcTransport<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, signer: SignerFn, chain_id: u64) -> Self {
        Self {
            provider,
            signer,
            chain_id,
        }
    }
}

impl<P> Transport for RpcTransport<P>
where
    P: Provider + Clone,
{
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, TransportError> {
        self.provider.estimate_gas(tx).await.map_err(from_rpc_error)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, TransportError> {
        let filled = fill_transaction(tx, &self.provider, self.chain_id).await?;

        let signed = (self.signer)(filled)
            .await
            .map_err(|e| TransportError::Signer(e.to_string()))?;

        let pending = self
            .provider
            .send_raw_transaction(&signed)
            .await
            .map_err(from_rpc_error)?;

        Ok(*pending.tx_hash())
    }
}

/// Fill missing transaction fields using the provider.
///
/// A request arriving without a gas limit keeps it unset until here; the
/// transport supplies its own estimate with a 20% buffer.
pub async fn fill_transaction<P>(
    mut tx: TransactionRequest,
    provider: &P,
    chain_id: u64,
) -> Result<TransactionRequest, TransportError>
where
    P: Provider,
{
    let from = tx
        .from
        .ok_or_else(|| TransportError::Rpc("transaction request has no sender".to_string()))?;

    if tx.chain_id.is_none() {
        tx.chain_id = Some(chain_id);
    }

    if tx.nonce.is_none() {
        let nonce = provider
            .get_transaction_count(from)
            .await
            .map_err(from_rpc_error)?;
        tx.nonce = Some(nonce);
    }

    // Fee parameters before gas estimation, since estimation may need them
    if tx.max_fee_per_gas.is_none() || tx.max_priority_fee_per_gas.is_none() {
        let fee_estimate = provider
            .estimate_eip1559_fees()
            .await
            .map_err(from_rpc_error)?;
        if tx.max_fee_per_gas.is_none() {
            tx.max_fee_per_gas = Some(fee_estimate.max_fee_per_gas);
        }
        if tx.max_priority_fee_per_gas.is_none() {
            tx.max_priority_fee_per_gas = Some(fee_estimate.max_priority_fee_per_gas);
        }
    }

    if tx.gas.is_none() {
        let gas_estimate = provider
            .estimate_gas(tx.clone())
            .await
            .map_err(from_rpc_error)?;
        tx.gas = Some(gas_estimate + gas_estimate / 5);
    }

    Ok(tx)
}

fn from_rpc_error(err: RpcError) -> TransportError {
    match err.as_error_resp() {
        Some(payload) => from_error_payload(payload),
        None => TransportError::Rpc(err.to_string()),
    }
}

fn from_error_payload(payload: &ErrorPayload) -> TransportError {
    if let Some(data) = payload.as_revert_data() {
        let reason = decode_revert_reason(&data)
            .unwrap_or_else(|| format!("0x{}", hex::encode(&data)));
        return TransportError::Reverted { reason, data };
    }
    TransportError::Rpc(payload.message.to_string())
}

/// Decode an `Error(string)` revert payload. Anything else (custom errors,
/// panics, empty data) is left to the caller as raw bytes.
fn decode_revert_reason(data: &[u8]) -> Option<String> {
    Revert::abi_decode(data).ok().map(|revert| revert.reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_string_revert() {
        let data = Revert {
            reason: "SafeCall: Not enough gas".to_string(),
        }
        .abi_encode();

        assert_eq!(
            decode_revert_reason(&data).as_deref(),
            Some("SafeCall: Not enough gas")
        );
    }

    #[test]
    fn test_decode_unknown_payload_yields_none() {
        // Custom error selector, not Error(string)
        assert_eq!(decode_revert_reason(&[0xde, 0xad, 0xbe, 0xef]), None);
        assert_eq!(decode_revert_reason(&[]), None);
    }

    #[test]
    fn test_revert_reason_accessor() {
        let err = TransportError::Reverted {
            reason: "nope".to_string(),
            data: Bytes::new(),
        };
        assert_eq!(err.revert_reason(), Some("nope"));
        assert_eq!(TransportError::Rpc("x".to_string()).revert_reason(), None);
    }
}
