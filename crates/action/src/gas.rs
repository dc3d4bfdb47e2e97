//! Gas estimation for finalize calls.
//!
//! The portal forwards a gas-capped low-level call to the withdrawal's
//! target, so a failed estimate can carry a revert from either layer. The
//! estimator treats that boundary as opaque: it relays the transport's
//! failure with the revert payload decoded one level and the exact call
//! attached, without re-simulating anything.

use crate::{call::FinalizeCall, FinalizeError};
use alloy_primitives::{Address, TxKind};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use client::Transport;

/// Price a rendered finalize call via the transport's `eth_estimateGas`.
///
/// Never retries; a revert here usually means the call is structurally
/// invalid (unproven withdrawal, challenge window open, insufficient
/// forwarded gas), not a transient fault.
pub async fn estimate_finalize_gas<T>(
    transport: &T,
    call: &FinalizeCall,
    from: Address,
) -> Result<u64, FinalizeError>
where
    T: Transport,
{
    let tx = TransactionRequest {
        from: Some(from),
        to: Some(TxKind::Call(call.portal)),
        input: TransactionInput::new(call.input.clone()),
        ..Default::default()
    };

    transport.estimate_gas(tx).await.map_err(|source| {
        let reason = source
            .revert_reason()
            .map(str::to_string)
            .unwrap_or_else(|| source.to_string());

        FinalizeError::EstimationFailed {
            portal: call.portal,
            from,
            calldata: call.input.clone(),
            reason,
            source,
        }
    })
}
