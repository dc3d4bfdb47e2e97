//! Finalize call construction.
//!
//! Pure data transformation from a withdrawal + portal descriptor to the
//! exact contract call. The portal version drives the call shape through an
//! exhaustive match; a future portal generation is a new `PortalVersion`
//! variant plus one arm here.

use crate::FinalizeError;
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use binding::portal::{IOptimismPortal, IOptimismPortal2};
use config::{PortalDescriptor, PortalVersion};
use withdrawal::types::Withdrawal;

/// A rendered finalize invocation: target portal plus ABI-encoded input
/// (selector in the first four bytes). Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeCall {
    /// Portal contract to call
    pub portal: Address,
    /// Selector + encoded arguments
    pub input: Bytes,
}

impl FinalizeCall {
    /// The four-byte function selector of the rendered call.
    pub fn selector(&self) -> [u8; 4] {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&self.input[..4]);
        selector
    }
}

/// Render the finalize call for a withdrawal against a specific portal.
///
/// Legacy portals take the bare withdrawal tuple and reject the notion of a
/// proof submitter. Fault-proof portals additionally accept
/// `finalizeWithdrawalTransactionExternalProof(tuple, submitter)` to
/// finalize on behalf of a third-party prover; without a submitter the
/// on-chain default (an external-contract semantic) applies.
pub fn build_finalize_call(
    withdrawal: &Withdrawal,
    portal: &PortalDescriptor,
    proof_submitter: Option<Address>,
) -> Result<FinalizeCall, FinalizeError> {
    let tx = withdrawal.to_transaction();

    let input = match portal.version {
        PortalVersion::Legacy => {
            if proof_submitter.is_some() {
                return Err(FinalizeError::ProofSubmitterUnsupported {
                    portal: portal.address,
                });
            }
            IOptimismPortal::finalizeWithdrawalTransactionCall { _tx: tx }.abi_encode()
        }
        PortalVersion::FaultProof => match proof_submitter {
            Some(submitter) => IOptimismPortal2::finalizeWithdrawalTransactionExternalProofCall {
                _tx: tx,
                _proofSubmitter: submitter,
            }
            .abi_encode(),
            None => IOptimismPortal2::finalizeWithdrawalTransactionCall { _tx: tx }.abi_encode(),
        },
    };

    Ok(FinalizeCall {
        portal: portal.address,
        input: input.into(),
    })
}
