use crate::types::{Withdrawal, WithdrawalHash};
use alloy_primitives::keccak256;
use alloy_sol_types::SolValue;

/// Canonical withdrawal hash, matching Solidity's `Hashing.hashWithdrawal`:
/// `keccak256(abi.encode(nonce, sender, target, value, gasLimit, data))`.
///
/// The fields are encoded as a bare sequence (no wrapper tuple offset),
/// which is what `abi.encode` of six scalar arguments produces.
pub fn compute_withdrawal_hash(withdrawal: &Withdrawal) -> WithdrawalHash {
    let encoded = (
        &withdrawal.nonce,
        &withdrawal.sender,
        &withdrawal.target,
        &withdrawal.value,
        &withdrawal.gas_limit,
        &withdrawal.data,
    )
        .abi_encode_sequence();

    keccak256(encoded)
}
