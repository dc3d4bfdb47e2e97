use crate::hash::compute_withdrawal_hash;
use alloy_primitives::{Address, Bytes, B256, U256};
use binding::portal::WithdrawalTransaction;

pub type WithdrawalHash = B256;

/// A pending L2→L1 withdrawal.
///
/// Immutable value object; `withdrawal_hash` is the digest the portal keys
/// its proof storage by, derived from the other six fields and supplied by
/// whoever observed the `MessagePassed` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    /// Message-passer nonce, monotonically assigned on L2 and never reused
    pub nonce: U256,
    /// L2-side caller
    pub sender: Address,
    /// L1-side recipient contract or account
    pub target: Address,
    /// Wei to deliver to the target
    pub value: U256,
    /// Gas budget forwarded to the sub-call on L1
    pub gas_limit: U256,
    /// Call payload delivered to the target
    pub data: Bytes,
    /// Canonical identity of this withdrawal
    pub withdrawal_hash: WithdrawalHash,
}

impl Withdrawal {
    /// Render the six-field tuple the portal ABI expects, in fixed order
    /// `(nonce, sender, target, value, gasLimit, data)`.
    pub fn to_transaction(&self) -> WithdrawalTransaction {
        WithdrawalTransaction {
            nonce: self.nonce,
            sender: self.sender,
            target: self.target,
            value: self.value,
            gasLimit: self.gas_limit,
            data: self.data.clone(),
        }
    }

    /// Recompute the canonical hash and compare it to the supplied one.
    pub fn verify_hash(&self) -> bool {
        compute_withdrawal_hash(self) == self.withdrawal_hash
    }
}

/// Lifecycle of a withdrawal as observed on L1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Initiated,
    Proven { timestamp: u64 },
    Finalized,
}
