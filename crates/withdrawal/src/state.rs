//! Read-only portal state.
//!
//! Whether a finalize attempt can succeed depends on downstream contract
//! state: has the withdrawal been proven, and has the proof maturity window
//! elapsed? These queries let callers answer that before spending a
//! transaction. Fault-proof portals only, since that generation keys proofs
//! by (hash, submitter).

use crate::types::{WithdrawalHash, WithdrawalStatus};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::BlockNumberOrTag;
use binding::portal::IOptimismPortal2;
use tracing::debug;

/// Read-only view of a fault-proof portal's withdrawal state.
pub struct PortalStateReader<P> {
    provider: P,
    portal_address: Address,
}

impl<P> PortalStateReader<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, portal_address: Address) -> Self {
        Self {
            provider,
            portal_address,
        }
    }

    /// Current lifecycle stage of a withdrawal.
    pub async fn status(
        &self,
        hash: WithdrawalHash,
        proof_submitter: Address,
    ) -> eyre::Result<WithdrawalStatus> {
        if self.is_finalized(hash).await? {
            return Ok(WithdrawalStatus::Finalized);
        }

        if let Some(timestamp) = self.proven_at(hash, proof_submitter).await? {
            return Ok(WithdrawalStatus::Proven { timestamp });
        }

        Ok(WithdrawalStatus::Initiated)
    }

    pub async fn is_finalized(&self, hash: WithdrawalHash) -> eyre::Result<bool> {
        let portal = IOptimismPortal2::new(self.portal_address, &self.provider);
        let finalized = portal.finalizedWithdrawals(hash).call().await?;
        Ok(finalized)
    }

    /// Proof timestamp for (hash, submitter), or `None` when unproven.
    pub async fn proven_at(
        &self,
        hash: WithdrawalHash,
        proof_submitter: Address,
    ) -> eyre::Result<Option<u64>> {
        let portal = IOptimismPortal2::new(self.portal_address, &self.provider);
        let proven = portal
            .provenWithdrawals(hash, proof_submitter)
            .call()
            .await?;

        // Unproven entries read back as the zero struct
        if proven.timestamp == 0 {
            Ok(None)
        } else {
            Ok(Some(proven.timestamp))
        }
    }

    /// The portal's proof maturity delay in seconds (usually 7 days).
    pub async fn proof_maturity_delay(&self) -> eyre::Result<u64> {
        let portal = IOptimismPortal2::new(self.portal_address, &self.provider);
        let delay: U256 = portal.proofMaturityDelaySeconds().call().await?;
        Ok(delay.try_into().unwrap_or(u64::MAX))
    }

    /// True when the withdrawal is proven, unfinalized, and past the proof
    /// maturity window relative to the latest L1 block timestamp.
    pub async fn is_finalizable(
        &self,
        hash: WithdrawalHash,
        proof_submitter: Address,
    ) -> eyre::Result<bool> {
        match self.status(hash, proof_submitter).await? {
            WithdrawalStatus::Finalized | WithdrawalStatus::Initiated => Ok(false),
            WithdrawalStatus::Proven { timestamp } => {
                let delay = self.proof_maturity_delay().await?;
                let now = self.latest_timestamp().await?;

                debug!(
                    withdrawal_hash = %hash,
                    proven_at = timestamp,
                    maturity_delay = delay,
                    now,
                    "Checked withdrawal maturity"
                );

                Ok(now >= timestamp.saturating_add(delay))
            }
        }
    }

    async fn latest_timestamp(&self) -> eyre::Result<u64> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?
            .ok_or_else(|| eyre::eyre!("Failed to get latest block"))?;
        Ok(block.header.timestamp)
    }
}
