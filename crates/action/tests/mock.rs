//! Shared fixtures for finalization tests.
//!
//! `MockTransport` records every estimate/send request, so tests can assert
//! not just outcomes but which round trips happened at all.

#![allow(dead_code)]

use alloy_primitives::{address, b256, Address, Bytes, TxHash, B256, U256};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{Revert, SolError};
use client::{Transport, TransportError};
use config::{ChainConfig, PortalDescriptor, PortalVersion};
use std::sync::Mutex;
use withdrawal::{hash::compute_withdrawal_hash, types::Withdrawal};

pub const L1_CHAIN_ID: u64 = 1;
pub const DEFAULT_GAS_ESTIMATE: u64 = 352_190;

pub const ACCOUNT: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
pub const PROOF_SUBMITTER: Address = address!("d15f47c16bd277ff2dee6a0bd4e418165231cb69");
pub const CURRENT_PORTAL: Address = address!("beb5fc579115071764c7423a4f12edde41f106ed");
pub const OLD_PORTAL: Address = address!("28e4f3a7f651294b9564800b2d01f35189a5bfbe");

pub const MOCK_TX_HASH: TxHash =
    b256!("9b1dfe7c93f38bdea2de9c2b0a97a55394cb363eec6f4a34102a8aadb3deab29");

pub const FINALIZE_SELECTOR: [u8; 4] = [0x8c, 0x31, 0x52, 0xe9];

pub enum EstimateOutcome {
    Gas(u64),
    Revert(&'static str),
    Rpc(&'static str),
}

pub enum SendOutcome {
    Hash(TxHash),
    Revert(&'static str),
    Rpc(&'static str),
}

pub struct MockTransport {
    chain_id: u64,
    estimate_outcome: EstimateOutcome,
    send_outcome: SendOutcome,
    pub estimate_requests: Mutex<Vec<TransactionRequest>>,
    pub send_requests: Mutex<Vec<TransactionRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_chain(L1_CHAIN_ID)
    }

    pub fn with_chain(chain_id: u64) -> Self {
        Self {
            chain_id,
            estimate_outcome: EstimateOutcome::Gas(DEFAULT_GAS_ESTIMATE),
            send_outcome: SendOutcome::Hash(MOCK_TX_HASH),
            estimate_requests: Mutex::new(Vec::new()),
            send_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn estimate_outcome(mut self, outcome: EstimateOutcome) -> Self {
        self.estimate_outcome = outcome;
        self
    }

    pub fn send_outcome(mut self, outcome: SendOutcome) -> Self {
        self.send_outcome = outcome;
        self
    }

    pub fn estimate_count(&self) -> usize {
        self.estimate_requests.lock().unwrap().len()
    }

    pub fn send_count(&self) -> usize {
        self.send_requests.lock().unwrap().len()
    }

    pub fn sent(&self) -> TransactionRequest {
        self.send_requests.lock().unwrap().last().cloned().unwrap()
    }

    pub fn estimated(&self) -> TransactionRequest {
        self.estimate_requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap()
    }
}

impl Transport for MockTransport {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, TransportError> {
        self.estimate_requests.lock().unwrap().push(tx);
        match &self.estimate_outcome {
            EstimateOutcome::Gas(gas) => Ok(*gas),
            EstimateOutcome::Revert(reason) => Err(revert_error(reason)),
            EstimateOutcome::Rpc(message) => Err(TransportError::Rpc((*message).to_string())),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, TransportError> {
        self.send_requests.lock().unwrap().push(tx);
        match &self.send_outcome {
            SendOutcome::Hash(hash) => Ok(*hash),
            SendOutcome::Revert(reason) => Err(revert_error(reason)),
            SendOutcome::Rpc(message) => Err(TransportError::Rpc((*message).to_string())),
        }
    }
}

pub fn revert_error(reason: &str) -> TransportError {
    TransportError::Reverted {
        reason: reason.to_string(),
        data: Revert {
            reason: reason.to_string(),
        }
        .abi_encode()
        .into(),
    }
}

/// Chain whose only portal predates fault proofs.
pub fn legacy_chain() -> ChainConfig {
    ChainConfig::new(
        10,
        vec![PortalDescriptor::new(CURRENT_PORTAL, PortalVersion::Legacy)],
    )
}

/// Chain whose only portal is the fault-proof generation.
pub fn fault_proof_chain() -> ChainConfig {
    ChainConfig::new(
        10,
        vec![PortalDescriptor::new(
            CURRENT_PORTAL,
            PortalVersion::FaultProof,
        )],
    )
}

/// Chain that kept its retired legacy portal registered alongside the
/// current fault-proof one.
pub fn upgraded_chain() -> ChainConfig {
    ChainConfig::new(
        10,
        vec![
            PortalDescriptor::new(OLD_PORTAL, PortalVersion::Legacy),
            PortalDescriptor::new(CURRENT_PORTAL, PortalVersion::FaultProof),
        ],
    )
}

pub fn pending_withdrawal() -> Withdrawal {
    let mut withdrawal = Withdrawal {
        nonce: U256::from(4242),
        sender: address!("4200000000000000000000000000000000000007"),
        target: address!("25ace71c97b33cc4729cf772ae268934f7ab5fa1"),
        value: U256::from(88196830953025947900u128),
        gas_limit: U256::from(287624u64),
        data: Bytes::from(vec![0xd7, 0x64, 0xad, 0x0b]),
        withdrawal_hash: B256::ZERO,
    };
    withdrawal.withdrawal_hash = compute_withdrawal_hash(&withdrawal);
    withdrawal
}

pub fn input_bytes(tx: &TransactionRequest) -> Bytes {
    tx.input.input().cloned().expect("request has calldata")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
