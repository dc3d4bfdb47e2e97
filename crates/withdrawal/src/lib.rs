//! Withdrawal records and portal state.
//!
//! This crate provides:
//! - The immutable [`types::Withdrawal`] record describing a pending
//!   L2→L1 withdrawal
//! - Canonical withdrawal hashing (the portal's proof-storage key)
//! - Read-only portal state queries (proven / finalized / challenge window)

pub mod hash;
pub mod state;
pub mod types;
