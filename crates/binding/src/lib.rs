//! Contract bindings for the OP Stack withdrawal portals.
//!
//! Two portal generations coexist on L1:
//! - `IOptimismPortal`: the pre-fault-proof portal (two-step prove/finalize)
//! - `IOptimismPortal2`: the fault-proof portal, which keys proofs by
//!   submitter and accepts third-party proof submitters at finalization
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod portal;
