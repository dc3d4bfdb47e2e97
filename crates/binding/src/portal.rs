//! OP Stack portal contract bindings.
//!
//! Both portal generations share the `WithdrawalTransaction` tuple and the
//! `finalizeWithdrawalTransaction` entry point (same selector). Only the
//! fault-proof portal exposes the external-proof variant.

use alloy_sol_types::sol;

sol! {
    /// Withdrawal transaction structure (shared across portal versions).
    ///
    /// Field order is fixed by the portal ABI:
    /// `(nonce, sender, target, value, gasLimit, data)`.
    #[derive(Debug)]
    struct WithdrawalTransaction {
        uint256 nonce;
        address sender;
        address target;
        uint256 value;
        uint256 gasLimit;
        bytes data;
    }

    /// OptimismPortal - legacy L1 portal (output-root proofs, no notion of
    /// a third-party proof submitter).
    #[sol(rpc)]
    interface IOptimismPortal {
        /// Emitted when a withdrawal is finalized on L1
        event WithdrawalFinalized(
            bytes32 indexed withdrawalHash,
            bool success
        );

        /// Finalize a proven withdrawal once the challenge window elapsed
        function finalizeWithdrawalTransaction(
            WithdrawalTransaction calldata _tx
        ) external;

        /// Query if a withdrawal has been finalized
        function finalizedWithdrawals(bytes32 withdrawalHash)
            external view returns (bool);
    }

    /// OptimismPortal2 - fault-proof L1 portal
    #[sol(rpc)]
    interface IOptimismPortal2 {
        /// Proven withdrawal data stored on L1
        #[derive(Debug)]
        struct ProvenWithdrawal {
            address disputeGameProxy;
            uint64 timestamp;
        }

        /// Emitted when a withdrawal is proven on L1
        event WithdrawalProven(
            bytes32 indexed withdrawalHash,
            address indexed from,
            address indexed to
        );

        /// Emitted when a withdrawal is finalized on L1
        event WithdrawalFinalized(
            bytes32 indexed withdrawalHash,
            bool success
        );

        /// Finalize a withdrawal proven by the caller
        function finalizeWithdrawalTransaction(
            WithdrawalTransaction calldata _tx
        ) external;

        /// Finalize a withdrawal using a third party's proof
        function finalizeWithdrawalTransactionExternalProof(
            WithdrawalTransaction calldata _tx,
            address _proofSubmitter
        ) external;

        /// Query proven withdrawals by hash and proof submitter
        function provenWithdrawals(bytes32 withdrawalHash, address proofSubmitter)
            external view returns (ProvenWithdrawal memory);

        /// Query if a withdrawal has been finalized
        function finalizedWithdrawals(bytes32 withdrawalHash)
            external view returns (bool);

        /// Get the proof maturity delay (usually 7 days = 604800 seconds)
        function proofMaturityDelaySeconds()
            external view returns (uint256);
    }
}
