//! Structured error taxonomy for the RPC, auth, and contract-orchestration
//! layers (`rpc`, `auth`, `assembled_transaction`, `contract_client`).
//!
//! Leaf codecs (`strkey`-backed types, XDR builders, operation constructors)
//! keep their established `Result<_, String>` signatures — see
//! `SPEC_FULL.md` for why that split is intentional rather than an
//! oversight.
use crate::contract_spec::ContractSpecError;

/// One kind per §7 error category, carrying whatever structured context the
/// spec calls for.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cryptographic operation failed: {0}")]
    Crypto(String),

    #[error("xdr error: {0}")]
    Xdr(#[from] crate::xdr::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("rpc error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error(transparent)]
    ContractSpec(#[from] ContractSpecError),

    #[error("transaction has not yet been simulated")]
    NotYetSimulated,

    #[error("simulation failed: {0}")]
    SimulationFailed(String),

    #[error("restoring expired ledger entries failed: {0}")]
    RestorationFailure(String),

    #[error("read calls need no signature (pass force=true to sign anyway)")]
    NoSignatureNeeded,

    #[error("transaction needs signatures from: {addresses:?}")]
    NeedsMoreSignatures { addresses: Vec<String> },

    #[error("simulation found expired ledger state that must be restored before signing")]
    ExpiredState,

    #[error("sendTransaction returned unexpected status: {status}")]
    SendTransactionFailed { status: String },

    #[error("transaction {hash} is still pending after the submit timeout")]
    TransactionStillPending { hash: String },

    #[error("transaction failed on-chain with result code: {result_code}")]
    TransactionFailed { result_code: String },
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn crypto(msg: impl Into<String>) -> Self {
        Error::Crypto(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
