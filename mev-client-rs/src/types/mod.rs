mod execution_payload;
mod validator_registration;

pub use execution_payload::{to_block, to_block_with_beacon_root, Block, ExecutionPayloadResponse};
pub use validator_registration::{SignedValidatorRegistration, ValidatorRegistration};

pub use alloy_primitives::{Address as ExecutionAddress, B256 as Hash32};
pub use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature, Slot};

/// Status envelope returned by builders speaking the header-negotiation protocol.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetHeaderResponse {
    /// Builder-defined status; not restricted to the HTTP status range.
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl GetHeaderResponse {
    pub const SUCCESS: i64 = 200;

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS
    }
}

/// Error body sent alongside a non-success HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: i64,
    pub message: String,
}
