use alloy_consensus::TxEnvelope;
use alloy_primitives::B256;
use alloy_rpc_types_engine::{
    CancunPayloadFields, ExecutionPayload, ExecutionPayloadSidecar, PayloadError,
};
use serde::{Deserialize, Serialize};

/// Canonical execution block handed to the rest of the node.
pub type Block = alloy_consensus::Block<TxEnvelope>;

/// Full-block envelope returned by builders speaking the direct retrieval protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPayloadResponse {
    pub version: String,
    pub data: ExecutionPayload,
}

impl ExecutionPayloadResponse {
    /// See [`to_block_with_beacon_root`].
    pub fn into_block(self, parent_beacon_block_root: Option<B256>) -> Result<Block, PayloadError> {
        to_block_with_beacon_root(self.data, parent_beacon_block_root)
    }
}

/// Materializes a pre-Cancun (V1 or V2) `payload` as a [`Block`].
///
/// Fails if any transaction does not decode, the extra data is too long, the base
/// fee is out of range, or the sealed header does not hash to the payload's
/// `block_hash`.
pub fn to_block(payload: ExecutionPayload) -> Result<Block, PayloadError> {
    to_block_with_beacon_root(payload, None)
}

/// Materializes `payload` as a [`Block`].
///
/// A V3 header commits to the parent beacon block root, which is not part of the
/// payload, so it must be supplied for V3 and omitted for V1 and V2.
pub fn to_block_with_beacon_root(
    payload: ExecutionPayload,
    parent_beacon_block_root: Option<B256>,
) -> Result<Block, PayloadError> {
    let sidecar = match (&payload, parent_beacon_block_root) {
        (ExecutionPayload::V3(_), Some(root)) => {
            ExecutionPayloadSidecar::v3(CancunPayloadFields::new(root, vec![]))
        }
        (ExecutionPayload::V3(_), None) => return Err(PayloadError::PostCancunWithoutCancunFields),
        (_, Some(_)) => return Err(PayloadError::PreCancunWithCancunFields),
        (_, None) => ExecutionPayloadSidecar::none(),
    };

    let expected_hash = payload.block_hash();
    let block = payload.try_into_block_with_sidecar::<TxEnvelope>(&sidecar)?;

    let computed_hash = block.header.hash_slow();
    if computed_hash != expected_hash {
        return Err(PayloadError::BlockHash { execution: computed_hash, consensus: expected_hash })
    }
    Ok(block)
}
