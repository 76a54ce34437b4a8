use crate::curve::Error as CurveError;
use alloy_rpc_types_engine::PayloadError;
use ethereum_consensus::crypto::Error as CryptoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid endpoint `{0}`: hostname must include port, separated by one colon, like example.com:3500")]
    InvalidEndpoint(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response from builder: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("builder accepted the request but returned no payload")]
    MissingPayload,
    #[error("builder rejected request with code {code}: {message}")]
    BuilderRejected { code: i64, message: String },
    #[error("could not convert execution payload to block: {0}")]
    PayloadConversionFailed(#[from] PayloadError),
    #[error("could not serialize request: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Curve(#[from] CurveError),
}
