mod client;

use crate::{
    error::Error,
    types::{ErrorMessage, ExecutionPayloadResponse, GetHeaderResponse},
};
use reqwest::StatusCode;

pub use client::{block_path, header_path, Client, REGISTER_VALIDATORS_PATH, STATUS_PATH};

/// Outcome of one exchange with a builder, independent of which protocol shape
/// the builder speaks.
#[derive(Debug)]
pub enum BuilderResponse {
    Accepted,
    Rejected { code: i64, message: String },
    Payload(Box<ExecutionPayloadResponse>),
}

impl BuilderResponse {
    /// Status-only exchange: any 2xx status is acceptance.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        if status.is_success() {
            Self::Accepted
        } else {
            Self::rejected(status, body)
        }
    }

    /// Header-negotiation exchange: a `{code, message}` envelope.
    pub fn from_header_envelope(status: StatusCode, body: &[u8]) -> Result<Self, Error> {
        if !status.is_success() {
            return Ok(Self::rejected(status, body))
        }
        let envelope: GetHeaderResponse =
            serde_json::from_slice(body).map_err(Error::MalformedResponse)?;
        if envelope.is_success() {
            Ok(Self::Accepted)
        } else {
            Ok(Self::Rejected { code: envelope.code, message: envelope.message })
        }
    }

    /// Direct retrieval exchange: a `{version, data}` envelope.
    pub fn from_payload_envelope(status: StatusCode, body: &[u8]) -> Result<Self, Error> {
        if !status.is_success() {
            return Ok(Self::rejected(status, body))
        }
        let response: ExecutionPayloadResponse =
            serde_json::from_slice(body).map_err(Error::MalformedResponse)?;
        Ok(Self::Payload(Box::new(response)))
    }

    fn rejected(status: StatusCode, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorMessage>(body) {
            Ok(error) => error.message,
            Err(_) => String::from_utf8_lossy(body).trim().to_string(),
        };
        Self::Rejected { code: status.as_u16().into(), message }
    }

    pub fn into_accepted(self) -> Result<(), Error> {
        match self {
            Self::Accepted | Self::Payload(_) => Ok(()),
            Self::Rejected { code, message } => Err(Error::BuilderRejected { code, message }),
        }
    }

    pub fn into_payload(self) -> Result<ExecutionPayloadResponse, Error> {
        match self {
            Self::Payload(response) => Ok(*response),
            Self::Accepted => Err(Error::MissingPayload),
            Self::Rejected { code, message } => Err(Error::BuilderRejected { code, message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only() {
        assert!(matches!(BuilderResponse::from_status(StatusCode::OK, b""), BuilderResponse::Accepted));

        let response = BuilderResponse::from_status(
            StatusCode::BAD_REQUEST,
            br#"{"code":400,"message":"invalid signature"}"#,
        );
        let err = response.into_accepted().unwrap_err();
        assert!(matches!(
            err,
            Error::BuilderRejected { code: 400, ref message } if message == "invalid signature"
        ));
    }

    #[test]
    fn test_plain_text_rejection() {
        let response = BuilderResponse::from_status(StatusCode::SERVICE_UNAVAILABLE, b"overloaded\n");
        assert!(matches!(
            response,
            BuilderResponse::Rejected { code: 503, ref message } if message == "overloaded"
        ));
    }

    #[test]
    fn test_header_envelope() {
        let response =
            BuilderResponse::from_header_envelope(StatusCode::OK, br#"{"code":200,"message":"ok"}"#)
                .unwrap();
        response.into_accepted().unwrap();

        let response = BuilderResponse::from_header_envelope(
            StatusCode::OK,
            br#"{"code":400,"message":"bad slot"}"#,
        )
        .unwrap();
        assert!(matches!(
            response.into_accepted().unwrap_err(),
            Error::BuilderRejected { code: 400, ref message } if message == "bad slot"
        ));

        let err = BuilderResponse::from_header_envelope(StatusCode::OK, b"<html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_header_envelope_keeps_builder_code() {
        let response = BuilderResponse::from_header_envelope(
            StatusCode::OK,
            br#"{"code":-32000,"message":"unknown parent"}"#,
        )
        .unwrap();
        assert!(matches!(
            response.into_accepted().unwrap_err(),
            Error::BuilderRejected { code: -32000, ref message } if message == "unknown parent"
        ));
    }

    #[test]
    fn test_payload_envelope() {
        let err = BuilderResponse::from_payload_envelope(StatusCode::OK, br#"{"version":"x"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));

        let response =
            BuilderResponse::from_payload_envelope(StatusCode::NOT_FOUND, b"no payload").unwrap();
        assert!(matches!(response.into_payload().unwrap_err(), Error::BuilderRejected { code: 404, .. }));

        assert!(matches!(BuilderResponse::Accepted.into_payload(), Err(Error::MissingPayload)));
    }
}
