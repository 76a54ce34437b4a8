use crate::{error::Error, signing::verify_signature, SigningIdentity};
use alloy_primitives::Address;
use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature};
use serde::{Deserialize, Serialize};

/// A validator's preferences, as declared to a builder.
///
/// Fields serialize in declaration order, which fixes the canonical JSON form
/// that is signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRegistration {
    pub fee_recipient: Address,
    #[serde(with = "crate::serde::as_str")]
    pub gas_limit: u64,
    #[serde(with = "crate::serde::as_str")]
    pub timestamp: u64,
    #[serde(rename = "pubkey")]
    pub public_key: BlsPublicKey,
}

impl ValidatorRegistration {
    /// Canonical byte form of this message; the exact bytes covered by the signature.
    pub fn to_signing_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::Serialization)
    }

    pub fn sign(self, identity: &SigningIdentity) -> Result<SignedValidatorRegistration, Error> {
        let message_bytes = self.to_signing_bytes()?;
        let signature = identity.sign(&message_bytes);
        Ok(SignedValidatorRegistration { message: self, signature })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedValidatorRegistration {
    pub message: ValidatorRegistration,
    pub signature: BlsSignature,
}

impl SignedValidatorRegistration {
    pub fn verify_signature(&self) -> Result<(), Error> {
        let message_bytes = self.message.to_signing_bytes()?;
        verify_signature(&self.message.public_key, &message_bytes, &self.signature)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::Serialization)
    }
}
