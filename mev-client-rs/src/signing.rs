use ethereum_consensus::{
    crypto::{self, Error, SecretKey},
    primitives::{BlsPublicKey, BlsSignature},
};
use std::fmt;

/// The validator's BLS key material.
///
/// The secret never leaves this type; only the public key and signatures are exposed.
pub struct SigningIdentity {
    secret_key: SecretKey,
    public_key: BlsPublicKey,
}

impl SigningIdentity {
    pub fn new(secret_key: SecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self { secret_key, public_key }
    }

    pub fn random<R: rand::Rng>(rng: &mut R) -> Result<Self, Error> {
        let secret_key = SecretKey::random(rng)?;
        Ok(Self::new(secret_key))
    }

    pub fn public_key(&self) -> &BlsPublicKey {
        &self.public_key
    }

    pub fn sign(&self, message: &[u8]) -> BlsSignature {
        self.secret_key.sign(message)
    }
}

impl TryFrom<&[u8]> for SigningIdentity {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let secret_key = SecretKey::try_from(bytes)?;
        Ok(Self::new(secret_key))
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity").field("public_key", &self.public_key).finish()
    }
}

pub fn verify_signature(
    public_key: &BlsPublicKey,
    message: &[u8],
    signature: &BlsSignature,
) -> Result<(), Error> {
    crypto::verify_signature(public_key, message, signature)
}
