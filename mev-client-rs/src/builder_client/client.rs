use crate::{
    builder_client::BuilderResponse,
    endpoint::Endpoint,
    error::Error,
    signing::SigningIdentity,
    types::{Block, BlsPublicKey, ExecutionAddress, Hash32, Slot, ValidatorRegistration},
};
use reqwest::{header::CONTENT_TYPE, RequestBuilder};
use std::{
    fmt,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tracing::{debug, info, warn};

pub const REGISTER_VALIDATORS_PATH: &str = "/eth/v1/builder/validators";
pub const STATUS_PATH: &str = "/eth/v1/builder/status";

pub fn header_path(slot: Slot, parent_hash: &Hash32, public_key: &BlsPublicKey) -> String {
    format!("/eth/v1/builder/header/{slot}/{parent_hash}/{public_key}")
}

pub fn block_path(slot: Slot, parent_hash: &Hash32, public_key: &BlsPublicKey) -> String {
    format!("/eth/v1/builder/block/{slot}/{parent_hash}/{public_key}")
}

/// A `Client` for a single builder, acting on behalf of one validator identity.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Endpoint,
    identity: Arc<SigningIdentity>,
}

impl Client {
    pub fn new(
        endpoint: Endpoint,
        timeout: Duration,
        identity: Arc<SigningIdentity>,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint, identity })
    }

    pub fn from_host(
        host: &str,
        timeout: Duration,
        identity: Arc<SigningIdentity>,
    ) -> Result<Self, Error> {
        Self::new(Endpoint::resolve(host)?, timeout, identity)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn public_key(&self) -> &BlsPublicKey {
        self.identity.public_key()
    }

    pub async fn check_status(&self) -> Result<(), Error> {
        let request = self.http.get(self.endpoint.join(STATUS_PATH)?);
        let (status, body) = send(request).await?;
        BuilderResponse::from_status(status, &body).into_accepted()
    }

    /// Registers `fee_recipient` and `gas_limit` for this client's validator, stamped now.
    pub async fn register_validator(
        &self,
        fee_recipient: ExecutionAddress,
        gas_limit: u64,
    ) -> Result<(), Error> {
        self.register_validator_at(fee_recipient, gas_limit, get_time()).await
    }

    pub async fn register_validator_at(
        &self,
        fee_recipient: ExecutionAddress,
        gas_limit: u64,
        timestamp: u64,
    ) -> Result<(), Error> {
        let registration = ValidatorRegistration {
            fee_recipient,
            gas_limit,
            timestamp,
            public_key: self.identity.public_key().clone(),
        };
        let signed_registration = registration.sign(&self.identity)?;
        let body = signed_registration.to_bytes()?;

        let url = self.endpoint.join(REGISTER_VALIDATORS_PATH)?;
        debug!(%url, %fee_recipient, gas_limit, timestamp, "registering validator");

        let request =
            self.http.post(url).header(CONTENT_TYPE, "application/json").body(body);
        let (status, body) = send(request).await?;
        let result = BuilderResponse::from_status(status, &body).into_accepted();
        match &result {
            Ok(()) => info!(public_key = %self.public_key(), "registered validator with builder"),
            Err(err) => warn!(%err, "builder did not accept validator registration"),
        }
        result
    }

    pub async fn get_header(&self, slot: Slot, parent_hash: &Hash32) -> Result<(), Error> {
        self.get_header_for(slot, parent_hash, self.identity.public_key()).await
    }

    pub async fn get_header_for(
        &self,
        slot: Slot,
        parent_hash: &Hash32,
        public_key: &BlsPublicKey,
    ) -> Result<(), Error> {
        let url = self.endpoint.join(&header_path(slot, parent_hash, public_key))?;
        debug!(%url, "requesting header from builder");

        let (status, body) = send(self.http.get(url)).await?;
        let result = BuilderResponse::from_header_envelope(status, &body)?.into_accepted();
        if let Err(err) = &result {
            warn!(slot, %parent_hash, %err, "could not get header from builder");
        }
        result
    }

    pub async fn get_block(&self, slot: Slot, parent_hash: &Hash32) -> Result<Block, Error> {
        self.get_block_for(slot, parent_hash, self.identity.public_key()).await
    }

    pub async fn get_block_for(
        &self,
        slot: Slot,
        parent_hash: &Hash32,
        public_key: &BlsPublicKey,
    ) -> Result<Block, Error> {
        self.fetch_block(slot, parent_hash, public_key, None).await
    }

    /// Fetches a post-Cancun block, whose header commits to `parent_beacon_block_root`.
    pub async fn get_block_with_beacon_root(
        &self,
        slot: Slot,
        parent_hash: &Hash32,
        parent_beacon_block_root: Hash32,
    ) -> Result<Block, Error> {
        let public_key = self.identity.public_key();
        self.fetch_block(slot, parent_hash, public_key, Some(parent_beacon_block_root)).await
    }

    async fn fetch_block(
        &self,
        slot: Slot,
        parent_hash: &Hash32,
        public_key: &BlsPublicKey,
        parent_beacon_block_root: Option<Hash32>,
    ) -> Result<Block, Error> {
        let url = self.endpoint.join(&block_path(slot, parent_hash, public_key))?;
        debug!(%url, "requesting block from builder");

        let (status, body) = send(self.http.get(url)).await?;
        let response = BuilderResponse::from_payload_envelope(status, &body)?.into_payload()?;
        let version = response.version.clone();
        let block = response.into_block(parent_beacon_block_root)?;

        info!(
            slot,
            %version,
            block_number = block.header.number,
            transactions = block.body.transactions.len(),
            "received block from builder"
        );
        Ok(block)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.to_string())
            .field("public_key", self.public_key())
            .finish()
    }
}

async fn send(request: RequestBuilder) -> Result<(reqwest::StatusCode, Vec<u8>), Error> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    Ok((status, body.to_vec()))
}

fn get_time() -> u64 {
    // a clock before the epoch is treated as the epoch
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}
