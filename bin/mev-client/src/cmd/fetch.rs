use crate::cmd::config::ConfigFile;
use alloy_primitives::B256;
use clap::Args;
use mev_client_rs::types::Slot;
use tracing::info;

#[derive(Debug, Args)]
#[clap(about = "🔎 ask the builder whether it has a header for the given slot and parent")]
pub struct HeaderCommand {
    #[clap(flatten)]
    config: ConfigFile,
    slot: Slot,
    parent_hash: B256,
}

impl HeaderCommand {
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.config.load()?.build_client()?;

        client.get_header(self.slot, &self.parent_hash).await?;
        info!(slot = self.slot, parent_hash = %self.parent_hash, "builder has a header prepared");

        Ok(())
    }
}

#[derive(Debug, Args)]
#[clap(about = "📦 fetch the full block for the given slot and parent from the builder")]
pub struct BlockCommand {
    #[clap(flatten)]
    config: ConfigFile,
    slot: Slot,
    parent_hash: B256,
    /// Required for post-Cancun payloads, whose header commits to it.
    #[clap(long)]
    parent_beacon_block_root: Option<B256>,
}

impl BlockCommand {
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.config.load()?.build_client()?;

        let block = match self.parent_beacon_block_root {
            Some(root) => {
                client.get_block_with_beacon_root(self.slot, &self.parent_hash, root).await?
            }
            None => client.get_block(self.slot, &self.parent_hash).await?,
        };
        let header = &block.header;
        info!(
            slot = self.slot,
            number = header.number,
            parent_hash = %header.parent_hash,
            fee_recipient = %header.beneficiary,
            gas_used = header.gas_used,
            transactions = block.body.transactions.len(),
            "fetched block from builder"
        );

        Ok(())
    }
}
