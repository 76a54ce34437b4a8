use crate::cmd::config::ConfigFile;
use alloy_primitives::Address;
use clap::Args;
use tracing::info;

#[derive(Debug, Args)]
#[clap(about = "📝 register the validator's fee recipient and gas limit with the builder")]
pub struct Command {
    #[clap(flatten)]
    config: ConfigFile,
    /// Overrides the configured fee recipient.
    #[clap(long)]
    fee_recipient: Option<Address>,
    /// Overrides the configured gas limit.
    #[clap(long)]
    gas_limit: Option<u64>,
}

impl Command {
    pub async fn execute(self) -> eyre::Result<()> {
        let config = self.config.load()?;
        let client = config.build_client()?;

        let fee_recipient = self.fee_recipient.unwrap_or(config.client.fee_recipient);
        let gas_limit = self.gas_limit.unwrap_or(config.client.gas_limit);

        client.register_validator(fee_recipient, gas_limit).await?;
        info!(%fee_recipient, gas_limit, "registration accepted");

        Ok(())
    }
}
