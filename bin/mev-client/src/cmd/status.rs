use crate::cmd::config::ConfigFile;
use clap::Args;
use tracing::info;

#[derive(Debug, Args)]
#[clap(about = "🩺 check that the builder is reachable and healthy")]
pub struct Command {
    #[clap(flatten)]
    config: ConfigFile,
}

impl Command {
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.config.load()?.build_client()?;
        client.check_status().await?;
        info!(endpoint = %client.endpoint(), "builder is up");
        Ok(())
    }
}
