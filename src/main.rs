use bakery_api::cli::{self, Cli};
use bakery_api::server::Server;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone()).await?;

    if cli.starts_server() {
        Server::new(settings).run().await?;
    }

    Ok(())
}
