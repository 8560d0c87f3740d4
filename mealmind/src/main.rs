use anyhow::Result;
use clap::Parser;

use mealmind::cli::Cli;
use mealmind::config::Settings;
use mealmind::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = cli.apply(Settings::load(cli.config.as_deref())?);
    settings.validate()?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
