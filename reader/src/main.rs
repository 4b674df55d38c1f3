use nfc_tag_reader::config::Config;
use nfc_tag_reader::console;
use nfc_tag_reader::nfc::SimulatedNfc;
use nfc_tag_reader::screen::Screen;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout belongs to the screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nfc_tag_reader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let (nfc, events) = SimulatedNfc::from_config(&config);
    if nfc.is_none() {
        tracing::info!("No NFC provider configured");
    }

    // Mount the screen
    let screen = Screen::mount(nfc);
    tracing::info!("NFC reader screen started in step {}", screen.step().name());

    let stdin = BufReader::new(tokio::io::stdin());
    let screen = console::run(screen, events, stdin, tokio::io::stdout(), config.output).await?;

    tracing::info!("NFC reader screen closed in step {}", screen.step().name());

    Ok(())
}
