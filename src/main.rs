use speccheck::{api::Server, config::Config};
use tracing::info;

/// The main entry point for the validation service.
///
/// This function initializes logging, loads the application configuration,
/// and starts the API server that accepts specification documents.
#[tokio::main] // Marks the async main function to be run by the Tokio runtime.
async fn main() -> anyhow::Result<()> {
    // Initialize logging using tracing_subscriber.
    // This sets up a default formatter that prints logs to stdout.
    tracing_subscriber::fmt::init();

    // Load the application configuration from the specified TOML file.
    // The `?` operator propagates any errors that occur during loading.
    let config = Config::load("config/default.toml")?;
    // Log the loaded configuration for debugging and informational purposes.
    info!("Validation service starting with config: {:?}", config);

    // Create a new API server instance.
    // The server builds the queue validator from the Kueue settings.
    let server = Server::new(config);
    // Start the API server. This will bind to the configured port and begin
    // listening for incoming validation requests.
    server.start().await?;

    Ok(())
}
