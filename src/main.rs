use lms_data::{server_client, Backend, Command, Config, Services};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration before anything touches the network
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let client = server_client(&config);
    tracing::info!("Using backend at {} (schema {})", client.base_url(), client.schema());

    let backend: Arc<dyn Backend> = Arc::new(client);
    let services = Services::new(backend);

    let output = match command.run(&services).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Failed to encode output: {}", e);
            std::process::exit(1);
        }
    }
}
