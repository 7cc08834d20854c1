use relax_paths::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let mut config = ServerConfig::default();
    if let Some(port) = env::args().nth(1) {
        config.port = port.parse()?;
    }

    println!("Starting shortest-path web server...");
    println!("   Address: {}", config.socket_addr());
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!();

    start_server(config).await
}
