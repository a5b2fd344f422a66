/// Main entry point for the Symptom Tracker MCP server
///
/// This file sets up logging, parses command line arguments, and starts the
/// MCP server. The server listens for JSON-RPC requests over stdin/stdout
/// following the MCP protocol, so all logging goes to stderr.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use symptom_tracker_mcp::SymptomTrackerServer;

/// Get the default data file path with a fallback strategy
fn get_default_data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".symptom_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("symptom_tracker");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("symptom_tracker");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".symptom_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory and verify it is writable
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                let mut data_path = potential_path.clone();
                data_path.push("symptoms.json");
                return Ok(data_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("symptom_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("symptoms.json");

    tracing::warn!("Using temporary directory for data file: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the Symptom Tracker MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file holding the symptom log
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("symptom_tracker_mcp={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting Symptom Tracker MCP server");

    // Determine the data file path
    let data_path = match args.data_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_data_path()?,
    };

    info!("Using data file at: {}", data_path.display());

    // Create and start the symptom tracker server
    let server = SymptomTrackerServer::new(data_path);

    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Symptom Tracker MCP server shutdown complete");
    Ok(())
}
