/// Public library interface for the Symptom Tracker MCP server
///
/// This module exports the main server implementation and the public types
/// (record model, store, aggregation functions) that other applications or
/// tests can use directly.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod mcp;
mod storage;
mod tools;

// Re-export public modules and types
pub use analytics::{
    frequency_ranking, intensity_series, IntensityPoint, SymptomFrequency, RANKING_LIMIT,
};
pub use domain::*;
pub use storage::{
    FileSlot, MemorySlot, PersistenceSlot, StorageError, StoreError, SymptomStore,
};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main symptom tracker server that implements the MCP protocol
///
/// The server owns the symptom store, which in turn owns the authoritative
/// in-memory collection and mirrors it to a single JSON data file after
/// every mutation.
pub struct SymptomTrackerServer {
    store: SymptomStore,
}

impl SymptomTrackerServer {
    /// Create a server backed by a JSON data file at the given path
    ///
    /// The file is read once here; a missing, unreadable or corrupt file
    /// starts the log empty rather than failing startup.
    pub fn new(data_path: PathBuf) -> Self {
        tracing::info!("Initializing symptom tracker with data file: {:?}", data_path);

        let slot = FileSlot::new(data_path);
        let store = SymptomStore::load(Box::new(slot));

        Self { store }
    }

    /// Create a server over any persistence slot (tests use MemorySlot)
    pub fn with_slot(slot: Box<dyn PersistenceSlot + Send>) -> Self {
        Self {
            store: SymptomStore::load(slot),
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method blocks until the client disconnects or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Starting MCP server with {} symptom records loaded",
            self.store.len()
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the store (useful for testing)
    pub fn store(&self) -> &SymptomStore {
        &self.store
    }

    /// Get a mutable reference to the store
    pub fn store_mut(&mut self) -> &mut SymptomStore {
        &mut self.store
    }
}
