/// Tool for deleting symptom records
///
/// This module implements the symptom_delete MCP tool.

use serde::{Deserialize, Serialize};

use crate::storage::{StoreError, SymptomStore};
use crate::tools::{parse_record_id, persistence_warning};

/// Parameters for deleting a symptom record
#[derive(Debug, Deserialize)]
pub struct DeleteSymptomParams {
    pub record_id: String,
}

/// Response from deleting a symptom record
#[derive(Debug, Serialize)]
pub struct DeleteSymptomResponse {
    pub success: bool,
    pub message: String,
}

/// Remove the record at the given id
pub fn delete_symptom(
    store: &mut SymptomStore,
    params: DeleteSymptomParams,
) -> Result<DeleteSymptomResponse, StoreError> {
    let id = parse_record_id(&params.record_id)?;
    store.delete(&id)?;

    Ok(DeleteSymptomResponse {
        success: true,
        message: format!(
            "🗑️ Deleted symptom record. {} remaining.{}",
            store.len(),
            persistence_warning(store)
        ),
    })
}
