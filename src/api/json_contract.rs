use serde::{Deserialize, Serialize};

use crate::dom::Document;
use crate::error::{CatalogError, CatalogResult};

use super::{CatalogPage, PageSnapshot};

pub const PAGE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PageSnapshot,
}

impl PageSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> CatalogResult<String> {
        let payload = PageSnapshotJsonContractV1 {
            schema_version: PAGE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CatalogError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> CatalogResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PageSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PageSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            CatalogError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PAGE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(CatalogError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<D: Document> CatalogPage<D> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> CatalogResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
