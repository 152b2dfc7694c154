use super::client::FigmaClient;
use anyhow::{anyhow, Result};

impl FigmaClient {
    /// Get the raw file payload as a JSON value, preserving every field
    /// for the generator input file.
    pub async fn get_file_raw(&self, file_key: &str) -> Result<serde_json::Value> {
        let url = format!("{}/files/{}", self.base_url(), file_key);
        self.get_json(&url).await
    }

    /// Get a single node's document subtree as a JSON value.
    pub async fn get_node_raw(&self, file_key: &str, node_id: &str) -> Result<serde_json::Value> {
        let url = format!("{}/files/{}/nodes?ids={}", self.base_url(), file_key, node_id);
        let payload: serde_json::Value = self.get_json(&url).await?;
        payload
            .get("nodes")
            .and_then(|nodes| nodes.get(node_id))
            .and_then(|entry| entry.get("document"))
            .cloned()
            .ok_or_else(|| anyhow!("node {} not found in file {}", node_id, file_key))
    }
}
