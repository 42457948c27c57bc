use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strength_utils::{jsonify, u8s_from_parts};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BenchmarkSettings {
    pub challenge_id: String,
    pub algorithm_id: String,
    pub difficulty: Vec<i32>,
}

impl BenchmarkSettings {
    /// Seed for the instance at `nonce`; depends on every settings field, so
    /// any change to the settings yields an unrelated instance.
    pub fn calc_seed(&self, rand_hash: &str, nonce: u64) -> Result<[u8; 32]> {
        Ok(u8s_from_parts(&[
            jsonify(self)?.as_bytes(),
            rand_hash.as_bytes(),
            &nonce.to_le_bytes(),
        ]))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputData {
    pub nonce: u64,
    pub solution: Map<String, Value>,
}
