use serde::{Deserialize, Serialize};
use serde_json::Result;



/// Default config for log4rs;
mod log4rs;
pub use log4rs::*;

pub mod workloads;

/// Cache sizing section, shared by every document generated in one run.
/// Key names match what CacheBench expects on the wire, hence the renames.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    #[serde(rename = "cacheSizeMB")]
    pub cache_size_mb: u64,
    pub pool_rebalance_interval_sec: u64,
    pub move_on_slab_release: bool,
    pub num_pools: u32,
    // Only set for non-default backends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

/// Per-combination load parameters. Field order is serialization order:
/// fixed params first, then the workload ratios, then the resolved key
/// count, then the KV profile's size distributions.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    pub num_ops: u64,
    pub num_threads: u32,
    pub distribution: String,
    pub op_delay_batch: u32,
    pub op_delay_ns: u64,
    pub del_ratio: f64,
    pub get_ratio: f64,
    pub set_ratio: f64,
    pub num_keys: u64,
    pub key_size_range: Vec<u64>,
    pub key_size_range_probability: Vec<f64>,
    pub val_size_range: Vec<u64>,
    pub val_size_range_probability: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BenchConfig {
    pub cache_config: CacheConfig,
    pub test_config: TestConfig,
}

impl BenchConfig {
    pub fn serialize(self: &Self) -> String {
        serde_json::to_string_pretty(self).expect("Invalid Config")
    }

    pub fn deserialize(s: &String) -> BenchConfig {
        let res: Result<BenchConfig> = serde_json::from_str(s.as_str());
        res.expect("Invalid JSON config")
    }
}
