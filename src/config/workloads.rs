use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named read/write mix. get_ratio + set_ratio == 1.0 for every mix.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkloadMix {
    pub name: String,
    pub get_ratio: f64,
    pub set_ratio: f64,
}

/// A named key/value size distribution. The probability vector covers every
/// breakpoint except the last; the final bucket takes the residual.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KvSizeProfile {
    pub name: String,
    pub key_size_range: Vec<u64>,
    pub key_size_range_probability: Vec<f64>,
    pub val_size_range: Vec<u64>,
    pub val_size_range_probability: Vec<f64>,
}

/// Parameters held constant across the whole matrix.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FixedTestParams {
    pub num_ops: u64,
    pub num_threads: u32,
    pub distribution: String,
    pub op_delay_batch: u32,
    pub op_delay_ns: u64,
    pub del_ratio: f64,
}

/// Label -> distinct key count approximating that on-disk footprint,
/// keyed by profile name. Insertion order is generation order.
pub type DatasetSizes = IndexMap<String, IndexMap<String, u64>>;

pub fn workload_mixes() -> Vec<WorkloadMix> {
    vec![
        WorkloadMix {
            name: String::from("balanced"),
            get_ratio: 0.5,
            set_ratio: 0.5,
        },
        WorkloadMix {
            name: String::from("readonly"),
            get_ratio: 1.0,
            set_ratio: 0.0,
        },
        WorkloadMix {
            name: String::from("readheavy"),
            get_ratio: 0.95,
            set_ratio: 0.05,
        },
        WorkloadMix {
            name: String::from("setheavy"),
            get_ratio: 0.05,
            set_ratio: 0.95,
        },
    ]
}

pub fn kv_size_profiles() -> Vec<KvSizeProfile> {
    vec![
        KvSizeProfile {
            name: String::from("KV-small"),
            key_size_range: vec![4, 8],
            key_size_range_probability: vec![1.0],
            val_size_range: vec![32, 128],
            val_size_range_probability: vec![1.0],
        },
        KvSizeProfile {
            name: String::from("KV-mixed"),
            key_size_range: vec![4, 16, 64],
            key_size_range_probability: vec![0.3, 0.7],
            val_size_range: vec![64, 512, 4096],
            val_size_range_probability: vec![0.5, 0.5],
        },
        KvSizeProfile {
            name: String::from("KV-large"),
            key_size_range: vec![4, 64],
            key_size_range_probability: vec![1.0],
            val_size_range: vec![64, 512, 10240, 409200],
            val_size_range_probability: vec![0.1, 0.2, 0.7],
        },
    ]
}

pub fn dataset_sizes() -> DatasetSizes {
    let mut sizes = DatasetSizes::new();
    sizes.insert(
        String::from("KV-small"),
        IndexMap::from([(String::from("2G"), 1431655u64)]),
    );
    sizes.insert(
        String::from("KV-mixed"),
        IndexMap::from([(String::from("2G"), 1543841u64)]),
    );
    sizes.insert(
        String::from("KV-large"),
        IndexMap::from([(String::from("2G"), 112386u64)]),
    );
    sizes
}

pub fn fixed_test_params() -> FixedTestParams {
    FixedTestParams {
        num_ops: 100000,
        num_threads: 6,
        distribution: String::from("range"),
        op_delay_batch: 1,
        op_delay_ns: 200,
        del_ratio: 0.0,
    }
}
