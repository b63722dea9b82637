// Copyright (c) Shubham Mishra. All rights reserved.
// Licensed under the MIT License.

use std::{fs, io, path::{Path, PathBuf}};

use log::warn;

use crate::config::{
    workloads::{dataset_sizes, fixed_test_params, kv_size_profiles, workload_mixes},
    BenchConfig, CacheConfig, TestConfig,
};


/// Target storage engine for the generated matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Cachelib,
    RocksDb,
    Memcached,
}

impl Backend {
    /// Case-insensitive match on the CLI argument. An unrecognized name
    /// warns and falls back to cachelib so a matrix is always produced.
    pub fn resolve(arg: Option<&str>) -> Backend {
        let arg = match arg {
            Some(s) => s.to_lowercase(),
            None => return Backend::Cachelib,
        };

        match arg.as_str() {
            "" | "cachelib" => Backend::Cachelib,
            "rocksdb" => Backend::RocksDb,
            "memcached" => Backend::Memcached,
            other => {
                warn!("Unknown backend '{}', defaulting to cachelib", other);
                Backend::Cachelib
            }
        }
    }

    pub fn output_dir(&self) -> &'static str {
        match self {
            Backend::Cachelib => "cachelib_configs",
            Backend::RocksDb => "rocksdb_configs",
            Backend::Memcached => "memcached_configs",
        }
    }

    /// Tag written into cache_config; absent for the default backend.
    pub fn tag(&self) -> Option<String> {
        match self {
            Backend::Cachelib => None,
            Backend::RocksDb => Some(String::from("rocksdb")),
            Backend::Memcached => Some(String::from("memcached")),
        }
    }
}

fn base_cache_config(backend: Backend) -> CacheConfig {
    CacheConfig {
        cache_size_mb: 15360,
        pool_rebalance_interval_sec: 1,
        move_on_slab_release: false,
        num_pools: 1,
        backend: backend.tag(),
    }
}

/// Writes one config file per (workload, KV profile, dataset size) into
/// `base_dir/{backend}_configs`, creating the directory if needed and
/// overwriting files from earlier runs. Returns the output directory.
pub fn generate(backend: Backend, base_dir: &Path) -> io::Result<PathBuf> {
    let output_dir = base_dir.join(backend.output_dir());
    fs::create_dir_all(&output_dir)?;

    let cache_config = base_cache_config(backend);
    let fixed = fixed_test_params();
    let sizes = dataset_sizes();

    for workload in workload_mixes().iter() {
        for profile in kv_size_profiles().iter() {
            // Every defined profile must have a size table; a missing
            // entry is a defect in the compiled-in tables.
            let profile_sizes = match sizes.get(profile.name.as_str()) {
                Some(s) => s,
                None => panic!("No dataset sizes defined for profile {}", profile.name),
            };

            for (size_label, num_keys) in profile_sizes.iter() {
                // Layering order: fixed params, workload ratios, key
                // count, profile size distributions.
                let test_config = TestConfig {
                    num_ops: fixed.num_ops,
                    num_threads: fixed.num_threads,
                    distribution: fixed.distribution.clone(),
                    op_delay_batch: fixed.op_delay_batch,
                    op_delay_ns: fixed.op_delay_ns,
                    del_ratio: fixed.del_ratio,
                    get_ratio: workload.get_ratio,
                    set_ratio: workload.set_ratio,
                    num_keys: *num_keys,
                    key_size_range: profile.key_size_range.clone(),
                    key_size_range_probability: profile.key_size_range_probability.clone(),
                    val_size_range: profile.val_size_range.clone(),
                    val_size_range_probability: profile.val_size_range_probability.clone(),
                };

                let full_config = BenchConfig {
                    cache_config: cache_config.clone(),
                    test_config,
                };

                let filename = format!("{}_{}_{}.json", workload.name, profile.name, size_label);
                fs::write(output_dir.join(filename), full_config.serialize())?;
            }
        }
    }

    Ok(output_dir)
}
