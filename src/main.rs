// Copyright (c) Shubham Mishra. All rights reserved.
// Licensed under the MIT License.

use std::{env, fs, io};

use cbgen::config::default_log4rs_config;
use cbgen::generator::{generate, Backend};
use clap::{arg, command};
use log::info;

fn parse_args() -> Option<String> {
    let matches = command!()
        .arg(arg!([backend] "Target storage backend: cachelib (default), rocksdb or memcached"))
        .get_matches();

    matches.get_one::<String>("backend").cloned()
}

fn main() -> io::Result<()> {
    log4rs::init_config(default_log4rs_config()).unwrap();

    let backend = Backend::resolve(parse_args().as_deref());
    let output_dir = generate(backend, env::current_dir()?.as_path())?;

    info!("Generated configs in: {}", fs::canonicalize(&output_dir)?.display());
    Ok(())
}
