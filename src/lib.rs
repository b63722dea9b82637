// Copyright (c) Shubham Mishra. All rights reserved.
// Licensed under the MIT License.

pub mod config;
pub mod generator;
