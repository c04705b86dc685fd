// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // YAML config + defaults
pub mod errors;     // error handling
pub mod observability;
pub mod record;     // the Record entity
pub mod traits;     // capability abstractions
pub mod utils;
