// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod prompt;
pub mod seed;
pub mod store;
pub mod surface;
pub mod utils;
pub mod view;
pub mod commands;
