// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::dbg_macro)]

use clap::Parser;

mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    args.load_env_file()?;
    logging::setup_tracing_logger();

    args.execute()
}
