// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::cli::CommonArgs;
use nym_mixnode_grid::input::load_rows;
use nym_mixnode_grid::render::write_rows;
use std::io;

pub(crate) fn execute(args: CommonArgs) -> anyhow::Result<()> {
    let output = args.output_format()?;
    let rows = load_rows(&args.input_source())?;

    write_rows(io::stdout().lock(), &rows, output)
}
