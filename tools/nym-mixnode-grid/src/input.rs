// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use nym_explorer_grid::{mixnodes_to_grid_rows, parse_mixnodes_response, MixnodeRowType};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    pub fn read_payload(&self) -> anyhow::Result<String> {
        match self {
            InputSource::Stdin => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("failed to read the mixnode listing from stdin")?;
                Ok(raw)
            }
            InputSource::File(path) => fs::read_to_string(path).with_context(|| {
                format!(
                    "failed to read the mixnode listing from '{}'",
                    path.display()
                )
            }),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decodes a raw listing and maps it into grid rows.
pub fn rows_from_payload(raw: &str) -> anyhow::Result<Vec<MixnodeRowType>> {
    let items = parse_mixnodes_response(raw)?;
    if items.is_none() {
        debug!("the listing was null - treating it as empty");
    }
    Ok(mixnodes_to_grid_rows(items.as_deref()))
}

pub fn load_rows(source: &InputSource) -> anyhow::Result<Vec<MixnodeRowType>> {
    let raw = source.read_payload()?;
    let rows = rows_from_payload(&raw)
        .with_context(|| format!("failed to process the mixnode listing from {source}"))?;
    info!("loaded {} mixnode rows from {source}", rows.len());
    Ok(rows)
}
