// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Conversion of the explorer API mixnode listing into flat rows that a table/grid
//! component can render directly.
//!
//! The mapping never fails: missing or malformed values degrade to defaults
//! (`0`, `""` or `"-"`). Only decoding the raw payload is fallible.

pub mod error;
pub(crate) mod helpers;
pub mod models;
pub mod row;
pub mod summary;

pub use error::ExplorerGridError;
pub use models::{DecCoin, Location, MixNode, MixNodeResponseItem, MixnodeStatus};
pub use row::{mixnode_to_grid_row, mixnodes_to_grid_rows, MixnodeRowType};
pub use summary::{MixNodeActiveSetSummary, MixNodeSummary};

/// Decodes the raw body of the mixnode listing endpoint.
///
/// A literal `null` body is treated as an absent list and yields `Ok(None)`.
pub fn parse_mixnodes_response(
    raw: &str,
) -> Result<Option<Vec<MixNodeResponseItem>>, ExplorerGridError> {
    serde_json::from_str(raw).map_err(|source| ExplorerGridError::MalformedPayload { source })
}
