// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::models::MixnodeStatus;
use crate::row::MixnodeRowType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "generate-ts", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "generate-ts",
    ts(export_to = "ts-packages/types/src/types/rust/MixNodeActiveSetSummary.ts")
)]
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
pub struct MixNodeActiveSetSummary {
    pub active: usize,
    pub standby: usize,
    pub inactive: usize,
    pub not_found: usize,

    /// Nodes reporting a status outside of the known set.
    pub other: usize,
}

#[cfg_attr(feature = "generate-ts", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "generate-ts",
    ts(export_to = "ts-packages/types/src/types/rust/MixNodeSummary.ts")
)]
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
pub struct MixNodeSummary {
    pub count: usize,
    pub activeset: MixNodeActiveSetSummary,
}

impl MixNodeSummary {
    pub fn from_rows(rows: &[MixnodeRowType]) -> Self {
        let mut activeset = MixNodeActiveSetSummary::default();
        for row in rows {
            match row.status {
                MixnodeStatus::Active => activeset.active += 1,
                MixnodeStatus::Standby => activeset.standby += 1,
                MixnodeStatus::Inactive => activeset.inactive += 1,
                MixnodeStatus::NotFound => activeset.not_found += 1,
                MixnodeStatus::Other(_) => activeset.other += 1,
            }
        }

        MixNodeSummary {
            count: rows.len(),
            activeset,
        }
    }
}
