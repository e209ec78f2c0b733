// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::helpers::{finite_or_zero, format_two_decimals, parse_amount_or_zero, NOT_AVAILABLE};
use crate::models::{MixNodeResponseItem, MixnodeStatus};
use log::trace;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Flattened, display-ready representation of a single mixnode.
///
/// Field names are consumed verbatim by the grid component and must not be renamed.
#[cfg_attr(feature = "generate-ts", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "generate-ts",
    ts(export_to = "ts-packages/types/src/types/rust/MixnodeRowType.ts")
)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct MixnodeRowType {
    /// Row key used by the grid; always equal to `owner`.
    pub id: String,
    #[cfg_attr(feature = "generate-ts", ts(type = "string"))]
    pub status: MixnodeStatus,
    pub owner: String,
    pub location: String,
    pub identity_key: String,

    /// Pledge plus delegations.
    pub bond: f64,

    /// Share of the bond pledged by the operator, two decimal places, without a `%` suffix.
    pub self_percentage: String,
    pub host: String,
    pub layer: String,
    pub profit_percentage: String,
    pub avg_uptime: String,
    pub stake_saturation: String,
}

impl From<&MixNodeResponseItem> for MixnodeRowType {
    fn from(item: &MixNodeResponseItem) -> Self {
        mixnode_to_grid_row(item)
    }
}

fn self_percentage(pledge: f64, total_bond: f64) -> String {
    if total_bond == 0.0 {
        return NOT_AVAILABLE.to_string();
    }

    let share = pledge * 100.0 / total_bond;
    if share.is_finite() {
        format_two_decimals(share)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn stake_saturation(saturation: Option<f64>) -> String {
    match saturation {
        Some(saturation) => format!("{} %", format_two_decimals(saturation * 100.0)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Converts a single listing entry into a grid row.
/// Never fails; missing values fall back to defaults.
pub fn mixnode_to_grid_row(item: &MixNodeResponseItem) -> MixnodeRowType {
    let pledge = item
        .pledge_amount
        .as_ref()
        .map(|coin| parse_amount_or_zero(coin.amount_str()))
        .unwrap_or_default();
    let delegations = item
        .total_delegation
        .as_ref()
        .map(|coin| parse_amount_or_zero(coin.amount_str()))
        .unwrap_or_default();
    let total_bond = finite_or_zero(pledge + delegations);

    let mix_node = item.mix_node.as_ref();
    let profit_margin = mix_node
        .and_then(|node| node.profit_margin_percent)
        .unwrap_or_default();

    MixnodeRowType {
        id: item.owner.clone(),
        status: item.status.clone(),
        owner: item.owner.clone(),
        location: item
            .location
            .as_ref()
            .and_then(|location| location.country_name.clone())
            .unwrap_or_default(),
        identity_key: mix_node
            .and_then(|node| node.identity_key.clone())
            .unwrap_or_default(),
        bond: total_bond,
        self_percentage: self_percentage(pledge, total_bond),
        host: mix_node
            .and_then(|node| node.host.clone())
            .unwrap_or_default(),
        layer: item.layer.clone().unwrap_or_default(),
        profit_percentage: format!("{profit_margin}%"),
        avg_uptime: item
            .avg_uptime
            .map(|uptime| format!("{uptime}%"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        stake_saturation: stake_saturation(item.stake_saturation),
    }
}

/// Maps every entry of the listing, preserving order. An absent listing yields no rows.
pub fn mixnodes_to_grid_rows(items: Option<&[MixNodeResponseItem]>) -> Vec<MixnodeRowType> {
    let Some(items) = items else {
        return Vec::new();
    };

    trace!("mapping {} mixnode entries into grid rows", items.len());
    items.iter().map(mixnode_to_grid_row).collect()
}
