// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::helpers::{
    de_json_number, de_lenient_f64, de_lenient_string, de_lenient_string_or_default,
};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};
use strum::EnumString;

/// Status of the node as reported by the API.
///
/// Values outside the known set are kept verbatim in `Other` so that they can be passed through.
#[derive(Clone, Debug, Default, EnumString, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MixnodeStatus {
    Active,   // in both the active set and the rewarded set
    Standby,  // only in the rewarded set
    #[default]
    Inactive, // in neither the rewarded set nor the active set, but is bonded
    NotFound, // doesn't even exist in the bonded set

    #[strum(default)]
    Other(String),
}

impl MixnodeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MixnodeStatus::Active => "active",
            MixnodeStatus::Standby => "standby",
            MixnodeStatus::Inactive => "inactive",
            MixnodeStatus::NotFound => "not_found",
            MixnodeStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl Display for MixnodeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MixnodeStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from(raw: &str) -> Self {
        // parsing can't fail thanks to the `Other` fallback
        raw.parse().unwrap_or_else(|_| MixnodeStatus::Other(raw.to_string()))
    }
}

impl Serialize for MixnodeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MixnodeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None => MixnodeStatus::default(),
            Some(Value::String(raw)) => MixnodeStatus::from(raw.as_str()),
            Some(other) => MixnodeStatus::Other(other.to_string()),
        })
    }
}

impl JsonSchema for MixnodeStatus {
    fn schema_name() -> String {
        "MixnodeStatus".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

/// Coin amount as reported by the explorer API, i.e. with the amount kept as text.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct DecCoin {
    #[serde(default, deserialize_with = "de_lenient_string_or_default")]
    pub denom: String,

    #[serde(default, deserialize_with = "de_lenient_string")]
    pub amount: Option<String>,
}

impl DecCoin {
    pub fn amount_str(&self) -> &str {
        self.amount.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Location {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub two_letter_iso_country_code: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub three_letter_iso_country_code: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub lng: Option<f64>,
}

/// The bonded node information embedded in every listing entry.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct MixNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub host: Option<String>,

    /// Base58 encoded ed25519 EdDSA public key of the mixnode
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub identity_key: Option<String>,

    // newer APIs serialise the margin as a decimal string rather than a number
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub profit_margin_percent: Option<f64>,
}

/// Single entry of the explorer API mixnode listing.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct MixNodeResponseItem {
    #[serde(default, deserialize_with = "de_lenient_string_or_default")]
    pub owner: String,

    #[serde(default)]
    pub status: MixnodeStatus,

    #[serde(default)]
    pub mix_node: Option<MixNode>,

    #[serde(default)]
    pub pledge_amount: Option<DecCoin>,

    #[serde(default)]
    pub total_delegation: Option<DecCoin>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default, deserialize_with = "de_lenient_string")]
    pub layer: Option<String>,

    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub avg_uptime: Option<f64>,

    /// Ratio of the total bond to the saturation point; only JSON numbers are honoured.
    #[serde(default, deserialize_with = "de_json_number")]
    pub stake_saturation: Option<f64>,
}
