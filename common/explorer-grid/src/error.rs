// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerGridError {
    #[error("the provided mixnode listing could not be decoded")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },
}
