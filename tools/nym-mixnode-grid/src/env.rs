// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod vars {
    pub const MIXNODE_GRID_INPUT_ARG: &str = "MIXNODE_GRID_INPUT";
    pub const MIXNODE_GRID_OUTPUT_ARG: &str = "MIXNODE_GRID_OUTPUT";
}

use std::ffi::OsString;

/// Returns the explicit value if provided,
/// otherwise whatever is set in the environment under `var`.
pub fn arg_or_env<T>(explicit: Option<T>, var: &str) -> Option<T>
where
    T: From<OsString>,
{
    explicit.or_else(|| std::env::var_os(var).map(T::from))
}
