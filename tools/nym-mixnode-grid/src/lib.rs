// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod env;
pub mod input;
pub mod output_format;
pub mod render;
