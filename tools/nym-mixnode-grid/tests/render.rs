// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

#![allow(clippy::unwrap_used)]

use nym_explorer_grid::{MixNodeSummary, MixnodeStatus};
use nym_mixnode_grid::input::{load_rows, InputSource};
use nym_mixnode_grid::output_format::OutputFormat;
use nym_mixnode_grid::render::{write_rows, write_summary, ROW_COLUMNS};
use std::io::Write;
use tempfile::NamedTempFile;

const LISTING: &str = r#"[
    {
        "mix_id": 1,
        "owner": "n1first",
        "status": "active",
        "mix_node": {
            "host": "1.2.3.4",
            "identity_key": "7sVjiMrPYZrDWRujku9QLxgE8noT7NBgjWBEZCmyLMaR",
            "profit_margin_percent": 10
        },
        "pledge_amount": {"denom": "unym", "amount": "600"},
        "total_delegation": {"denom": "unym", "amount": "400"},
        "location": {"country_name": "Switzerland"},
        "layer": "1",
        "avg_uptime": 99,
        "stake_saturation": 0.8552
    },
    {
        "mix_id": 2,
        "owner": "n1second",
        "status": "standby",
        "pledge_amount": {"denom": "unym", "amount": "0"},
        "total_delegation": {"denom": "unym", "amount": "0"}
    },
    {
        "mix_id": 3,
        "owner": "n1third",
        "status": "not_found",
        "pledge_amount": {"denom": "unym", "amount": "1"},
        "total_delegation": {"denom": "unym", "amount": "799"}
    }
]"#;

fn listing_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn rows_are_loaded_from_file_in_order() {
    let file = listing_file(LISTING);
    let rows = load_rows(&InputSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].owner, "n1first");
    assert_eq!(rows[0].status, MixnodeStatus::Active);
    assert_eq!(rows[0].bond, 1000.0);
    assert_eq!(rows[0].self_percentage, "60.00");
    assert_eq!(rows[0].profit_percentage, "10%");
    assert_eq!(rows[0].avg_uptime, "99%");
    assert_eq!(rows[0].stake_saturation, "85.52 %");
    assert_eq!(rows[0].location, "Switzerland");

    assert_eq!(rows[1].owner, "n1second");
    assert_eq!(rows[1].bond, 0.0);
    assert_eq!(rows[1].self_percentage, "-");
    assert_eq!(rows[1].location, "");
    assert_eq!(rows[1].stake_saturation, "-");
    assert_eq!(rows[1].avg_uptime, "-");

    assert_eq!(rows[2].status, MixnodeStatus::NotFound);
    assert_eq!(rows[2].self_percentage, "0.13");
}

#[test]
fn malformed_listing_is_an_error() {
    let file = listing_file("[{\"owner\": ");
    assert!(load_rows(&InputSource::File(file.path().to_path_buf())).is_err());
}

#[test]
fn csv_output_has_grid_header() {
    let file = listing_file(LISTING);
    let rows = load_rows(&InputSource::File(file.path().to_path_buf())).unwrap();

    let mut out = Vec::new();
    write_rows(&mut out, &rows, OutputFormat::Csv).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], ROW_COLUMNS.join(","));
    assert!(lines[1].starts_with("n1first,active,n1first,Switzerland,"));
    assert!(lines[1].ends_with(",10%,99%,85.52 %"));
    assert!(lines[2].contains(",0,-,"));
    assert!(lines[3].starts_with("n1third,not_found,n1third,"));
}

#[test]
fn csv_output_for_empty_listing_is_just_the_header() {
    let mut out = Vec::new();
    write_rows(&mut out, &[], OutputFormat::Csv).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().trim_end(), ROW_COLUMNS.join(","));
}

#[test]
fn json_output_uses_grid_field_names() {
    let file = listing_file(LISTING);
    let rows = load_rows(&InputSource::File(file.path().to_path_buf())).unwrap();

    let mut out = Vec::new();
    write_rows(&mut out, &rows, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let first = value[0].as_object().unwrap();
    let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
    let mut expected = ROW_COLUMNS.to_vec();
    keys.sort_unstable();
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert_eq!(value[0]["id"], "n1first");
    assert_eq!(value[1]["self_percentage"], "-");
}

#[test]
fn text_output_contains_every_row() {
    let file = listing_file(LISTING);
    let rows = load_rows(&InputSource::File(file.path().to_path_buf())).unwrap();

    let mut out = Vec::new();
    write_rows(&mut out, &rows, OutputFormat::Text).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Stake Saturation"));
    assert!(out.contains("n1first"));
    assert!(out.contains("n1second"));
    assert!(out.contains("85.52 %"));
}

#[test]
fn summary_outputs() {
    let file = listing_file(LISTING);
    let rows = load_rows(&InputSource::File(file.path().to_path_buf())).unwrap();
    let summary = MixNodeSummary::from_rows(&rows);

    let mut out = Vec::new();
    write_summary(&mut out, &summary, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["activeset"]["active"], 1);
    assert_eq!(value["activeset"]["standby"], 1);
    assert_eq!(value["activeset"]["inactive"], 0);
    assert_eq!(value["activeset"]["not_found"], 1);
    assert_eq!(value["activeset"]["other"], 0);

    let mut out = Vec::new();
    write_summary(&mut out, &summary, OutputFormat::Csv).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "count,active,standby,inactive,not_found,other\n3,1,1,0,1,0\n"
    );
}
