// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::output_format::OutputFormat;
use comfy_table::Table;
use nym_explorer_grid::{MixNodeSummary, MixnodeRowType};
use std::io::Write;

/// Column names of the csv export; identical to the serialised row fields.
pub const ROW_COLUMNS: [&str; 12] = [
    "id",
    "status",
    "owner",
    "location",
    "identity_key",
    "bond",
    "self_percentage",
    "host",
    "layer",
    "profit_percentage",
    "avg_uptime",
    "stake_saturation",
];

const SUMMARY_COLUMNS: [&str; 6] = [
    "count",
    "active",
    "standby",
    "inactive",
    "not_found",
    "other",
];

fn row_record(row: &MixnodeRowType) -> [String; 12] {
    [
        row.id.clone(),
        row.status.to_string(),
        row.owner.clone(),
        row.location.clone(),
        row.identity_key.clone(),
        row.bond.to_string(),
        row.self_percentage.clone(),
        row.host.clone(),
        row.layer.clone(),
        row.profit_percentage.clone(),
        row.avg_uptime.clone(),
        row.stake_saturation.clone(),
    ]
}

fn summary_record(summary: &MixNodeSummary) -> [String; 6] {
    [
        summary.count.to_string(),
        summary.activeset.active.to_string(),
        summary.activeset.standby.to_string(),
        summary.activeset.inactive.to_string(),
        summary.activeset.not_found.to_string(),
        summary.activeset.other.to_string(),
    ]
}

pub fn rows_table(rows: &[MixnodeRowType]) -> Table {
    let mut table = Table::new();

    table.set_header(vec![
        "Owner",
        "Status",
        "Location",
        "Identity Key",
        "Bond",
        "Self %",
        "Host",
        "Layer",
        "Profit Margin",
        "Avg Uptime",
        "Stake Saturation",
    ]);
    for row in rows {
        table.add_row(vec![
            row.owner.clone(),
            row.status.to_string(),
            row.location.clone(),
            row.identity_key.clone(),
            row.bond.to_string(),
            row.self_percentage.clone(),
            row.host.clone(),
            row.layer.clone(),
            row.profit_percentage.clone(),
            row.avg_uptime.clone(),
            row.stake_saturation.clone(),
        ]);
    }
    table
}

pub fn summary_table(summary: &MixNodeSummary) -> Table {
    let mut table = Table::new();

    table.set_header(vec![
        "Total",
        "Active",
        "Standby",
        "Inactive",
        "Not Found",
        "Other",
    ]);
    table.add_row(summary_record(summary).to_vec());
    table
}

fn write_csv<W, const N: usize>(
    writer: W,
    header: [&str; N],
    records: impl IntoIterator<Item = [String; N]>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header)?;
    for record in records {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_rows<W: Write>(
    mut writer: W,
    rows: &[MixnodeRowType],
    output: OutputFormat,
) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => writeln!(writer, "{}", rows_table(rows))?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string_pretty(rows)?)?,
        OutputFormat::Csv => write_csv(writer, ROW_COLUMNS, rows.iter().map(row_record))?,
    }
    Ok(())
}

pub fn write_summary<W: Write>(
    mut writer: W,
    summary: &MixNodeSummary,
    output: OutputFormat,
) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => writeln!(writer, "{}", summary_table(summary))?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string_pretty(summary)?)?,
        OutputFormat::Csv => write_csv(writer, SUMMARY_COLUMNS, [summary_record(summary)])?,
    }
    Ok(())
}
