//! Human-readable and machine-readable views of a [`Discovery`].

use std::fmt::Write as _;
use std::io::Write;

use serde::Serialize;

use crate::discovery::{Discovery, ScanOutcome};
use crate::WordLengthError;

const RULE_TOP: &str =
    "____________________________________________________________________________________________________";
const RULE_BOTTOM: &str =
    "----------------------------------------------------------------------------------------------------";

/// One line per record, in discovery order: `length witness "spelling"`.
pub fn render_records(discovery: &Discovery) -> String {
    let mut out = String::new();
    for r in discovery.ordered_records() {
        let _ = writeln!(out, "{} {} \"{}\"", r.length, r.witness, r.spelling);
    }
    out
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out, "{RULE_TOP}");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{RULE_BOTTOM}");
    let _ = writeln!(out, "{body}");
}

/// Full summary of a finished scan.
///
/// Ends with two listings of the spellings: in witness order ("jagged
/// cliff") and sorted by length ("neat slope").
pub fn render_debug(discovery: &Discovery) -> String {
    let range = discovery.range();
    let mut out = String::new();

    let status = match discovery.outcome() {
        ScanOutcome::Completed => "FINISHED".to_string(),
        ScanOutcome::Cancelled { reason, next } => {
            format!("STOPPED ({reason:?}) before {next} while")
        }
    };
    let mut table = String::new();
    for (len, r) in discovery.records() {
        let _ = writeln!(table, "{len:>4}: {} \"{}\"", r.witness, r.spelling);
    }
    section(
        &mut out,
        &format!("{status} searching in range {}-{}", range.start(), range.stop()),
        table.trim_end(),
    );
    section(
        &mut out,
        "The character lengths were found in the following order:",
        &format!("{:?}", discovery.discovery_order()),
    );
    section(
        &mut out,
        "The numbers corresponding to the character lengths above are:",
        &format!("{:?}", discovery.witnesses()),
    );
    section(
        &mut out,
        "Difference from element to element in above sequence:",
        &format!("{:?}", discovery.gaps()),
    );

    let missing = discovery.missing_lengths();
    if !missing.is_empty() {
        section(&mut out, "Lengths not found below the maximum:", &format!("{missing:?}"));
    }

    let _ = writeln!(out, "\nJAGGED CLIFF (value ascending)");
    for r in discovery.ordered_records() {
        let _ = writeln!(out, "{}", r.spelling);
    }

    let _ = writeln!(out, "\nNEAT SLOPE (length ascending)");
    for r in discovery.records().values() {
        let _ = writeln!(out, "{}", r.spelling);
    }
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    length: usize,
    witness: u64,
    spelling: &'a str,
    elapsed_ms: u128,
}

/// Write `length,witness,spelling,elapsed_ms` rows in discovery order.
pub fn write_csv<W: Write>(discovery: &Discovery, writer: W) -> Result<(), WordLengthError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in discovery.ordered_records() {
        wtr.serialize(CsvRow {
            length: r.length,
            witness: r.witness,
            spelling: &r.spelling,
            elapsed_ms: r.elapsed.as_millis(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start: u64,
    stop: u64,
    ignore_up_to: usize,
    outcome: ScanOutcome,
    records: Vec<&'a crate::LengthRecord>,
    discovery_order: &'a [usize],
    witnesses: Vec<u64>,
    gaps: Vec<i64>,
    missing: Vec<usize>,
}

/// Serialize the discovery as a JSON document.
pub fn to_json(discovery: &Discovery) -> Result<serde_json::Value, WordLengthError> {
    let range = discovery.range();
    let report = JsonReport {
        start: range.start(),
        stop: range.stop(),
        ignore_up_to: discovery.ignore_up_to(),
        outcome: discovery.outcome(),
        records: discovery.ordered_records().collect(),
        discovery_order: discovery.discovery_order(),
        witnesses: discovery.witnesses(),
        gaps: discovery.gaps(),
        missing: discovery.missing_lengths(),
    };
    Ok(serde_json::to_value(report)?)
}

/// Pretty-print [`to_json`] into `writer`.
pub fn write_json<W: Write>(discovery: &Discovery, mut writer: W) -> Result<(), WordLengthError> {
    serde_json::to_writer_pretty(&mut writer, &to_json(discovery)?)?;
    writer.write_all(b"\n")?;
    Ok(())
}
