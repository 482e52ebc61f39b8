use std::path::{Path, PathBuf};

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;

use crate::models::record::MoneyRecord;

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: &'a str,
    #[serde(rename = "Type")]
    kind: &'a str,
    #[serde(rename = "Notes")]
    notes: &'a str,
}

pub fn ensure_csv_extension(path: &str) -> PathBuf {
    if path.ends_with(".csv") {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{path}.csv"))
    }
}

// The amount column is written as stored, not as the formatted display string
pub fn export_records<P: AsRef<Path>>(records: &[MoneyRecord], path: P) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    // Header goes out even when there are no records
    writer.write_record(["Date", "Category", "Amount", "Type", "Notes"])?;

    for record in records {
        writer.serialize(ExportRow {
            date: &record.date,
            category: &record.category,
            amount: &record.amount,
            kind: &record.kind,
            notes: &record.notes,
        })?;
    }

    writer.flush()?;
    Ok(())
}
