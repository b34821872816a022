//! Row projection and CSV serialization of business records.

use placescout_core::BusinessRecord;

/// Column order of the exported file.
pub(crate) const CSV_HEADERS: [&str; 9] = [
    "name",
    "address",
    "phone",
    "email",
    "website",
    "rating",
    "review_count",
    "status",
    "types",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const TYPES_SEPARATOR: &str = " | ";

/// Flattens a record into the fixed column layout. Absent values become
/// empty cells.
pub(crate) fn project_row(record: &BusinessRecord) -> [String; 9] {
    [
        record.name.clone(),
        record.address.clone().unwrap_or_default(),
        record.phone().map(str::to_owned).unwrap_or_default(),
        record.email.clone().unwrap_or_default(),
        record.website().map(str::to_owned).unwrap_or_default(),
        record.rating.map(|r| r.to_string()).unwrap_or_default(),
        record.review_count.map(|c| c.to_string()).unwrap_or_default(),
        record
            .status
            .map(|s| s.as_str().to_owned())
            .unwrap_or_default(),
        record.categories.join(TYPES_SEPARATOR),
    ]
}

/// Serializes records to BOM-prefixed, CRLF-terminated CSV.
///
/// An empty slice yields no bytes at all, not even a header row.
///
/// # Errors
///
/// Returns an error if the CSV writer fails to encode a row or flush.
pub(crate) fn to_csv_bytes(records: &[BusinessRecord]) -> anyhow::Result<Vec<u8>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(project_row(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV buffer: {}", e.error()))
}

/// `{type}_{location}.csv`, lowercased with spaces replaced by underscores.
pub(crate) fn default_file_name(business_type: &str, location: &str) -> String {
    let slug = |s: &str| s.trim().to_lowercase().replace(' ', "_");
    format!("{}_{}.csv", slug(business_type), slug(location))
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
