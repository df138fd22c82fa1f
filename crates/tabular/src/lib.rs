//! Column-title normalisation for tabular data.
//!
//! Column names coming from instruments and spreadsheets are a mix of
//! `snake_case`, `lower case` and `SHOUTING`. [`title_case`] maps them onto a
//! single convention: the first letter of every word upper-case, the rest
//! lower-case. Anything that is not a letter separates words, so digits and
//! underscores start a new word:
//!
//! ```
//! assert_eq!(tabular::title_case("power_mW"), "Power_Mw");
//! assert_eq!(tabular::title_case("2nd col"), "2Nd Col");
//! ```
//!
//! # Feature Flags
//!
//! - `arrow`: [`title_case_columns`] for Arrow record batches
//! - `csv`: [`title_case_csv`] for CSV streams

#[cfg(feature = "arrow")]
use std::sync::Arc;

#[cfg(feature = "arrow")]
use arrow::datatypes::{Field, Schema};
#[cfg(feature = "arrow")]
use arrow::error::ArrowError;
#[cfg(feature = "arrow")]
use arrow::record_batch::{RecordBatch, RecordBatchOptions};

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Title-case a column name.
///
/// A cased character that follows an uncased one (or starts the string) is
/// upper-cased; every other cased character is lower-cased. Uncased
/// characters are copied as they are.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_cased = false;
    for c in name.chars() {
        if is_cased(c) {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }
    out
}

/// Return `batch` with every column name title-cased.
///
/// The column arrays are shared, not copied. Data types, nullability and
/// metadata of the fields and of the schema are kept; the row count is
/// carried over explicitly so zero-column batches keep their length.
#[cfg(feature = "arrow")]
pub fn title_case_columns(batch: &RecordBatch) -> Result<RecordBatch, ArrowError> {
    let schema = batch.schema();
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|field| field.as_ref().clone().with_name(title_case(field.name())))
        .collect();
    let renamed = Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()));

    let options = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
    RecordBatch::try_new_with_options(renamed, batch.columns().to_vec(), &options)
}

/// Copy CSV from `input` to `output`, title-casing the header row.
///
/// Records are copied byte for byte. Returns the number of data rows
/// written. Input without a header row produces empty output.
#[cfg(feature = "csv")]
pub fn title_case_csv<R, W>(input: R, output: W) -> Result<usize, csv::Error>
where
    R: std::io::Read,
    W: std::io::Write,
{
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(0);
    }
    writer.write_record(headers.iter().map(title_case))?;

    let mut rows = 0;
    for record in reader.byte_records() {
        writer.write_byte_record(&record?)?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}
