//! Title-casing keeps data intact while renaming every column.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use tabular::{title_case_columns, title_case_csv};

fn scan_batch() -> RecordBatch {
    let mut unit = HashMap::new();
    unit.insert("unit".to_string(), "mW".to_string());
    let mut run = HashMap::new();
    run.insert("run_uid".to_string(), "scan-0042".to_string());

    let schema = Schema::new_with_metadata(
        vec![
            Field::new("step", DataType::Int64, false),
            Field::new("power_mW", DataType::Float64, true).with_metadata(unit),
            Field::new("scan mode", DataType::Utf8, true),
        ],
        run,
    );
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(vec![0, 1, 2])),
        Arc::new(Float64Array::from(vec![Some(1.5), None, Some(2.25)])),
        Arc::new(StringArray::from(vec!["triangle", "sine", "triangle"])),
    ];
    RecordBatch::try_new(Arc::new(schema), columns).unwrap()
}

#[test]
fn record_batch_columns_are_renamed() {
    let batch = scan_batch();
    let renamed = title_case_columns(&batch).unwrap();

    let names: Vec<&str> = renamed
        .schema_ref()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();
    assert_eq!(names, ["Step", "Power_Mw", "Scan Mode"]);
    assert_eq!(renamed.num_columns(), batch.num_columns());
    assert_eq!(renamed.num_rows(), batch.num_rows());
    for (before, after) in batch.columns().iter().zip(renamed.columns()) {
        assert_eq!(before, after);
    }
}

#[test]
fn record_batch_keeps_types_nullability_and_metadata() {
    let batch = scan_batch();
    let renamed = title_case_columns(&batch).unwrap();
    let schema = renamed.schema();

    assert_eq!(schema.metadata().get("run_uid").map(String::as_str), Some("scan-0042"));
    let step = schema.field(0);
    assert_eq!(step.data_type(), &DataType::Int64);
    assert!(!step.is_nullable());
    let power = schema.field(1);
    assert!(power.is_nullable());
    assert_eq!(power.metadata().get("unit").map(String::as_str), Some("mW"));
}

#[test]
fn zero_column_batch_keeps_row_count() {
    let options = RecordBatchOptions::new().with_row_count(Some(5));
    let batch =
        RecordBatch::try_new_with_options(Arc::new(Schema::empty()), vec![], &options).unwrap();
    let renamed = title_case_columns(&batch).unwrap();
    assert_eq!(renamed.num_columns(), 0);
    assert_eq!(renamed.num_rows(), 5);
}

#[test]
fn csv_header_is_renamed_and_rows_copied() {
    let input = "step,power_mW,scan mode\n0,1.5,triangle\n1,,\"sine, fast\"\n";
    let mut output = Vec::new();
    let rows = title_case_csv(input.as_bytes(), &mut output).unwrap();

    assert_eq!(rows, 2);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Step,Power_Mw,Scan Mode\n0,1.5,triangle\n1,,\"sine, fast\"\n"
    );
}

#[test]
fn csv_without_rows() {
    let mut output = Vec::new();
    assert_eq!(title_case_csv("a_b\n".as_bytes(), &mut output).unwrap(), 0);
    assert_eq!(output, b"A_B\n");

    let mut output = Vec::new();
    assert_eq!(title_case_csv("".as_bytes(), &mut output).unwrap(), 0);
    assert!(output.is_empty());
}

#[test]
fn csv_rejects_ragged_rows() {
    let mut output = Vec::new();
    assert!(title_case_csv("a,b\n1,2,3\n".as_bytes(), &mut output).is_err());
}
