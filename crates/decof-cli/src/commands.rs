//! Subcommand implementations.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use decof_client::{
    AccessLevel, Client, ClientConfig, DecofType, StreamInput, Subscription, Value, ValueType,
};
use dlcpro::DLCpro;
use tracing::{info, warn};

use crate::Command;

/// Run a subcommand that needs no device.
pub(crate) fn run_offline(command: Command) -> Result<()> {
    match command {
        Command::Country { symbol, by } => country(by, &symbol),
        Command::TitleColumns { input, output } => title_columns(&input, output.as_deref()),
        _ => bail!("Command needs a device"),
    }
}

/// Connect with `config`, run a device subcommand and close.
pub(crate) async fn run_on_device(command: Command, config: &ClientConfig) -> Result<()> {
    let client = connect(config).await?;
    let result = run_device_command(&client, command).await;
    if let Err(e) = client.close().await {
        warn!(error = %e, "Failed to close connection");
    }
    result
}

async fn connect(config: &ClientConfig) -> Result<Client> {
    let connection = config
        .connect()
        .context("No device given; use --host, --serial or a [connection] table")?;
    let client = Client::from_boxed(connection);
    client
        .open()
        .await
        .with_context(|| format!("Failed to connect to {}", client.connection().describe()))?;
    Ok(client)
}

async fn run_device_command(client: &Client, command: Command) -> Result<()> {
    match command {
        Command::Get { name, types } => {
            let values = if let [value_type] = types.as_slice() {
                vec![client.get_value(&name, *value_type).await?]
            } else {
                client.get_values(&name, &types).await?
            };
            println!("{}", join_values(&values));
        }
        Command::Set { name, values } => {
            let mut values = parse_literals(&values)?;
            if values.len() == 1 {
                client.set(&name, values.remove(0)).await?;
            } else {
                client.set_values(&name, &values).await?;
            }
            info!(parameter = %name, "Parameter set");
        }
        Command::Exec {
            name,
            args,
            input,
            output,
            returns,
        } => {
            let args = parse_literals(&args)?;
            exec(client, &name, &args, input.as_deref(), output, returns).await?;
        }
        Command::Monitor {
            name,
            value_type,
            count,
        } => match value_type {
            ValueType::Boolean => watch(client.subscribe::<bool>(&name)?, count).await,
            ValueType::Integer => watch(client.subscribe::<i64>(&name)?, count).await,
            ValueType::Real => watch(client.subscribe::<f64>(&name)?, count).await,
            ValueType::String => watch(client.subscribe::<String>(&name)?, count).await,
            ValueType::Binary => watch(client.subscribe::<Vec<u8>>(&name)?, count).await,
        },
        Command::ChangeUl { level, password } => {
            let current = client.change_ul(level, &password).await?;
            if current != level {
                warn!(requested = %level, current = %current, "User level not changed");
            }
            println!("{}", current);
        }
        Command::Info => info_dlcpro(client.clone()).await?,
        Command::Country { .. } | Command::TitleColumns { .. } => {
            bail!("Command does not use a device")
        }
    }
    Ok(())
}

fn parse_literals(literals: &[String]) -> Result<Vec<Value>> {
    literals
        .iter()
        .map(|text| {
            Value::parse_literal(text).with_context(|| format!("Invalid literal '{}'", text))
        })
        .collect()
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

async fn exec(
    client: &Client,
    name: &str,
    args: &[Value],
    input: Option<&Path>,
    output: bool,
    returns: Option<ValueType>,
) -> Result<()> {
    if let Some(path) = input {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        client.exec_with_input(name, args, StreamInput::from(&data)).await?;
        return Ok(());
    }

    match (output, returns) {
        (false, None) => client.exec(name, args).await?,
        (true, None) => {
            let text: String = client.exec_output(name, args).await?;
            print!("{}", text);
        }
        (false, Some(value_type)) => {
            println!("{}", exec_returning(client, name, args, value_type).await?);
        }
        (true, Some(value_type)) => {
            let (text, value) = exec_output_returning(client, name, args, value_type).await?;
            print!("{}", text);
            println!("{}", value);
        }
    }
    Ok(())
}

async fn exec_returning(
    client: &Client,
    name: &str,
    args: &[Value],
    value_type: ValueType,
) -> Result<Value> {
    Ok(match value_type {
        ValueType::Boolean => client.exec_returning::<bool>(name, args).await?.into(),
        ValueType::Integer => client.exec_returning::<i64>(name, args).await?.into(),
        ValueType::Real => client.exec_returning::<f64>(name, args).await?.into(),
        ValueType::String => client.exec_returning::<String>(name, args).await?.into(),
        ValueType::Binary => client.exec_returning::<Vec<u8>>(name, args).await?.into(),
    })
}

async fn exec_output_returning(
    client: &Client,
    name: &str,
    args: &[Value],
    value_type: ValueType,
) -> Result<(String, Value)> {
    Ok(match value_type {
        ValueType::Boolean => {
            let (text, v) = client.exec_output_returning::<String, bool>(name, args).await?;
            (text, v.into())
        }
        ValueType::Integer => {
            let (text, v) = client.exec_output_returning::<String, i64>(name, args).await?;
            (text, v.into())
        }
        ValueType::Real => {
            let (text, v) = client.exec_output_returning::<String, f64>(name, args).await?;
            (text, v.into())
        }
        ValueType::String => {
            let (text, v) = client.exec_output_returning::<String, String>(name, args).await?;
            (text, v.into())
        }
        ValueType::Binary => {
            let (text, v) = client.exec_output_returning::<String, Vec<u8>>(name, args).await?;
            (text, v.into())
        }
    })
}

/// Print updates until `count` is reached, the device hangs up or Ctrl-C.
async fn watch<T: DecofType>(mut subscription: Subscription<T>, count: Option<usize>) {
    let mut seen = 0;
    while count.map_or(true, |limit| seen < limit) {
        let update = tokio::select! {
            update = subscription.recv() => update,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(update) = update else {
            break;
        };
        match update.value {
            Ok(value) => println!(
                "{} {} {}",
                update.timestamp.to_rfc3339(),
                update.name,
                value.into_value()
            ),
            Err(e) => println!("{} {} error: {}", update.timestamp.to_rfc3339(), update.name, e),
        }
        seen += 1;
    }
}

async fn info_dlcpro(client: Client) -> Result<()> {
    let dlc = DLCpro::from_client(client);
    let level = AccessLevel::try_from(dlc.ul().get().await?)?;
    println!("system-type:   {}", dlc.system_type().get().await?);
    println!("serial-number: {}", dlc.serial_number().get().await?);
    println!("fw-ver:        {}", dlc.fw_ver().get().await?);
    println!("decof-ver:     {}", dlc.decof_ver().get().await?);
    println!("uptime:        {}", dlc.uptime_txt().get().await?);
    println!("user level:    {}", level);
    Ok(())
}

fn country(by: countries::LookupField, symbol: &str) -> Result<()> {
    let Some(country) = countries::get(by, symbol) else {
        bail!("No country with {} '{}'", by, symbol);
    };
    println!("{}", serde_json::to_string_pretty(country)?);
    Ok(())
}

fn is_arrow_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "arrow" | "ipc" | "feather"))
        .unwrap_or(false)
}

fn title_columns(input: &Path, output: Option<&Path>) -> Result<()> {
    let rows = if is_arrow_file(input) {
        let output = output.context("Arrow IPC input needs --output")?;
        title_columns_ipc(input, output)?
    } else {
        let reader = File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
        match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                tabular::title_case_csv(reader, BufWriter::new(file))?
            }
            None => tabular::title_case_csv(reader, std::io::stdout().lock())?,
        }
    };
    info!(input = %input.display(), rows, "Columns renamed");
    Ok(())
}

fn title_columns_ipc(input: &Path, output: &Path) -> Result<usize> {
    let file = File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let reader = FileReader::try_new(BufReader::new(file), None)?;
    let schema = tabular::title_case_columns(&RecordBatch::new_empty(reader.schema()))?.schema();

    let file = File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = FileWriter::try_new(BufWriter::new(file), &schema)?;
    let mut rows = 0;
    for batch in reader {
        let batch = tabular::title_case_columns(&batch?)?;
        rows += batch.num_rows();
        writer.write(&batch)?;
    }
    writer.finish()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Float64Array};
    use arrow::datatypes::{DataType, Field, Schema};

    #[test]
    fn literals_are_typed_by_syntax() {
        let values = parse_literals(&["#t".into(), "3".into(), "2.5".into(), "\"a b\"".into()]).unwrap();
        assert_eq!(
            values,
            [
                Value::Boolean(true),
                Value::Integer(3),
                Value::Real(2.5),
                Value::String("a b".into())
            ]
        );
        assert_eq!(join_values(&values[1..3]), "3 2.5");
    }

    #[test]
    fn arrow_files_are_detected_by_extension() {
        assert!(is_arrow_file(Path::new("scan.arrow")));
        assert!(is_arrow_file(Path::new("scan.IPC")));
        assert!(!is_arrow_file(Path::new("scan.csv")));
        assert!(!is_arrow_file(Path::new("scan")));
    }

    #[test]
    fn country_lookup_reports_missing_codes() {
        assert!(country(countries::LookupField::Cca2, "de").is_ok());
        assert!(country(countries::LookupField::Cca2, "zz").is_err());
    }

    #[test]
    fn csv_file_columns_are_renamed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.csv");
        let output = dir.path().join("titled.csv");
        std::fs::write(&input, "step,power_mW\n0,1.5\n1,1.75\n").unwrap();

        title_columns(&input, Some(&output)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Step,Power_Mw\n0,1.5\n1,1.75\n"
        );
    }

    #[test]
    fn ipc_file_columns_are_renamed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.arrow");
        let output = dir.path().join("titled.arrow");

        let schema = Arc::new(Schema::new(vec![Field::new("power_mW", DataType::Float64, false)]));
        let column: ArrayRef = Arc::new(Float64Array::from(vec![1.5, 1.75]));
        let batch = RecordBatch::try_new(schema.clone(), vec![column]).unwrap();
        let mut writer = FileWriter::try_new(File::create(&input).unwrap(), &schema).unwrap();
        writer.write(&batch).unwrap();
        writer.finish().unwrap();

        assert_eq!(title_columns_ipc(&input, &output).unwrap(), 2);
        assert!(title_columns(&input, None).is_err());

        let reader = FileReader::try_new(File::open(&output).unwrap(), None).unwrap();
        assert_eq!(reader.schema().field(0).name(), "Power_Mw");
        let batches: Vec<RecordBatch> = reader.map(|b| b.unwrap()).collect();
        assert_eq!(batches[0].column(0), batch.column(0));
    }
}
