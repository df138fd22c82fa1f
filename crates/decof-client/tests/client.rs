//! Client behaviour against an in-memory device.

mod common;

use std::time::Duration;

use common::{spawn_command_line, spawn_command_line_thread, MonitoringDevice, QueuedConnection};
use decof_client::{
    AccessLevel, Client, DecofError, StreamConnection, StreamInput, Value, ValueType,
};
use tracing_test::traced_test;

fn dlc_responses(request: &str) -> String {
    match request {
        "(param-ref 'uptime)" => "3600".into(),
        "(param-ref 'emission)" => "#t".into(),
        "(param-ref 'laser1:dl:cc:current-act)" => "89.31".into(),
        "(param-ref 'system-label)" => "\"lab \\\"3\\\" laser\"".into(),
        "(param-ref 'laser1:recorder:data)" => "&AQID".into(),
        "(param-ref 'laser1:scan:range)" => "(1.5 \"triangle\" #f)".into(),
        "(param-ref 'missing)" => "Error: -12 parameter not found".into(),
        "(param-ref 'ul)" => "3".into(),
        r#"(param-set! 'system-label "lab \"4\"")"# => "0".into(),
        "(param-set! 'laser1:dl:cc:current-set 90.0)" => "0".into(),
        "(param-set! 'laser1:dl:cc:enabled #t)" => "-3".into(),
        "(param-set! 'laser1:scan:range '(1.5 \"sine\"))" => "0".into(),
        "(exec 'laser1:dl:cc:reset)" => "".into(),
        "(exec 'laser1:wide-scan:start 1 2.5 #t)" => "".into(),
        "(exec 'system-health-txt)" => "fan ok\r\ntemperature ok\n0".into(),
        "(exec 'service-report)" => "AQID\nBAU=\n0".into(),
        "(exec 'laser1:recorder:count)" => "17".into(),
        "(exec 'locked)" => "error: 5 command locked".into(),
        "(exec 'change-ul 1 \"secret\")" => "1".into(),
        "(exec 'change-ul 2 \"wrong\")" => "3".into(),
        r => {
            if r.starts_with("(exec 'upload") {
                "0".into()
            } else {
                "Error: -1 unknown request".into()
            }
        }
    }
}

async fn open_client() -> (Client, common::RequestLog) {
    let (host, log) = spawn_command_line(dlc_responses);
    let client = Client::new(StreamConnection::new(host).with_timeout(Duration::from_secs(2)));
    client.open().await.unwrap();
    (client, log)
}

async fn open_monitored_client() -> (Client, common::RequestLog, MonitoringDevice) {
    let (host, log) = spawn_command_line(dlc_responses);
    let (monitor, monitor_host) = MonitoringDevice::pair();
    let client = Client::new(
        StreamConnection::new(host)
            .with_monitoring_line(monitor_host)
            .with_timeout(Duration::from_secs(2)),
    );
    client.open().await.unwrap();
    (client, log, monitor)
}

#[tokio::test]
async fn requests_before_open_fail() {
    let (host, _log) = spawn_command_line(dlc_responses);
    let client = Client::new(StreamConnection::new(host));
    assert!(!client.is_open().await);
    assert_eq!(client.get::<i64>("uptime").await.unwrap_err(), DecofError::NotConnected);
}

#[tokio::test]
async fn get_decodes_each_type() {
    let (client, log) = open_client().await;
    assert!(client.is_open().await);

    assert_eq!(client.get::<i64>("uptime").await.unwrap(), 3600);
    assert!(client.get::<bool>("emission").await.unwrap());
    assert_eq!(client.get::<f64>("laser1:dl:cc:current-act").await.unwrap(), 89.31);
    assert_eq!(client.get::<String>("system-label").await.unwrap(), "lab \"3\" laser");
    assert_eq!(client.get::<Vec<u8>>("laser1:recorder:data").await.unwrap(), vec![1, 2, 3]);
    assert_eq!(
        client.get_value("uptime", ValueType::Integer).await.unwrap(),
        Value::Integer(3600)
    );

    assert_eq!(log.lock()[0], "(param-ref 'uptime)");
}

#[tokio::test]
async fn get_reports_device_and_type_errors() {
    let (client, _log) = open_client().await;

    match client.get::<i64>("missing").await.unwrap_err() {
        DecofError::Device { code, message } => {
            assert_eq!(code, Some(-12));
            assert_eq!(message, "parameter not found");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(matches!(
        client.get::<i64>("emission").await,
        Err(DecofError::Value { expected: ValueType::Integer, .. })
    ));
    // A failed request leaves the line usable.
    assert_eq!(client.get::<i64>("uptime").await.unwrap(), 3600);
}

#[tokio::test]
async fn get_values_splits_lists() {
    let (client, _log) = open_client().await;
    let types = [ValueType::Real, ValueType::String, ValueType::Boolean];
    let values = client.get_values("laser1:scan:range", &types).await.unwrap();
    assert_eq!(
        values,
        vec![Value::Real(1.5), Value::String("triangle".into()), Value::Boolean(false)]
    );

    let err = client
        .get_values("laser1:scan:range", &[ValueType::Real])
        .await
        .unwrap_err();
    assert!(matches!(err, DecofError::Protocol(_)));
}

#[tokio::test]
async fn set_checks_status() {
    let (client, log) = open_client().await;

    client.set("system-label", "lab \"4\"").await.unwrap();
    client.set("laser1:dl:cc:current-set", 90.0).await.unwrap();
    assert_eq!(
        client.set("laser1:dl:cc:enabled", true).await.unwrap_err(),
        DecofError::SetFailed {
            name: "laser1:dl:cc:enabled".into(),
            status: -3
        }
    );
    client
        .set_values(
            "laser1:scan:range",
            &[Value::Real(1.5), Value::String("sine".into())],
        )
        .await
        .unwrap();

    let log = log.lock();
    assert_eq!(log[0], r#"(param-set! 'system-label "lab \"4\"")"#);
    assert_eq!(log[3], "(param-set! 'laser1:scan:range '(1.5 \"sine\"))");
}

#[tokio::test]
async fn exec_variants() {
    let (client, log) = open_client().await;

    client.exec("laser1:dl:cc:reset", &[]).await.unwrap();
    client
        .exec(
            "laser1:wide-scan:start",
            &[Value::Integer(1), Value::Real(2.5), Value::Boolean(true)],
        )
        .await
        .unwrap();
    assert_eq!(
        client.exec_returning::<i64>("laser1:recorder:count", &[]).await.unwrap(),
        17
    );

    let (text, status): (String, i64) = client
        .exec_output_returning("system-health-txt", &[])
        .await
        .unwrap();
    assert_eq!(text, "fan ok\r\ntemperature ok\n");
    assert_eq!(status, 0);

    let report: Vec<u8> = client.exec_output("service-report", &[]).await.unwrap();
    assert_eq!(report, vec![1, 2, 3, 4, 5]);

    let payload: &[u8] = &[0xde, 0xad];
    client
        .exec_with_input("upload", &[], StreamInput::from(payload))
        .await
        .unwrap();

    assert!(client.exec("locked", &[]).await.unwrap_err().is_device_error());

    let log = log.lock();
    assert_eq!(log[1], "(exec 'laser1:wide-scan:start 1 2.5 #t)");
    assert_eq!(log[5], "(exec 'upload)\n3q0=");
}

#[tokio::test]
async fn change_ul_without_password_reads_level() {
    let (client, log) = open_client().await;
    let level = client.change_ul(AccessLevel::Service, "").await.unwrap();
    assert_eq!(level, AccessLevel::Normal);
    assert_eq!(log.lock().as_slice(), ["(param-ref 'ul)"]);
}

#[tokio::test]
async fn change_ul_switches_monitoring_line() {
    let (client, log, mut monitor) = open_monitored_client().await;

    let level = client.change_ul(AccessLevel::Service, "secret").await.unwrap();
    assert_eq!(level, AccessLevel::Service);
    assert_eq!(log.lock()[0], "(exec 'change-ul 1 \"secret\")");
    assert_eq!(monitor.request().await, "(change-ul 1 \"secret\")\r\n");

    // Rejected change: the device stays at normal, monitoring line untouched.
    let level = client.change_ul(AccessLevel::Maintenance, "wrong").await.unwrap();
    assert_eq!(level, AccessLevel::Normal);
    assert!(monitor.is_quiet().await);
}

#[tokio::test]
async fn subscriptions_follow_reference_count() {
    let (client, _log, mut monitor) = open_monitored_client().await;

    let mut first = client.subscribe::<f64>("laser1:dl:cc:current-act").unwrap();
    let second = client.subscribe::<f64>("laser1:dl:cc:current-act").unwrap();
    assert_eq!(monitor.request().await, "(add 'laser1:dl:cc:current-act)\r\n");
    assert!(monitor.is_quiet().await);

    monitor.push_raw("DeCoF Monitoring Line\r\n> ").await;
    monitor
        .push("2024-05-01T10:00:00.250Z", "laser1:dl:cc:current-act", "90.5")
        .await;
    let update = tokio::time::timeout(Duration::from_secs(2), first.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(update.name, "laser1:dl:cc:current-act");
    assert_eq!(update.value.unwrap(), 90.5);

    drop(second);
    assert!(monitor.is_quiet().await);
    first.cancel();
    assert_eq!(monitor.request().await, "(remove 'laser1:dl:cc:current-act)\r\n");
}

#[tokio::test]
async fn subscription_reports_device_errors() {
    let (client, _log, mut monitor) = open_monitored_client().await;
    let mut sub = client.subscribe::<i64>("uptime").unwrap();
    monitor.request().await;

    monitor
        .push("2024-05-01T10:00:01.000Z", "uptime", "Error: -11 not readable")
        .await;
    let update = sub.recv().await.unwrap();
    assert!(update.value.unwrap_err().is_device_error());
}

#[tokio::test]
async fn subscription_ends_when_device_hangs_up() {
    let (client, _log, mut monitor) = open_monitored_client().await;
    let mut sub = client.subscribe::<bool>("emission").unwrap();
    monitor.request().await;

    monitor.hang_up().await;
    let end = tokio::time::timeout(Duration::from_secs(2), sub.recv()).await.unwrap();
    assert!(end.is_none());
}

#[tokio::test]
async fn subscribe_needs_monitoring_line() {
    let (client, _log) = open_client().await;
    assert_eq!(
        client.subscribe::<bool>("emission").unwrap_err(),
        DecofError::MonitoringUnsupported
    );

    let (host, _log) = spawn_command_line(dlc_responses);
    let (_monitor, monitor_host) = MonitoringDevice::pair();
    let closed = Client::new(StreamConnection::new(host).with_monitoring_line(monitor_host));
    assert_eq!(closed.subscribe::<bool>("emission").unwrap_err(), DecofError::NotConnected);
}

#[tokio::test]
async fn close_ends_subscriptions() {
    let (client, _log, _monitor) = open_monitored_client().await;
    let mut sub = client.subscribe::<bool>("emission").unwrap();
    client.close().await.unwrap();

    assert!(!client.is_open().await);
    assert!(sub.recv().await.is_none());
    assert_eq!(client.get::<i64>("uptime").await.unwrap_err(), DecofError::NotConnected);
}

#[tokio::test]
async fn timeout_invalidates_command_line() {
    // The device runs on its own thread so its delay does not stall the client's timer.
    let (host, _log) = spawn_command_line_thread(|request| {
        if request == "(param-ref 'slow)" {
            std::thread::sleep(Duration::from_millis(300));
        }
        "1".to_string()
    });
    let client = Client::new(StreamConnection::new(host).with_timeout(Duration::from_millis(100)));
    client.open().await.unwrap();

    assert!(matches!(client.get::<i64>("slow").await, Err(DecofError::Timeout(_))));
    assert_eq!(client.get::<i64>("uptime").await.unwrap_err(), DecofError::NotConnected);
}

#[tokio::test]
async fn reopen_replaces_monitoring_line() {
    let (first_line, _first_log) = spawn_command_line_thread(|request| {
        if request == "(param-ref 'slow)" {
            std::thread::sleep(Duration::from_millis(300));
        }
        "1".to_string()
    });
    let (first_monitor, first_monitor_host) = MonitoringDevice::pair();
    let (second_line, _second_log) = spawn_command_line(dlc_responses);
    let (mut second_monitor, second_monitor_host) = MonitoringDevice::pair();
    let client = Client::new(QueuedConnection::new(
        vec![(first_line, first_monitor_host), (second_line, second_monitor_host)],
        Duration::from_millis(100),
    ));

    client.open().await.unwrap();
    let mut old = client.subscribe::<bool>("emission").unwrap();
    assert!(matches!(client.get::<i64>("slow").await, Err(DecofError::Timeout(_))));
    assert!(!client.is_open().await);

    client.open().await.unwrap();
    assert!(old.recv().await.is_none());

    let mut uptime = client.subscribe::<i64>("uptime").unwrap();
    assert_eq!(second_monitor.request().await, "(add 'uptime)\r\n");

    // The first monitoring line ending must not affect the new session.
    drop(first_monitor);
    tokio::time::sleep(Duration::from_millis(50)).await;

    second_monitor.push("2024-05-01T10:00:02.000Z", "uptime", "42").await;
    let update = tokio::time::timeout(Duration::from_secs(2), uptime.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(update.value.unwrap(), 42);
    assert_eq!(client.get::<i64>("uptime").await.unwrap(), 3600);
}

#[tokio::test]
#[traced_test]
async fn open_and_close_are_logged() {
    let (client, _log) = open_client().await;
    client.get::<i64>("uptime").await.unwrap();
    client.close().await.unwrap();

    assert!(logs_contain("Connected to DeCoF device"));
    assert!(logs_contain("DeCoF request"));
    assert!(logs_contain("Disconnected from DeCoF device"));
}
