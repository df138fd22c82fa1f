//! Blocking client against a device running on its own thread.

mod common;

use std::sync::mpsc;
use std::time::{Duration, Instant};

use common::{spawn_command_line_thread, MonitoringDevice};
use decof_client::blocking::Client;
use decof_client::{AccessLevel, DecofError, StreamConnection, Value};

fn responses(request: &str) -> String {
    match request {
        "(param-ref 'uptime)" => "120".into(),
        "(param-ref 'ul)" => "3".into(),
        "(param-set! 'laser1:dl:cc:current-set 75.5)" => "0".into(),
        "(exec 'system-messages:show-all)" => "boot ok\nlaser on\n0".into(),
        "(exec 'change-ul 4 \"\")" => "4".into(),
        _ => "Error: -1 unknown request".into(),
    }
}

#[test]
fn blocking_round_trip() {
    let (host, log) = spawn_command_line_thread(responses);
    let client = Client::new(StreamConnection::new(host)).unwrap();
    client.open().unwrap();

    assert_eq!(client.get::<i64>("uptime").unwrap(), 120);
    client.set("laser1:dl:cc:current-set", 75.5).unwrap();
    let text: String = client.exec_output("system-messages:show-all", &[]).unwrap();
    assert_eq!(text, "boot ok\nlaser on\n");
    assert_eq!(
        client.change_ul(AccessLevel::Readonly, "").unwrap(),
        AccessLevel::Readonly
    );
    assert!(client.exec("bogus", &[Value::from(1)]).unwrap_err().is_device_error());

    client.close().unwrap();
    assert_eq!(client.get::<i64>("uptime").unwrap_err(), DecofError::NotConnected);

    assert_eq!(
        log.lock().as_slice(),
        [
            "(param-ref 'uptime)",
            "(param-set! 'laser1:dl:cc:current-set 75.5)",
            "(exec 'system-messages:show-all)",
            "(exec 'change-ul 4 \"\")",
            "(exec 'bogus 1)",
        ]
    );
}

#[test]
fn subscribe_without_monitoring_line() {
    let (host, _log) = spawn_command_line_thread(responses);
    let client = Client::new(StreamConnection::new(host)).unwrap();
    client.open().unwrap();
    assert_eq!(
        client.subscribe::<i64>("uptime").unwrap_err(),
        DecofError::MonitoringUnsupported
    );
}

#[test]
fn run_drives_for_the_given_time() {
    let (host, _log) = spawn_command_line_thread(responses);
    let client = Client::new(StreamConnection::new(host)).unwrap();
    client.open().unwrap();

    let start = Instant::now();
    client.run(Some(Duration::from_millis(30)));
    assert!(start.elapsed() >= Duration::from_millis(30));
    client.poll();
    assert_eq!(client.get::<i64>("uptime").unwrap(), 120);
}

#[test]
fn subscription_receives_updates_from_device_thread() {
    let (host, _log) = spawn_command_line_thread(responses);
    let (mut monitor, monitoring_line) = MonitoringDevice::pair();
    let (request_tx, request_rx) = mpsc::channel();
    let (push_tx, push_rx) = mpsc::channel::<&'static str>();
    let device = std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            request_tx.send(monitor.request().await).unwrap();
            monitor.push("2024-05-01T10:00:00.000Z", "uptime", "121").await;
            while let Ok(value) = push_rx.recv() {
                monitor.push("2024-05-01T10:00:01.000Z", "uptime", value).await;
            }
        });
    });

    let client = Client::new(StreamConnection::new(host).with_monitoring_line(monitoring_line)).unwrap();
    client.open().unwrap();
    let mut uptime = client.subscribe::<i64>("uptime").unwrap();
    assert_eq!(uptime.name(), "uptime");

    // The add request only leaves while the runtime is driven.
    let update = uptime.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(update.value, Ok(121));
    assert_eq!(update.name, "uptime");
    assert_eq!(request_rx.try_recv().unwrap(), "(add 'uptime)\r\n");
    assert!(uptime.try_recv().is_none());

    push_tx.send("122").unwrap();
    let deadline = Instant::now() + Duration::from_secs(2);
    let update = loop {
        client.poll();
        if let Some(update) = uptime.try_recv() {
            break update;
        }
        assert!(Instant::now() < deadline, "no update after polling");
        std::thread::sleep(Duration::from_millis(5));
    };
    assert_eq!(update.value, Ok(122));

    uptime.cancel();
    client.close().unwrap();
    drop(push_tx);
    device.join().unwrap();
}
