//! Generated tree commands and parameters against an in-memory DLC pro.

use std::sync::Arc;

use dlcpro::{AccessLevel, DLCpro, DecofError, StreamConnection};
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream};

type RequestLog = Arc<Mutex<Vec<String>>>;

fn respond(request: &str) -> String {
    match request {
        "(param-ref 'uptime)" => "86400".into(),
        "(param-ref 'laser1:dl:cc:current-act)" => "120.25".into(),
        "(param-ref 'laser1:type)" => "\"DL pro\"".into(),
        "(param-set! 'laser1:dl:cc:current-set 121.5)" => "0".into(),
        "(param-set! 'laser1:dl:cc:enabled #f)" => "0".into(),
        "(exec 'system-connections)" => "cmd 192.168.1.5\nmon 192.168.1.5\n2".into(),
        "(exec 'service-report)" => "AAEC\n0".into(),
        "(exec 'laser1:recorder:data:get-data 0 3)" => "&AAEC".into(),
        "(exec 'licenses:install \"ABCD-1234\")" => "#t".into(),
        "(exec 'change-ul 2 \"maint\")" => "2".into(),
        "(param-ref 'laser1:dl:lock:lock-tracking)" => "(1.5 -2.25)".into(),
        "(param-set! 'laser1:dl:lock:lockpoint:position '(1.0 2.0))" => "0".into(),
        r if r.starts_with("(exec 'fw-update:upload") => "".into(),
        r if r.starts_with("(exec '") => "".into(),
        _ => "Error: -12 parameter not found".into(),
    }
}

/// Serve the command line; `fw-update:upload` reads a `#`-terminated input stream.
fn spawn_device() -> (DuplexStream, RequestLog) {
    let (device, host) = tokio::io::duplex(64 * 1024);
    let log = RequestLog::default();
    let task_log = log.clone();
    tokio::spawn(async move {
        let (reader, mut writer) = tokio::io::split(device);
        let mut reader = BufReader::new(reader);
        writer.write_all(b"DeCoF Command Line\r\n> ").await.unwrap();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                break;
            }
            let mut request = line.trim_end().to_string();
            if request.starts_with("(exec 'fw-update:upload") {
                let mut input = Vec::new();
                reader.read_until(b'#', &mut input).await.unwrap();
                input.pop();
                request.push('\n');
                request.push_str(&String::from_utf8_lossy(&input));
            }
            let response = if request == "(param-set! 'echo #f)" {
                "0".to_string()
            } else {
                task_log.lock().push(request.clone());
                respond(&request)
            };
            let reply = format!("{}\n> ", response);
            if writer.write_all(reply.as_bytes()).await.is_err() {
                break;
            }
        }
    });
    (host, log)
}

async fn open_tree() -> (DLCpro, RequestLog) {
    let (host, log) = spawn_device();
    let dlc = DLCpro::new(StreamConnection::new(host));
    dlc.open().await.unwrap();
    (dlc, log)
}

#[tokio::test]
async fn parameters_read_and_write() {
    let (dlc, log) = open_tree().await;

    assert_eq!(dlc.uptime().get().await.unwrap(), 86400);
    let cc = dlc.laser1().dl().cc();
    assert_eq!(cc.current_act().get().await.unwrap(), 120.25);
    cc.current_set().set(121.5).await.unwrap();
    cc.enabled().set(false).await.unwrap();
    assert_eq!(dlc.laser1().type_().get().await.unwrap(), "DL pro");

    assert!(matches!(
        dlc.emission().get().await,
        Err(DecofError::Device { code: Some(-12), .. })
    ));

    let log = log.lock();
    assert_eq!(log[2], "(param-set! 'laser1:dl:cc:current-set 121.5)");
    assert_eq!(log[3], "(param-set! 'laser1:dl:cc:enabled #f)");
}

#[tokio::test]
async fn commands_forward_typed_arguments() {
    let (dlc, log) = open_tree().await;

    dlc.net_conf().set_ip("192.168.1.20", "255.255.255.0").await.unwrap();
    dlc.system_messages().mark_as_read(7).await.unwrap();
    dlc.fw_update().upload(&[1, 2, 3], "fw.bin").await.unwrap();
    assert!(dlc.licenses().install("ABCD-1234").await.unwrap());

    let log = log.lock();
    assert_eq!(
        log[0],
        "(exec 'net-conf:set-ip \"192.168.1.20\" \"255.255.255.0\")"
    );
    assert_eq!(log[1], "(exec 'system-messages:mark-as-read 7)");
    assert_eq!(log[2], "(exec 'fw-update:upload \"fw.bin\")\nAQID");
}

#[tokio::test]
async fn commands_decode_output_and_results() {
    let (dlc, _log) = open_tree().await;

    let (connections, count) = dlc.system_connections().await.unwrap();
    assert_eq!(connections, "cmd 192.168.1.5\nmon 192.168.1.5\n");
    assert_eq!(count, 2);

    assert_eq!(dlc.service_report().await.unwrap(), vec![0, 1, 2]);
    assert_eq!(
        dlc.laser1().recorder().data().get_data(0, 3).await.unwrap(),
        vec![0, 1, 2]
    );
}

#[tokio::test]
async fn lock_commands_and_coordinates() {
    let (dlc, log) = open_tree().await;
    let lock = dlc.laser1().dl().lock();

    lock.open().await.unwrap();
    lock.close().await.unwrap();
    assert_eq!(lock.lock_tracking().get().await.unwrap(), (1.5, -2.25));
    lock.lockpoint().position().set(1.0, 2.0).await.unwrap();
    assert!(matches!(
        lock.lockpoint().position().get().await,
        Err(DecofError::Device { code: Some(-12), .. })
    ));

    let log = log.lock();
    assert_eq!(log[0], "(exec 'laser1:dl:lock:open)");
    assert_eq!(log[1], "(exec 'laser1:dl:lock:close)");
    assert_eq!(log[2], "(param-ref 'laser1:dl:lock:lock-tracking)");
    assert_eq!(log[3], "(param-set! 'laser1:dl:lock:lockpoint:position '(1.0 2.0))");
}

#[tokio::test]
async fn change_ul_and_close() {
    let (dlc, _log) = open_tree().await;
    assert_eq!(
        dlc.change_ul(AccessLevel::Maintenance, "maint").await.unwrap(),
        AccessLevel::Maintenance
    );
    dlc.close().await.unwrap();
    assert_eq!(dlc.uptime().get().await.unwrap_err(), DecofError::NotConnected);
}
