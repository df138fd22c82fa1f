//! Blocking tree against a device served from its own thread.

use std::time::Duration;

use dlcpro::blocking::DLCpro;
use dlcpro::StreamConnection;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

fn spawn_device() -> tokio::io::DuplexStream {
    let (device, host) = tokio::io::duplex(4096);
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let (reader, mut writer) = tokio::io::split(device);
            let mut lines = BufReader::new(reader).lines();
            writer.write_all(b"> ").await.unwrap();
            while let Ok(Some(request)) = lines.next_line().await {
                let response = match request.as_str() {
                    "(param-ref 'uptime)" => "42",
                    "(param-ref 'system-label)" => "\"bench 2\"",
                    "(exec 'buzzer:play \"A-C-E\")" => "",
                    _ => "0",
                };
                if writer.write_all(format!("{}\n> ", response).as_bytes()).await.is_err() {
                    break;
                }
            }
        });
    });
    host
}

#[test]
fn blocking_tree_round_trip() {
    let dlc = DLCpro::new(StreamConnection::new(spawn_device())).unwrap();
    dlc.open().unwrap();

    assert_eq!(dlc.block_on(dlc.uptime().get()).unwrap(), 42);
    assert_eq!(dlc.block_on(dlc.system_label().get()).unwrap(), "bench 2");
    dlc.block_on(dlc.buzzer().play("A-C-E")).unwrap();

    dlc.run(Some(Duration::from_millis(5)));
    dlc.poll();
    dlc.close().unwrap();
}
