use log::{Level, LevelFilter, Log, Metadata, Record};
use request_invoker::{invoke, InvokerError, Request};
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[tokio::test]
async fn failed_request_logs_nothing_above_debug() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = invoke(&Request::new(format!("http://127.0.0.1:{port}/api")))
        .await
        .unwrap_err();
    assert!(matches!(err, InvokerError::Transport(_)));

    let records = LOGGER.records.lock().unwrap();
    // the error reaches stderr once, through main
    let loud: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level <= Level::Warn)
        .collect();
    assert!(loud.is_empty(), "unexpected records: {loud:?}");
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Debug && msg.contains("failed")));
}
