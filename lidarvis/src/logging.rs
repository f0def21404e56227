use std::io::Write;

/// log `<timestamp> - <message>` records to stderr
///
/// Defaults to the `info` level, `RUST_LOG` overrides it.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{} - {}", buf.timestamp_millis(), record.args()))
        .init();
}
