use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Installs the global tracing subscriber.
///
/// An unparsable filter falls back to `info` rather than aborting startup.
pub fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {}, using \"info\"", log.filter, e);
        EnvFilter::new("info")
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
