//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for command
//! output. `RUST_LOG` directives, when set, are layered under the verbosity
//! level chosen on the command line.

use tracing::Subscriber;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Target name used for this crate's events
pub const LOG_TARGET: &str = "splitly";

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = subscriber(with_verbosity(filter, verbosity), std::io::stderr).try_init();
}

fn with_verbosity(filter: EnvFilter, verbosity: u8) -> EnvFilter {
    match format!("{}={}", LOG_TARGET, max_level(verbosity)).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Plain `key=value` lines without timestamps
fn subscriber<W>(filter: EnvFilter, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .finish()
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_max_level() {
        assert_eq!(max_level(0), "warn");
        assert_eq!(max_level(1), "info");
        assert_eq!(max_level(2), "debug");
        assert_eq!(max_level(7), "trace");
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(verbosity: u8, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let filter = with_verbosity(EnvFilter::new("warn"), verbosity);

        tracing::subscriber::with_default(subscriber(filter, move || writer.clone()), emit);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_fields_keep_their_names() {
        let output = capture(1, || {
            tracing::info!(target: "splitly::services", member = %"mem-1a2b3c4d", split = 3, "created member");
        });

        assert!(output.contains("created member"));
        assert!(output.contains("member=mem-1a2b3c4d"));
        assert!(output.contains("split=3"));
    }

    #[test]
    fn test_verbosity_filters_events() {
        let output = capture(0, || {
            tracing::info!(target: "splitly::services", "hidden");
            tracing::warn!(target: "splitly::services", "shown");
        });

        assert!(!output.contains("hidden"));
        assert!(output.contains("shown"));
    }

    #[test]
    fn test_set_up_twice_does_not_panic() {
        set_up(1);
        set_up(2);
    }
}
