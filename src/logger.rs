use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs a compact stderr logger. `RUST_LOG` wins over `verbose`; with
/// `color` off no ANSI escapes are written.
///
/// Logs go to stderr so that demo output on stdout stays exactly as
/// documented.
pub fn init_cli_logger(verbose: bool, color: bool) {
    let default_filter = if verbose {
        "design_patterns=debug,patterns=debug,info"
    } else {
        "design_patterns=info,patterns=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(std::io::stderr, color))
        .try_init();
}

fn fmt_layer<S, W>(writer: W, color: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(color)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(color: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let layer = fmt_layer(move || writer.clone(), color);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(slug = "proxy", "output mismatch");
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_no_escape_codes_without_color() {
        let line = capture(false);
        assert!(line.contains("WARN"));
        assert!(line.contains("output mismatch"));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_escape_codes_with_color() {
        assert!(capture(true).contains('\x1b'));
    }
}
