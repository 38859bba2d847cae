use std::path::Path;

/// File written under the directory given to [`init_tracing`].
pub const TRACE_FILE: &str = "hanshu-trace.jsonl";

/// Handle on the background trace writer.
///
/// Lines are buffered and written by a worker thread; dropping the guard
/// flushes what is left. Keep it alive until the end of `main`.
#[must_use = "dropping the guard flushes and stops trace output"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl TraceGuard {
    /// True for the guard returned by the call that installed the subscriber.
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.worker.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }
}

/// Send `tracing` output as JSON lines to `<log_dir>/hanshu-trace.jsonl`.
///
/// Only the first call installs a subscriber and gets an active guard; later
/// calls, or a process that already has a global subscriber, get an inactive
/// one. The filter comes from `RUST_LOG`, else `hanshu_core=debug`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    let mut worker = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hanshu_core=debug"));

        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
        if installed {
            worker = Some(guard);
        }
    });
    TraceGuard { worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}
