use std::future::Future;

use tokio::io::AsyncWrite;
use tracing::warn;

use super::config::AppConfig;
use super::error::AppError;
use crate::domain::Cents;
use crate::engine::CommandProcessor;
use crate::io::CsvCommandStream;
use crate::registry::CentralBank;
use crate::storage::NoHistory;
use crate::streaming::{ProcessingReport, ProcessingSession};

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the CLI application with signal handling.
    ///
    /// Creates a buffered stdout writer and passes it to the main function.
    /// Returns the process exit code; errors are reported on stderr.
    pub async fn run<F, Fut>(self, main_fn: F) -> i32
    where
        F: FnOnce(tokio::io::BufWriter<tokio::io::Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(writer) => match result {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{}: {}", self.name, e);
                    1
                }
            },
            signal_code = wait_for_signal() => signal_code,
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let handlers = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        );

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = handlers else {
            warn!("Signal handlers unavailable, running without them");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => 143, // 128 + 15
            _ = sigint.recv() => 130,  // 128 + 2
            _ = sighup.recv() => 129,  // 128 + 1
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Ctrl+C handler unavailable, running without it");
            return std::future::pending().await;
        }
        130
    }
}

/// Process the configured command file and write the final account snapshot.
///
/// The snapshot is written even when a strict run aborts, so partial results
/// are visible; the abort is then reported as an error.
pub async fn run_ledger<W>(config: &AppConfig, writer: W) -> Result<ProcessingReport, AppError>
where
    W: AsyncWrite + Unpin,
{
    let stream = CsvCommandStream::<Cents>::from_file(&config.input).await?;

    let processor = CommandProcessor::new(CentralBank::<Cents, NoHistory>::without_history());
    let mut session = ProcessingSession::new(processor, config.error_policy());
    let report = session.process_stream(stream).await;

    session.bank().snapshot(writer).await?;

    if report.aborted {
        return Err(AppError::Aborted {
            applied: report.applied,
        });
    }

    Ok(report)
}
