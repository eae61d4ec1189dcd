use futures::{Stream, StreamExt};

use super::error::ErrorPolicy;
use crate::domain::AmountType;
use crate::engine::CommandProcessor;
use crate::io::{Command, IoError};
use crate::registry::CentralBank;
use crate::storage::HistoryRecorder;

/// Outcome of processing one command stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingReport {
    pub applied: usize,
    pub rejected: usize,
    pub aborted: bool,
}

/// Single stream processing session
pub struct ProcessingSession<A, R, P>
where
    A: AmountType,
    R: HistoryRecorder<A>,
    P: ErrorPolicy,
{
    processor: CommandProcessor<A, R>,
    error_policy: P,
}

impl<A, R, P> ProcessingSession<A, R, P>
where
    A: AmountType,
    R: HistoryRecorder<A>,
    P: ErrorPolicy,
{
    /// Create a new processing session
    pub fn new(processor: CommandProcessor<A, R>, error_policy: P) -> Self {
        Self {
            processor,
            error_policy,
        }
    }

    /// Process a stream of commands until it ends or the policy aborts
    pub async fn process_stream<S>(&mut self, mut stream: S) -> ProcessingReport
    where
        S: Stream<Item = Result<Command<A>, IoError>> + Unpin,
    {
        let mut report = ProcessingReport::default();

        while let Some(result) = stream.next().await {
            let keep_going = match result {
                Ok(command) => match self.processor.process_command(command) {
                    Ok(()) => {
                        report.applied += 1;
                        true
                    }
                    Err(e) => {
                        report.rejected += 1;
                        self.error_policy.handle_command_error(e)
                    }
                },
                Err(e) => {
                    report.rejected += 1;
                    self.error_policy.handle_io_error(e)
                }
            };

            if !keep_going {
                report.aborted = true;
                break;
            }
        }

        report
    }

    /// Get a reference to the underlying bank
    pub fn bank(&self) -> &CentralBank<A, R> {
        self.processor.bank()
    }

    /// Consume the session and return the processor
    pub fn into_processor(self) -> CommandProcessor<A, R> {
        self.processor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, AccountType, Cents};
    use crate::io::AccountRef;
    use crate::storage::NoHistory;
    use crate::streaming::error::{AbortOnError, SilentSkip};
    use futures::stream;

    fn session<P: ErrorPolicy>(policy: P) -> ProcessingSession<Cents, NoHistory, P> {
        ProcessingSession::new(CommandProcessor::new(CentralBank::without_history()), policy)
    }

    fn open(email: &str, raw: i64) -> Result<Command<Cents>, IoError> {
        Ok(Command::Open {
            email: email.to_string(),
            account_type: AccountType::Checking,
            starting_balance: Cents::from_raw(raw),
        })
    }

    fn withdraw(sequence: u64, raw: i64) -> Result<Command<Cents>, IoError> {
        Ok(Command::Withdraw {
            account: AccountRef::Id(AccountId::new(sequence, AccountType::Checking)),
            amount: Cents::from_raw(raw),
        })
    }

    #[tokio::test]
    async fn processes_valid_commands() {
        let mut session = session(SilentSkip);

        let commands = vec![open("a@b.com", 10_000), open("c@d.com", 20_000), withdraw(2, 500)];
        let report = session.process_stream(stream::iter(commands)).await;

        assert_eq!(
            report,
            ProcessingReport {
                applied: 3,
                rejected: 0,
                aborted: false,
            }
        );
        assert_eq!(
            session
                .bank()
                .check_balance(AccountId::new(2, AccountType::Checking))
                .unwrap(),
            Cents::from_raw(19_500)
        );
    }

    #[tokio::test]
    async fn skip_policy_continues_past_failures() {
        let mut session = session(SilentSkip);

        let commands = vec![
            open("a@b.com", 100),
            withdraw(1, 500),
            Err(IoError::InvalidOperation("refund".to_string())),
            withdraw(1, 50),
        ];
        let report = session.process_stream(stream::iter(commands)).await;

        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected, 2);
        assert!(!report.aborted);
        assert_eq!(
            session
                .bank()
                .check_balance(AccountId::new(1, AccountType::Checking))
                .unwrap(),
            Cents::from_raw(50)
        );
    }

    #[tokio::test]
    async fn abort_policy_stops_at_first_failure() {
        let mut session = session(AbortOnError);

        let commands = vec![open("a@b.com", 100), withdraw(1, 500), withdraw(1, 50)];
        let report = session.process_stream(stream::iter(commands)).await;

        assert_eq!(report.applied, 1);
        assert_eq!(report.rejected, 1);
        assert!(report.aborted);
        assert_eq!(
            session
                .into_processor()
                .bank()
                .check_balance(AccountId::new(1, AccountType::Checking))
                .unwrap(),
            Cents::from_raw(100)
        );
    }
}
