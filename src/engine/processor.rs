use tracing::{debug, info};

use crate::domain::{AccountId, AmountType};
use crate::io::{AccountRef, Command};
use crate::registry::{CentralBank, RegistryError};
use crate::storage::HistoryRecorder;

/// Routes parsed commands to the central bank
pub struct CommandProcessor<A, R>
where
    A: AmountType,
    R: HistoryRecorder<A>,
{
    bank: CentralBank<A, R>,
}

impl<A, R> CommandProcessor<A, R>
where
    A: AmountType,
    R: HistoryRecorder<A>,
{
    pub fn new(bank: CentralBank<A, R>) -> Self {
        Self { bank }
    }

    /// Apply a single command
    pub fn process_command(&self, command: Command<A>) -> Result<(), RegistryError> {
        debug!(op = command.name(), "Processing command");

        match command {
            Command::Open {
                email,
                account_type,
                starting_balance,
            } => {
                let account_id = self
                    .bank
                    .create_account(&email, starting_balance, account_type)?;
                info!(%account_id, "Opened account from command");
                Ok(())
            }
            Command::Deposit { account, amount } => {
                self.bank.deposit(self.resolve(&account)?, amount)
            }
            Command::Withdraw { account, amount } => {
                self.bank.withdraw(self.resolve(&account)?, amount)
            }
            Command::Transfer { from, to, amount } => {
                let from = self.resolve(&from)?;
                let to = self.resolve(&to)?;
                self.bank.transfer(from, to, amount)
            }
            Command::Close { account } => {
                let closed = self.bank.close_account(self.resolve(&account)?)?;
                info!(
                    account_id = %closed.account_id(),
                    payout = %closed.balance(),
                    "Closed account from command"
                );
                Ok(())
            }
        }
    }

    /// Get reference to the bank for snapshot operations
    pub fn bank(&self) -> &CentralBank<A, R> {
        &self.bank
    }

    pub fn into_bank(self) -> CentralBank<A, R> {
        self.bank
    }

    fn resolve(&self, account: &AccountRef) -> Result<AccountId, RegistryError> {
        match account {
            AccountRef::Id(id) => Ok(*id),
            AccountRef::Owner {
                email,
                account_type,
            } => self.bank.resolve_account_id(email, *account_type),
        }
    }
}
