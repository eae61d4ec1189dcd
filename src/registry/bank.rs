use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::{DashMap, Entry};
use parking_lot::Mutex;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::error::RegistryError;
use crate::domain::{
    Account, AccountId, AccountType, AmountType, DomainError, Email, HistoryEntry, OperationKind,
    apply_deposit, apply_transfer, apply_withdrawal,
};
use crate::storage::{HistoryRecorder, NoHistory};

/// Shared handle to one account; `None` once the account has been closed
type Slot<A> = Arc<Mutex<Option<Account<A>>>>;

fn not_found(account_id: AccountId) -> RegistryError {
    RegistryError::AccountNotFound(account_id.to_string())
}

/// The central bank: owns every account, assigns ids and routes operations.
///
/// Each account sits behind its own mutex inside a `DashMap`, so operations on
/// different accounts proceed in parallel. Transfers take both account locks in
/// ascending id order.
pub struct CentralBank<A: AmountType, R: HistoryRecorder<A> = NoHistory> {
    accounts: DashMap<AccountId, Slot<A>>,
    known_emails: DashMap<Email, usize>,
    next_sequence: AtomicU64,
    history: R,
}

impl<A: AmountType> CentralBank<A, NoHistory> {
    /// Create a registry that keeps no history
    pub fn without_history() -> Self {
        Self::new(NoHistory)
    }
}

impl<A: AmountType> Default for CentralBank<A, NoHistory> {
    fn default() -> Self {
        Self::without_history()
    }
}

impl<A: AmountType, R: HistoryRecorder<A>> CentralBank<A, R> {
    /// Create an empty registry reporting mutations to `history`
    pub fn new(history: R) -> Self {
        Self {
            accounts: DashMap::new(),
            known_emails: DashMap::new(),
            next_sequence: AtomicU64::new(0),
            history,
        }
    }

    /// The history recorder this registry reports to
    pub fn history(&self) -> &R {
        &self.history
    }

    /// Open a new account and return its freshly assigned id
    pub fn create_account(
        &self,
        email: &str,
        starting_balance: A,
        account_type: AccountType,
    ) -> Result<AccountId, RegistryError> {
        // Ids are reserved only for requests that will succeed
        let email = Email::parse(email)?;
        if starting_balance < A::zero() {
            return Err(DomainError::InvalidAmount.into());
        }

        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let account_id = AccountId::new(sequence, account_type);

        let account = Account::open(account_id, email.clone(), starting_balance)?;

        info!(%account_id, %email, balance = %starting_balance, "Account created");

        self.history.record(HistoryEntry::now(
            account_id,
            OperationKind::Open,
            starting_balance,
            starting_balance,
        ));

        // Owner count and account map change together under the email's entry
        let mut owned = self.known_emails.entry(email).or_insert(0);
        self.accounts
            .insert(account_id, Arc::new(Mutex::new(Some(account))));
        *owned += 1;

        Ok(account_id)
    }

    /// Snapshot of the account with the given id
    pub fn find_account(&self, account_id: AccountId) -> Result<Account<A>, RegistryError> {
        let slot = self.slot(account_id)?;
        let guard = slot.lock();
        guard.as_ref().cloned().ok_or_else(|| not_found(account_id))
    }

    /// Id of the earliest-registered account owned by `email` with the given type
    pub fn resolve_account_id(
        &self,
        email: &str,
        account_type: AccountType,
    ) -> Result<AccountId, RegistryError> {
        self.accounts
            .iter()
            .filter(|entry| entry.key().account_type() == account_type)
            .filter(|entry| {
                entry
                    .value()
                    .lock()
                    .as_ref()
                    .is_some_and(|account| account.email().as_str() == email)
            })
            .map(|entry| *entry.key())
            .min()
            .ok_or_else(|| RegistryError::AccountNotFound(format!("{email} ({account_type})")))
    }

    pub fn check_balance(&self, account_id: AccountId) -> Result<A, RegistryError> {
        self.with_account(account_id, |account| Ok(account.balance()))
    }

    pub fn check_balance_by_owner(
        &self,
        email: &str,
        account_type: AccountType,
    ) -> Result<A, RegistryError> {
        self.check_balance(self.resolve_account_id(email, account_type)?)
    }

    pub fn deposit(&self, account_id: AccountId, amount: A) -> Result<(), RegistryError> {
        debug!(%account_id, %amount, "Processing deposit");

        self.with_account(account_id, |account| {
            apply_deposit(account, amount)?;
            self.history.record(HistoryEntry::now(
                account_id,
                OperationKind::Deposit,
                amount,
                account.balance(),
            ));
            Ok(())
        })
    }

    pub fn deposit_by_owner(
        &self,
        email: &str,
        account_type: AccountType,
        amount: A,
    ) -> Result<(), RegistryError> {
        self.deposit(self.resolve_account_id(email, account_type)?, amount)
    }

    pub fn withdraw(&self, account_id: AccountId, amount: A) -> Result<(), RegistryError> {
        debug!(%account_id, %amount, "Processing withdrawal");

        self.with_account(account_id, |account| {
            apply_withdrawal(account, amount)?;
            self.history.record(HistoryEntry::now(
                account_id,
                OperationKind::Withdrawal,
                amount,
                account.balance(),
            ));
            Ok(())
        })
    }

    pub fn withdraw_by_owner(
        &self,
        email: &str,
        account_type: AccountType,
        amount: A,
    ) -> Result<(), RegistryError> {
        self.withdraw(self.resolve_account_id(email, account_type)?, amount)
    }

    /// Move funds between two registered accounts as one unit
    pub fn transfer(&self, from: AccountId, to: AccountId, amount: A) -> Result<(), RegistryError> {
        debug!(%from, %to, %amount, "Processing transfer");

        if from == to {
            warn!(account_id = %from, "Transfer to same account rejected");
            return Err(DomainError::SameAccount.into());
        }

        let source_slot = self.slot(from)?;
        let target_slot = self.slot(to)?;

        let (mut source_guard, mut target_guard) = if from < to {
            let source = source_slot.lock();
            (source, target_slot.lock())
        } else {
            let target = target_slot.lock();
            (source_slot.lock(), target)
        };

        let source = source_guard.as_mut().ok_or_else(|| not_found(from))?;
        let target = target_guard.as_mut().ok_or_else(|| not_found(to))?;

        apply_transfer(source, target, amount)?;

        self.history.record(HistoryEntry::now(
            from,
            OperationKind::TransferOut,
            amount,
            source.balance(),
        ));
        self.history.record(HistoryEntry::now(
            to,
            OperationKind::TransferIn,
            amount,
            target.balance(),
        ));

        Ok(())
    }

    pub fn transfer_by_owner(
        &self,
        from: (&str, AccountType),
        to: (&str, AccountType),
        amount: A,
    ) -> Result<(), RegistryError> {
        let from = self.resolve_account_id(from.0, from.1)?;
        let to = self.resolve_account_id(to.0, to.1)?;
        self.transfer(from, to, amount)
    }

    /// Recorded history of an account, oldest first
    pub fn transaction_history(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<HistoryEntry<A>>, RegistryError> {
        // Closed accounts keep their history
        let entries = self.history.entries(account_id);
        if entries.is_empty() && !self.accounts.contains_key(&account_id) {
            return Err(not_found(account_id));
        }
        Ok(entries)
    }

    pub fn transaction_history_by_owner(
        &self,
        email: &str,
        account_type: AccountType,
    ) -> Result<Vec<HistoryEntry<A>>, RegistryError> {
        self.transaction_history(self.resolve_account_id(email, account_type)?)
    }

    /// Remove an account from the registry and hand back its final state.
    ///
    /// The id is never issued again.
    pub fn close_account(&self, account_id: AccountId) -> Result<Account<A>, RegistryError> {
        let email = self.find_account(account_id)?.email().clone();

        let Entry::Occupied(mut owned) = self.known_emails.entry(email) else {
            return Err(not_found(account_id));
        };

        let (_, slot) = self
            .accounts
            .remove(&account_id)
            .ok_or_else(|| not_found(account_id))?;
        let account = slot.lock().take().ok_or_else(|| not_found(account_id))?;

        *owned.get_mut() -= 1;
        if *owned.get() == 0 {
            owned.remove();
        }

        info!(%account_id, balance = %account.balance(), "Account closed");
        Ok(account)
    }

    /// Sum of all open account balances
    pub fn total_assets(&self) -> Result<A, RegistryError> {
        self.accounts.iter().try_fold(A::zero(), |total, entry| {
            let balance = entry
                .value()
                .lock()
                .as_ref()
                .map_or_else(A::zero, |account| account.balance());
            total
                .checked_add(balance)
                .ok_or(RegistryError::from(DomainError::Overflow))
        })
    }

    /// Whether `email` owns at least one open account
    pub fn is_known_email(&self, email: &str) -> bool {
        Email::parse(email).is_ok_and(|email| self.known_emails.contains_key(&email))
    }

    /// Emails owning at least one open account, sorted
    pub fn known_emails(&self) -> Vec<Email> {
        let mut emails: Vec<Email> = self
            .known_emails
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        emails.sort();
        emails
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Snapshot of every open account in registration order
    pub fn accounts(&self) -> Vec<Account<A>> {
        let mut accounts: Vec<Account<A>> = self
            .accounts
            .iter()
            .filter_map(|entry| entry.value().lock().as_ref().cloned())
            .collect();
        accounts.sort_by_key(|account| account.account_id());
        accounts
    }

    /// Write every open account as CSV to `writer`
    pub async fn snapshot<W>(&self, mut writer: W) -> Result<(), RegistryError>
    where
        W: AsyncWrite + Unpin,
    {
        // Rows are copied out first so no account lock is held across an await
        let accounts = self.accounts();

        writer.write_all(b"account,email,type,balance\n").await?;

        for account in accounts {
            let line = format!(
                "{},{},{},{}\n",
                account.account_id(),
                account.email(),
                account.account_type(),
                account.balance().to_decimal_string()
            );
            writer.write_all(line.as_bytes()).await?;
        }

        writer.flush().await?;
        Ok(())
    }

    fn slot(&self, account_id: AccountId) -> Result<Slot<A>, RegistryError> {
        self.accounts
            .get(&account_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| not_found(account_id))
    }

    /// Run `update_fn` with exclusive access to one open account
    fn with_account<T, F>(&self, account_id: AccountId, update_fn: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut Account<A>) -> Result<T, RegistryError>,
    {
        let slot = self.slot(account_id)?;
        let mut guard = slot.lock();
        let account = guard.as_mut().ok_or_else(|| not_found(account_id))?;
        update_fn(account)
    }
}
