use std::fmt;

use chrono::{DateTime, Utc};

use super::account_type::AccountId;
use super::amount::AmountType;

/// Kind of balance change recorded in an account's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Open,
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::TransferOut => "transfer_out",
            Self::TransferIn => "transfer_in",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable record of one successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<A: AmountType> {
    pub account_id: AccountId,
    pub kind: OperationKind,
    pub amount: A,
    pub resulting_balance: A,
    pub timestamp: DateTime<Utc>,
}

impl<A: AmountType> HistoryEntry<A> {
    /// Create an entry stamped with the current time
    pub fn now(account_id: AccountId, kind: OperationKind, amount: A, resulting_balance: A) -> Self {
        Self {
            account_id,
            kind,
            amount,
            resulting_balance,
            timestamp: Utc::now(),
        }
    }
}
