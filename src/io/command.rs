use std::fmt;

use super::error::IoError;
use crate::domain::{AccountId, AccountType, AmountType};

/// How a command names an account: by id, or by owner email and type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRef {
    Id(AccountId),
    Owner {
        email: String,
        account_type: AccountType,
    },
}

impl AccountRef {
    /// Parse `12C` or `owner@example.com:Savings`
    pub fn parse(s: &str) -> Result<Self, IoError> {
        let s = s.trim();

        if let Some((email, account_type)) = s.rsplit_once(':') {
            return Ok(Self::Owner {
                email: email.trim().to_string(),
                account_type: account_type.parse()?,
            });
        }

        AccountId::parse(s)
            .map(Self::Id)
            .ok_or_else(|| IoError::InvalidAccountRef(s.to_string()))
    }
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Owner {
                email,
                account_type,
            } => write!(f, "{email}:{account_type}"),
        }
    }
}

/// One line of a command file, strongly typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<A: AmountType> {
    Open {
        email: String,
        account_type: AccountType,
        starting_balance: A,
    },
    Deposit {
        account: AccountRef,
        amount: A,
    },
    Withdraw {
        account: AccountRef,
        amount: A,
    },
    Transfer {
        from: AccountRef,
        to: AccountRef,
        amount: A,
    },
    Close {
        account: AccountRef,
    },
}

impl<A: AmountType> Command<A> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer",
            Self::Close { .. } => "close",
        }
    }
}
