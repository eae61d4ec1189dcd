use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Kind of account; the first letter of the name doubles as the id suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
        }
    }

    /// Suffix used in account identifiers
    pub fn code(&self) -> char {
        match self {
            Self::Checking => 'C',
            Self::Savings => 'S',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Self::Checking),
            'S' => Some(Self::Savings),
            _ => None,
        }
    }
}

impl FromStr for AccountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Checking" => Ok(Self::Checking),
            "Savings" => Ok(Self::Savings),
            _ => Err(DomainError::InvalidAccountType(s.to_string())),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Account identifier of the form `<sequence><type code>`, e.g. `1C`.
///
/// Ordering follows the sequence number, which is also registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId {
    sequence: u64,
    account_type: AccountType,
}

impl AccountId {
    pub fn new(sequence: u64, account_type: AccountType) -> Self {
        Self {
            sequence,
            account_type,
        }
    }

    /// Parse the textual form (`"12S"`); returns None if malformed
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let code = s.chars().last()?;
        let digits = &s[..s.len() - code.len_utf8()];

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            sequence: digits.parse().ok()?,
            account_type: AccountType::from_code(code)?,
        })
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sequence, self.account_type.code())
    }
}
