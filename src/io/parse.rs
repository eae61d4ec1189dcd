use serde::Deserialize;

use super::command::{AccountRef, Command};
use super::error::IoError;
use crate::domain::AmountType;

/// Raw CSV record as read from input
#[derive(Debug, Deserialize)]
pub struct RawCommandRecord {
    pub op: String,
    pub account: String,
    pub target: Option<String>,
    pub amount: Option<String>,
}

impl RawCommandRecord {
    /// Parse this raw record into a strongly-typed Command
    pub fn parse<A: AmountType>(self) -> Result<Command<A>, IoError> {
        let op = self.op.trim().to_lowercase();

        match op.as_str() {
            "open" => {
                let AccountRef::Owner {
                    email,
                    account_type,
                } = AccountRef::parse(&self.account)?
                else {
                    return Err(IoError::InvalidAccountRef(format!(
                        "open needs email:type, got {}",
                        self.account
                    )));
                };
                Ok(Command::Open {
                    email,
                    account_type,
                    starting_balance: parse_amount(self.amount, "open")?,
                })
            }
            "deposit" => Ok(Command::Deposit {
                account: AccountRef::parse(&self.account)?,
                amount: parse_amount(self.amount, "deposit")?,
            }),
            "withdraw" | "withdrawal" => Ok(Command::Withdraw {
                account: AccountRef::parse(&self.account)?,
                amount: parse_amount(self.amount, "withdraw")?,
            }),
            "transfer" => {
                let target = self.target.ok_or_else(|| {
                    IoError::MissingField("target required for transfer".to_string())
                })?;
                Ok(Command::Transfer {
                    from: AccountRef::parse(&self.account)?,
                    to: AccountRef::parse(&target)?,
                    amount: parse_amount(self.amount, "transfer")?,
                })
            }
            "close" => Ok(Command::Close {
                account: AccountRef::parse(&self.account)?,
            }),
            _ => Err(IoError::InvalidOperation(self.op)),
        }
    }
}

fn parse_amount<A: AmountType>(amount: Option<String>, op: &str) -> Result<A, IoError> {
    let amount_str =
        amount.ok_or_else(|| IoError::MissingField(format!("amount required for {op}")))?;
    A::from_decimal_str(&amount_str).map_err(|_| IoError::InvalidAmount(amount_str))
}
