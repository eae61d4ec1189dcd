use super::account_type::{AccountId, AccountType};
use super::amount::AmountType;
use super::email::Email;
use super::error::DomainError;
use super::operations::{apply_deposit, apply_transfer, apply_withdrawal};

/// Bank account with private fields enforcing invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<A: AmountType> {
    account_id: AccountId,
    email: Email,
    balance: A,
}

impl<A: AmountType> Account<A> {
    /// Open an account for an already validated owner.
    ///
    /// A zero starting balance is allowed; a negative one is not.
    pub fn open(account_id: AccountId, email: Email, starting_balance: A) -> Result<Self, DomainError> {
        if starting_balance < A::zero() {
            return Err(DomainError::InvalidAmount);
        }

        Ok(Self {
            account_id,
            email,
            balance: starting_balance,
        })
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn account_type(&self) -> AccountType {
        self.account_id.account_type()
    }

    pub fn balance(&self) -> A {
        self.balance
    }

    pub fn deposit(&mut self, amount: A) -> Result<(), DomainError> {
        apply_deposit(self, amount)
    }

    pub fn withdraw(&mut self, amount: A) -> Result<(), DomainError> {
        apply_withdrawal(self, amount)
    }

    /// Move `amount` from this account into `other`; both change or neither does
    pub fn transfer(&mut self, other: &mut Account<A>, amount: A) -> Result<(), DomainError> {
        apply_transfer(self, other, amount)
    }

    // Internal mutation for use by operations module
    pub(crate) fn set_balance(&mut self, amount: A) {
        self.balance = amount;
    }
}
