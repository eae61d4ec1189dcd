use super::account::Account;
use super::amount::AmountType;
use super::error::DomainError;

/// Apply a deposit to an account
pub fn apply_deposit<A: AmountType>(account: &mut Account<A>, amount: A) -> Result<(), DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(())
}

/// Apply a withdrawal from an account
pub fn apply_withdrawal<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    if account.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(())
}

/// Move funds between two accounts.
///
/// Both resulting balances are computed before either account is written, so
/// an error on any check leaves both accounts exactly as they were. A target
/// carrying the source's id is rejected before the amount is looked at.
pub fn apply_transfer<A: AmountType>(
    source: &mut Account<A>,
    target: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    if source.account_id() == target.account_id() {
        return Err(DomainError::SameAccount);
    }

    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    if source.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_source = source
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    let new_target = target
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    source.set_balance(new_source);
    target.set_balance(new_target);
    Ok(())
}
