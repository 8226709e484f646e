use crate::error::Error;

/// Add `amount` to a ledger balance
pub fn credit(balance: i128, amount: i128) -> Result<i128, Error> {
    balance.checked_add(amount).ok_or(Error::Overflow)
}

/// Take `amount` out of a ledger balance
///
/// Fails with `InsufficientBalance` rather than letting the balance go
/// negative.
pub fn debit(balance: i128, amount: i128) -> Result<i128, Error> {
    if amount > balance {
        return Err(Error::InsufficientBalance);
    }
    balance.checked_sub(amount).ok_or(Error::Overflow)
}

/// Move `amount` between two balances, returning the new (from, to) pair
///
/// The pair sum is unchanged on success.
pub fn move_between(from: i128, to: i128, amount: i128) -> Result<(i128, i128), Error> {
    let new_from = debit(from, amount)?;
    let new_to = credit(to, amount)?;
    Ok((new_from, new_to))
}
