use crate::error::Error;
use crate::storage::{ZERO_ACCOUNT, ZERO_CONTRACT};
use soroban_sdk::{Address, Env, String};

/// Whether `address` is one of the all-zero strkeys
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    let zero_account = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
    let zero_contract = Address::from_string(&String::from_str(env, ZERO_CONTRACT));
    *address == zero_account || *address == zero_contract
}

/// Deposits and withdrawals move real value and must be positive
pub fn validate_value_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Recipient checks come before the balance check, so a bad recipient is
/// reported regardless of the sender's balance.
pub fn validate_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if is_zero_address(env, to) {
        return Err(Error::InvalidRecipient);
    }
    if from == to {
        return Err(Error::SelfTransfer);
    }
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}
