#![no_std]

mod error;
mod events;
mod ledger;
mod storage;
mod validation;

pub use error::Error;
pub use events::{DepositEvent, TransferEvent, WithdrawalEvent};
use storage::DataKey;
use validation::{validate_transfer, validate_value_amount};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol};

#[contract]
pub struct EthTransfer;

#[contractimpl]
impl EthTransfer {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the ledger with its owner and the native asset contract
    ///
    /// The owner is fixed from here on.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Ledger already initialized
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::TotalLiabilities, &0i128);

        Ok(())
    }

    /// Ledger owner
    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Native asset contract the ledger holds
    pub fn token(env: Env) -> Result<Address, Error> {
        Self::token_address(&env)
    }

    // ============================================
    // VALUE IN: DEPOSIT / RECEIVE
    // ============================================

    /// Deposit native value into the caller's ledger balance
    ///
    /// # Errors
    /// - `NotInitialized`: Ledger not initialized
    /// - `InvalidAmount`: amount must be positive
    /// - `Overflow`: Balance would overflow
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        Self::credit_deposit(&env, &user, amount)
    }

    /// Passive receive path
    ///
    /// A plain payment to the ledger, credited exactly like `deposit`.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        Self::credit_deposit(&env, &from, amount)
    }

    // ============================================
    // VALUE OUT: WITHDRAW
    // ============================================

    /// Withdraw native value from the caller's ledger balance
    ///
    /// # Errors
    /// - `NotInitialized`: Ledger not initialized
    /// - `InvalidAmount`: amount must be positive
    /// - `InsufficientBalance`: amount exceeds the ledger balance
    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        validate_value_amount(amount)?;

        user.require_auth();

        let token = Self::token_address(&env)?;
        let balance = Self::balance_of(&env, &user);
        let new_balance = ledger::debit(balance, amount)?;
        let total = ledger::debit(Self::total_liabilities(&env), amount)?;

        // Effects are stored before the outgoing transfer
        Self::set_balance(&env, &user, new_balance);
        env.storage()
            .instance()
            .set(&DataKey::TotalLiabilities, &total);

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &user, &amount);

        log!(&env, "withdrawal", user.clone(), amount);

        env.events().publish(
            (Symbol::new(&env, "withdrawal"), user.clone()),
            WithdrawalEvent { user, amount },
        );

        Ok(())
    }

    // ============================================
    // INTERNAL LEDGER TRANSFER
    // ============================================

    /// Move ledger balance from `from` to `recipient`
    ///
    /// No native value leaves the contract.
    ///
    /// # Errors
    /// - `InvalidRecipient`: recipient is the zero address
    /// - `SelfTransfer`: recipient is the sender
    /// - `InvalidAmount`: amount is negative
    /// - `InsufficientBalance`: amount exceeds the sender's balance
    pub fn transfer_to(
        env: Env,
        from: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        validate_transfer(&env, &from, &recipient, amount)?;

        from.require_auth();

        let (new_from, new_to) = ledger::move_between(
            Self::balance_of(&env, &from),
            Self::balance_of(&env, &recipient),
            amount,
        )?;

        Self::set_balance(&env, &from, new_from);
        Self::set_balance(&env, &recipient, new_to);

        log!(&env, "ledger transfer", from.clone(), recipient.clone(), amount);

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), recipient.clone()),
            TransferEvent {
                from,
                to: recipient,
                amount,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Ledger balance of `user`
    pub fn get_balance(env: Env, user: Address) -> i128 {
        Self::balance_of(&env, &user)
    }

    /// Native value held by the contract (owner only)
    ///
    /// # Errors
    /// - `NotInitialized`: Ledger not initialized
    /// - `Unauthorized`: caller is not the owner
    pub fn get_contract_balance(env: Env, caller: Address) -> Result<i128, Error> {
        let owner = Self::owner(env.clone())?;
        if caller != owner {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();

        let token = Self::token_address(&env)?;
        Ok(token::Client::new(&env, &token).balance(&env.current_contract_address()))
    }

    /// Sum of every ledger balance
    pub fn get_total_liabilities(env: Env) -> i128 {
        Self::total_liabilities(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn credit_deposit(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
        validate_value_amount(amount)?;

        user.require_auth();

        let token = Self::token_address(env)?;
        let new_balance = ledger::credit(Self::balance_of(env, user), amount)?;
        let total = ledger::credit(Self::total_liabilities(env), amount)?;

        Self::set_balance(env, user, new_balance);
        env.storage()
            .instance()
            .set(&DataKey::TotalLiabilities, &total);

        token::Client::new(env, &token).transfer(user, &env.current_contract_address(), &amount);

        log!(env, "deposit", user.clone(), amount);

        env.events().publish(
            (Symbol::new(env, "deposit"), user.clone()),
            DepositEvent {
                user: user.clone(),
                amount,
            },
        );

        Ok(())
    }

    fn token_address(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }

    fn balance_of(env: &Env, user: &Address) -> i128 {
        env.storage()
            .persistent()
            .get::<DataKey, i128>(&DataKey::Balance(user.clone()))
            .unwrap_or(0)
    }

    fn set_balance(env: &Env, user: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(user.clone()), &amount);
    }

    fn total_liabilities(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get::<DataKey, i128>(&DataKey::TotalLiabilities)
            .unwrap_or(0)
    }
}
