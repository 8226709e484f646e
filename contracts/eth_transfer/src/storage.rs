use soroban_sdk::{contracttype, Address};

/// All-zero ed25519 account, the Stellar counterpart of `address(0)`
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// All-zero contract id
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Token,            // Native asset contract backing the ledger
    Balance(Address), // user -> i128, persistent
    TotalLiabilities, // Sum of all ledger balances
    Initialized,
}
