use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Ledger already initialized
    AlreadyInitialized = 1,
    /// Ledger not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the ledger owner
    Unauthorized = 10,

    // ============================================
    // AMOUNT/BALANCE ERRORS (20-29)
    // ============================================
    /// Deposit/withdraw amount must be positive, transfer amount non-negative
    InvalidAmount = 20,
    /// Withdraw or transfer exceeds the caller's ledger balance
    InsufficientBalance = 21,
    /// Balance arithmetic overflowed
    Overflow = 22,

    // ============================================
    // TRANSFER ERRORS (30-39)
    // ============================================
    /// Recipient is the zero address
    InvalidRecipient = 30,
    /// Recipient is the sender
    SelfTransfer = 31,
}
