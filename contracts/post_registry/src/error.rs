use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // POST ERRORS (1-9)
    // ============================================
    /// Content is empty or longer than MAX_POST_LENGTH bytes
    InvalidPostLength = 1,
    /// No post at this index for the author
    PostIndexOutOfBounds = 2,
    /// Post at this index has been deleted
    PostDeleted = 3,

    // ============================================
    // TIP ERRORS (10-19)
    // ============================================
    /// Tip amount is negative
    InvalidAmount = 10,
    /// Post or tip counters overflowed
    Overflow = 11,
    /// Average requested with a tip count of zero
    DivisionByZero = 12,
}
