use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Username rules
    /// Username under 3 bytes
    UsernameTooShort = 1,
    /// Username over 20 bytes
    UsernameTooLong = 2,
    /// Another address holds the username
    UsernameTaken = 3,

    // Profile lifecycle
    /// Address already has a profile
    ProfileAlreadyExists = 4,
    /// Address has no profile
    ProfileNotFound = 5,
}
