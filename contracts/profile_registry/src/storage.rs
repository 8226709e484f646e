use soroban_sdk::{contracttype, Address, String};

// Username length bounds, in bytes
pub const MIN_USERNAME_LENGTH: u32 = 3;
pub const MAX_USERNAME_LENGTH: u32 = 20;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    pub username: String,
    pub bio: String,
    pub avatar: String,     // Avatar URI (IPFS gateway link)
    pub exists: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Profile(Address),       // user -> Profile
    Username(String),       // username -> owning Address
}
