use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    pub author: Address,
    pub content: String,
    pub timestamp: u64,     // Ledger time at creation
    pub exists: bool,       // false once deleted, the index stays taken
    pub tip_count: u64,     // Number of recorded tips
    pub total_tips: i128,   // Sum of recorded tip amounts
}

#[contracttype]
pub enum DataKey {
    Post(Address, u32),     // (author, post_index) -> Post
    PostCount(Address),     // author -> u32
    HasPosted(Address),     // author -> bool
    UserCount,              // u32, number of distinct authors
    User(u32),              // slot -> author, in order of first post
}

pub const MAX_POST_LENGTH: u32 = 280;
