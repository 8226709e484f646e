use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostCreatedEvent {
    pub author: Address,
    pub content: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostUpdatedEvent {
    pub author: Address,
    pub post_index: u32,
    pub new_content: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostDeletedEvent {
    pub author: Address,
    pub post_index: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostTippedEvent {
    pub tipper: Address,
    pub author: Address,
    pub post_index: u32,
    pub amount: i128,
}
