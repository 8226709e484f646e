use crate::error::Error;
use crate::types::{DataKey, Post};
use soroban_sdk::{Address, Env, Vec};

pub struct Storage;

impl Storage {
    // Posts
    pub fn get_post(env: &Env, author: &Address, post_index: u32) -> Option<Post> {
        env.storage()
            .persistent()
            .get(&DataKey::Post(author.clone(), post_index))
    }

    pub fn set_post(env: &Env, post_index: u32, post: &Post) {
        env.storage()
            .persistent()
            .set(&DataKey::Post(post.author.clone(), post_index), post);
    }

    // Per-author post counter
    pub fn get_post_count(env: &Env, author: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::PostCount(author.clone()))
            .unwrap_or(0)
    }

    pub fn set_post_count(env: &Env, author: &Address, count: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::PostCount(author.clone()), &count);
    }

    // Authors
    pub fn has_posted(env: &Env, user: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::HasPosted(user.clone()))
            .unwrap_or(false)
    }

    pub fn get_user_count(env: &Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::UserCount)
            .unwrap_or(0)
    }

    pub fn get_all_users(env: &Env) -> Vec<Address> {
        let mut users = Vec::new(env);
        for slot in 0..Self::get_user_count(env) {
            if let Some(user) = env.storage().persistent().get(&DataKey::User(slot)) {
                users.push_back(user);
            }
        }
        users
    }

    // Authors, one persistent slot each
    pub fn add_user(env: &Env, user: &Address) -> Result<(), Error> {
        let slot = Self::get_user_count(env);
        let next_slot = slot.checked_add(1).ok_or(Error::Overflow)?;
        env.storage().persistent().set(&DataKey::User(slot), user);
        env.storage().persistent().set(&DataKey::UserCount, &next_slot);
        env.storage()
            .persistent()
            .set(&DataKey::HasPosted(user.clone()), &true);
        Ok(())
    }
}
