#![no_std]

mod error;
mod events;
mod storage;
mod tips;
mod types;
mod validation;

pub use error::Error;
pub use events::{PostCreatedEvent, PostDeletedEvent, PostTippedEvent, PostUpdatedEvent};
use storage::Storage;
use tips::TipCalculator;
pub use types::{Post, MAX_POST_LENGTH};
use validation::Validator;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};

#[contract]
pub struct PostContract;

#[contractimpl]
impl PostContract {
    // ============================================
    // Post Functions
    // ============================================

    /// Publish a post, returning its index in the author's list
    ///
    /// # Errors
    /// - `InvalidPostLength`: content empty or over MAX_POST_LENGTH bytes
    pub fn create_post(env: Env, author: Address, content: String) -> Result<u32, Error> {
        author.require_auth();

        Validator::validate_content(&content)?;

        let post_index = Storage::get_post_count(&env, &author);
        let timestamp = env.ledger().timestamp();

        let post = Post {
            author: author.clone(),
            content: content.clone(),
            timestamp,
            exists: true,
            tip_count: 0,
            total_tips: 0,
        };
        let next_index = post_index.checked_add(1).ok_or(Error::Overflow)?;
        Storage::set_post(&env, post_index, &post);
        Storage::set_post_count(&env, &author, next_index);

        if !Storage::has_posted(&env, &author) {
            Storage::add_user(&env, &author)?;
        }

        env.events().publish(
            (Symbol::new(&env, "post_created"), author.clone()),
            PostCreatedEvent {
                author,
                content,
                timestamp,
            },
        );

        Ok(post_index)
    }

    /// Replace the content of one of the author's posts
    ///
    /// # Errors
    /// - `PostIndexOutOfBounds`: no post at this index
    /// - `PostDeleted`: post was deleted
    /// - `InvalidPostLength`: content empty or too long
    pub fn update_post(
        env: Env,
        author: Address,
        post_index: u32,
        new_content: String,
    ) -> Result<(), Error> {
        author.require_auth();

        let mut post = Validator::existing_post(&env, &author, post_index)?;
        Validator::validate_content(&new_content)?;

        post.content = new_content.clone();
        Storage::set_post(&env, post_index, &post);

        env.events().publish(
            (Symbol::new(&env, "post_updated"), author.clone(), post_index),
            PostUpdatedEvent {
                author,
                post_index,
                new_content,
            },
        );

        Ok(())
    }

    /// Mark one of the author's posts deleted
    ///
    /// # Errors
    /// - `PostIndexOutOfBounds`: no post at this index
    /// - `PostDeleted`: post already deleted
    pub fn delete_post(env: Env, author: Address, post_index: u32) -> Result<(), Error> {
        author.require_auth();

        let mut post = Validator::existing_post(&env, &author, post_index)?;
        post.exists = false;
        Storage::set_post(&env, post_index, &post);

        env.events().publish(
            (Symbol::new(&env, "post_deleted"), author.clone(), post_index),
            PostDeletedEvent { author, post_index },
        );

        Ok(())
    }

    // ============================================
    // Tip Functions
    // ============================================

    /// Record a tip against a post
    ///
    /// Only statistics are kept here; the value itself moves through the
    /// ledger contract. `amount` is taken as supplied by the tipper.
    ///
    /// # Errors
    /// - `PostIndexOutOfBounds`: no post at this index
    /// - `PostDeleted`: post was deleted
    /// - `InvalidAmount`: amount is negative
    /// - `Overflow`: counters would overflow
    pub fn record_tip(
        env: Env,
        tipper: Address,
        author: Address,
        post_index: u32,
        amount: i128,
    ) -> Result<(), Error> {
        tipper.require_auth();

        let mut post = Validator::existing_post(&env, &author, post_index)?;
        TipCalculator::apply_tip(&mut post, amount)?;
        Storage::set_post(&env, post_index, &post);

        log!(&env, "tip recorded", author.clone(), post_index, post.tip_count);

        env.events().publish(
            (
                Symbol::new(&env, "post_tipped"),
                tipper.clone(),
                author.clone(),
                post_index,
            ),
            PostTippedEvent {
                tipper,
                author,
                post_index,
                amount,
            },
        );

        Ok(())
    }

    /// (tip_count, total_tips) for a post, deleted posts included
    ///
    /// # Errors
    /// - `PostIndexOutOfBounds`: no post at this index
    pub fn get_post_tip_stats(
        env: Env,
        author: Address,
        post_index: u32,
    ) -> Result<(u64, i128), Error> {
        let post = Validator::post_in_bounds(&env, &author, post_index)?;
        Ok((post.tip_count, post.total_tips))
    }

    /// Floor of total_tips / tip_count
    ///
    /// # Errors
    /// - `InvalidAmount`: total_tips is negative
    /// - `DivisionByZero`: tip_count is zero
    pub fn calculate_average_tip(
        _env: Env,
        total_tips: i128,
        tip_count: u64,
    ) -> Result<i128, Error> {
        TipCalculator::average_tip(total_tips, tip_count)
    }

    // ============================================
    // View Functions
    // ============================================

    /// Non-deleted posts of `user`, in index order
    pub fn get_user_posts(env: Env, user: Address) -> Vec<Post> {
        let mut posts = Vec::new(&env);
        for post_index in 0..Storage::get_post_count(&env, &user) {
            if let Some(post) = Storage::get_post(&env, &user, post_index) {
                if post.exists {
                    posts.push_back(post);
                }
            }
        }
        posts
    }

    /// Raw post record, deleted or not
    pub fn get_post(env: Env, author: Address, post_index: u32) -> Result<Post, Error> {
        Validator::post_in_bounds(&env, &author, post_index)
    }

    /// Number of indices the author has used
    pub fn get_post_count(env: Env, author: Address) -> u32 {
        Storage::get_post_count(&env, &author)
    }

    /// Every author who ever posted
    pub fn get_all_users(env: Env) -> Vec<Address> {
        Storage::get_all_users(&env)
    }

    pub fn has_posted(env: Env, user: Address) -> bool {
        Storage::has_posted(&env, &user)
    }
}

#[cfg(test)]
mod test;
