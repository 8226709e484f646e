use crate::error::Error;
use crate::storage::Storage;
use crate::types::{Post, MAX_POST_LENGTH};
use soroban_sdk::{Address, Env, String};

pub struct Validator;

impl Validator {
    pub fn validate_content(content: &String) -> Result<(), Error> {
        let len = content.len();
        if len == 0 || len > MAX_POST_LENGTH {
            return Err(Error::InvalidPostLength);
        }
        Ok(())
    }

    /// Load a post that is in bounds and not deleted
    pub fn existing_post(env: &Env, author: &Address, post_index: u32) -> Result<Post, Error> {
        let post = Self::post_in_bounds(env, author, post_index)?;
        if !post.exists {
            return Err(Error::PostDeleted);
        }
        Ok(post)
    }

    /// Load a post by index, deleted or not
    pub fn post_in_bounds(env: &Env, author: &Address, post_index: u32) -> Result<Post, Error> {
        if post_index >= Storage::get_post_count(env, author) {
            return Err(Error::PostIndexOutOfBounds);
        }
        Storage::get_post(env, author, post_index).ok_or(Error::PostIndexOutOfBounds)
    }
}
