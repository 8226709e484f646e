#![no_std]

mod error;
mod events;
mod storage;
mod validation;

pub use error::Error;
pub use events::{ProfileCreatedEvent, ProfileUpdatedEvent};
use storage::DataKey;
pub use storage::Profile;
use validation::validate_username;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};

#[contract]
pub struct EtherSpaceProfile;

#[contractimpl]
impl EtherSpaceProfile {
    /// Register a profile for `user`
    ///
    /// # Errors
    /// - `UsernameTooShort` / `UsernameTooLong`: username outside 3..=20 bytes
    /// - `ProfileAlreadyExists`: user already has a profile
    /// - `UsernameTaken`: another user holds the username
    pub fn create_profile(
        env: Env,
        user: Address,
        username: String,
        bio: String,
        avatar: String,
    ) -> Result<(), Error> {
        user.require_auth();

        validate_username(&username)?;

        let profile_key = DataKey::Profile(user.clone());
        if env.storage().persistent().has(&profile_key) {
            return Err(Error::ProfileAlreadyExists);
        }

        let username_key = DataKey::Username(username.clone());
        if env.storage().persistent().has(&username_key) {
            return Err(Error::UsernameTaken);
        }

        let profile = Profile {
            username: username.clone(),
            bio,
            avatar,
            exists: true,
        };
        env.storage().persistent().set(&profile_key, &profile);
        env.storage().persistent().set(&username_key, &user);

        log!(&env, "profile created", user.clone(), username.clone());

        env.events().publish(
            (Symbol::new(&env, "profile_created"), user.clone()),
            ProfileCreatedEvent { user, username },
        );

        Ok(())
    }

    /// Replace bio and avatar; the username is permanent
    ///
    /// # Errors
    /// - `ProfileNotFound`: user has no profile
    pub fn update_profile(
        env: Env,
        user: Address,
        bio: String,
        avatar: String,
    ) -> Result<(), Error> {
        user.require_auth();

        let profile_key = DataKey::Profile(user.clone());
        let mut profile: Profile = env
            .storage()
            .persistent()
            .get(&profile_key)
            .ok_or(Error::ProfileNotFound)?;

        profile.bio = bio;
        profile.avatar = avatar;
        env.storage().persistent().set(&profile_key, &profile);

        env.events().publish(
            (Symbol::new(&env, "profile_updated"), user.clone()),
            ProfileUpdatedEvent { user },
        );

        Ok(())
    }

    /// Profile of `user`, or an empty one with `exists == false`
    pub fn get_profile(env: Env, user: Address) -> Profile {
        env.storage()
            .persistent()
            .get(&DataKey::Profile(user))
            .unwrap_or(Profile {
                username: String::from_str(&env, ""),
                bio: String::from_str(&env, ""),
                avatar: String::from_str(&env, ""),
                exists: false,
            })
    }

    /// Owner of a username, if taken
    pub fn resolve_username(env: Env, username: String) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Username(username))
    }
}
