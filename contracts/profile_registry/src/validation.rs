use crate::error::Error;
use crate::storage::{MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};
use soroban_sdk::String;

pub fn validate_username(username: &String) -> Result<(), Error> {
    let len = username.len();
    if len < MIN_USERNAME_LENGTH {
        return Err(Error::UsernameTooShort);
    }
    if len > MAX_USERNAME_LENGTH {
        return Err(Error::UsernameTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_username_bounds() {
        let env = Env::default();

        assert_eq!(
            validate_username(&String::from_str(&env, "ab")),
            Err(Error::UsernameTooShort)
        );
        assert_eq!(validate_username(&String::from_str(&env, "abc")), Ok(()));
        assert_eq!(
            validate_username(&String::from_str(&env, "exactlytwentychars__")),
            Ok(())
        );
        assert_eq!(
            validate_username(&String::from_str(&env, "thisusernameistoolong")),
            Err(Error::UsernameTooLong)
        );
    }
}
