use super::*;
use crate::types::DataKey;
use eth_transfer::{EthTransfer, EthTransferClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::StellarAssetClient,
    Address, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};

const ONE: i128 = 10_000_000; // 1 XLM in stroops

fn setup() -> (Env, PostContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PostContract, ());
    let client = PostContractClient::new(&env, &contract_id);
    (env, client)
}

fn last_event(env: &Env, contract_id: &Address) -> (Vec<Val>, Val) {
    let mut found = None;
    for (id, topics, data) in env.events().all().iter() {
        if id == *contract_id {
            found = Some((topics, data));
        }
    }
    found.expect("contract published no event")
}

#[test]
fn test_create_post() {
    let (env, client) = setup();
    env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

    let user = Address::generate(&env);
    let content = String::from_str(&env, "Hello World!");

    let index = client.create_post(&user, &content);
    assert_eq!(index, 0);

    let posts = client.get_user_posts(&user);
    assert_eq!(posts.len(), 1);
    let post = posts.get(0).unwrap();
    assert_eq!(post.content, content);
    assert_eq!(post.author, user);
    assert!(post.exists);
    assert_eq!(post.tip_count, 0);
    assert_eq!(post.total_tips, 0);
    assert_eq!(post.timestamp, 1_700_000_000);

    let (topics, data) = last_event(&env, &client.address);
    let expected: Vec<Val> =
        (Symbol::new(&env, "post_created"), user.clone()).into_val(&env);
    assert_eq!(topics, expected);
    assert_eq!(
        PostCreatedEvent::try_from_val(&env, &data).unwrap(),
        PostCreatedEvent {
            author: user.clone(),
            content,
            timestamp: 1_700_000_000,
        }
    );
}

#[test]
fn test_post_length_limits() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    let result = client.try_create_post(&user, &String::from_str(&env, ""));
    assert_eq!(result, Err(Ok(Error::InvalidPostLength)));

    let too_long = [b'a'; (MAX_POST_LENGTH + 1) as usize];
    let result = client.try_create_post(&user, &String::from_bytes(&env, &too_long));
    assert_eq!(result, Err(Ok(Error::InvalidPostLength)));

    let longest = [b'a'; MAX_POST_LENGTH as usize];
    assert_eq!(client.create_post(&user, &String::from_bytes(&env, &longest)), 0);
    assert!(client.has_posted(&user));
}

#[test]
fn test_new_users_tracked_once() {
    let (env, client) = setup();
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    assert!(!client.has_posted(&user1));

    client.create_post(&user1, &String::from_str(&env, "First post"));
    client.create_post(&user1, &String::from_str(&env, "Second post"));
    client.create_post(&user2, &String::from_str(&env, "Another user's post"));

    assert!(client.has_posted(&user1));
    let all_users = client.get_all_users();
    assert_eq!(all_users.len(), 2);
    assert!(all_users.contains(&user1));
    assert!(all_users.contains(&user2));
    assert_eq!(client.get_post_count(&user1), 2);
}

#[test]
fn test_users_listed_in_order_of_first_post() {
    let (env, client) = setup();
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let user3 = Address::generate(&env);

    client.create_post(&user2, &String::from_str(&env, "First"));
    client.create_post(&user1, &String::from_str(&env, "Second"));
    client.create_post(&user2, &String::from_str(&env, "Third"));
    client.create_post(&user3, &String::from_str(&env, "Fourth"));

    let all_users = client.get_all_users();
    assert_eq!(all_users.len(), 3);
    assert_eq!(all_users.get(0).unwrap(), user2);
    assert_eq!(all_users.get(1).unwrap(), user1);
    assert_eq!(all_users.get(2).unwrap(), user3);

    // Authors live in persistent entries, not in instance storage
    env.as_contract(&client.address, || {
        assert_eq!(
            env.storage().persistent().get::<_, u32>(&DataKey::UserCount),
            Some(3)
        );
        assert_eq!(
            env.storage().persistent().get::<_, Address>(&DataKey::User(1)),
            Some(user1.clone())
        );
        assert!(!env.storage().instance().has(&DataKey::UserCount));
    });
}

#[test]
fn test_create_post_cost_does_not_grow_with_authors() {
    let (env, client) = setup();
    let content = String::from_str(&env, "Hello");

    env.cost_estimate().budget().reset_default();
    client.create_post(&Address::generate(&env), &content);
    let first_cost = env.cost_estimate().budget().cpu_instruction_cost();

    env.cost_estimate().budget().reset_unlimited();
    for _ in 0..300 {
        client.create_post(&Address::generate(&env), &content);
    }

    env.cost_estimate().budget().reset_default();
    client.create_post(&Address::generate(&env), &content);
    let later_cost = env.cost_estimate().budget().cpu_instruction_cost();

    assert!(later_cost < first_cost * 2);
    assert_eq!(client.get_all_users().len(), 302);
}

#[test]
fn test_update_post() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    client.create_post(&user, &String::from_str(&env, "Original content"));

    let new_content = String::from_str(&env, "Updated content");
    client.update_post(&user, &0, &new_content);

    let (topics, data) = last_event(&env, &client.address);
    let expected: Vec<Val> =
        (Symbol::new(&env, "post_updated"), user.clone(), 0u32).into_val(&env);
    assert_eq!(topics, expected);
    assert_eq!(
        PostUpdatedEvent::try_from_val(&env, &data).unwrap(),
        PostUpdatedEvent {
            author: user.clone(),
            post_index: 0,
            new_content: new_content.clone(),
        }
    );

    assert_eq!(client.get_user_posts(&user).get(0).unwrap().content, new_content);

    let result = client.try_update_post(&user, &99, &String::from_str(&env, "New content"));
    assert_eq!(result, Err(Ok(Error::PostIndexOutOfBounds)));

    let result = client.try_update_post(&user, &0, &String::from_str(&env, ""));
    assert_eq!(result, Err(Ok(Error::InvalidPostLength)));
}

#[test]
fn test_delete_post() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    client.create_post(&user, &String::from_str(&env, "Test post"));
    client.delete_post(&user, &0);

    let (topics, data) = last_event(&env, &client.address);
    let expected: Vec<Val> =
        (Symbol::new(&env, "post_deleted"), user.clone(), 0u32).into_val(&env);
    assert_eq!(topics, expected);
    assert_eq!(
        PostDeletedEvent::try_from_val(&env, &data).unwrap(),
        PostDeletedEvent {
            author: user.clone(),
            post_index: 0,
        }
    );

    assert_eq!(client.get_user_posts(&user).len(), 0);
    assert!(!client.get_post(&user, &0).exists);

    assert_eq!(client.try_delete_post(&user, &0), Err(Ok(Error::PostDeleted)));
    assert_eq!(client.try_delete_post(&user, &99), Err(Ok(Error::PostIndexOutOfBounds)));
    let result = client.try_update_post(&user, &0, &String::from_str(&env, "Revived"));
    assert_eq!(result, Err(Ok(Error::PostDeleted)));
}

#[test]
fn test_deleted_index_is_not_reused() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    client.create_post(&user, &String::from_str(&env, "Post 1"));
    client.create_post(&user, &String::from_str(&env, "Post 2"));
    client.delete_post(&user, &0);

    let posts = client.get_user_posts(&user);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts.get(0).unwrap().content, String::from_str(&env, "Post 2"));

    assert_eq!(client.create_post(&user, &String::from_str(&env, "Post 3")), 2);
    assert_eq!(client.get_post_count(&user), 3);
}

#[test]
fn test_record_tip() {
    let (env, client) = setup();
    let author = Address::generate(&env);
    let tipper = Address::generate(&env);

    client.create_post(&author, &String::from_str(&env, "Tippable post"));
    assert_eq!(client.get_post_tip_stats(&author, &0), (0, 0));

    client.record_tip(&tipper, &author, &0, &(ONE / 10));

    let (topics, data) = last_event(&env, &client.address);
    let expected: Vec<Val> = (
        Symbol::new(&env, "post_tipped"),
        tipper.clone(),
        author.clone(),
        0u32,
    )
        .into_val(&env);
    assert_eq!(topics, expected);
    assert_eq!(
        PostTippedEvent::try_from_val(&env, &data).unwrap(),
        PostTippedEvent {
            tipper: tipper.clone(),
            author: author.clone(),
            post_index: 0,
            amount: ONE / 10,
        }
    );

    assert_eq!(client.get_post_tip_stats(&author, &0), (1, ONE / 10));
}

#[test]
fn test_average_tip_scenario() {
    let (env, client) = setup();
    let author = Address::generate(&env);
    let tipper = Address::generate(&env);

    client.create_post(&author, &String::from_str(&env, "Tippable post"));
    client.record_tip(&tipper, &author, &0, &(ONE / 10));
    client.record_tip(&tipper, &author, &0, &(3 * ONE / 10));

    let (tip_count, total_tips) = client.get_post_tip_stats(&author, &0);
    assert_eq!(tip_count, 2);
    assert_eq!(total_tips, 4 * ONE / 10);
    assert_eq!(client.calculate_average_tip(&total_tips, &tip_count), 2 * ONE / 10);
}

#[test]
fn test_average_tip_of_untipped_post_fails() {
    let (_env, client) = setup();

    let result = client.try_calculate_average_tip(&0, &0);
    assert_eq!(result, Err(Ok(Error::DivisionByZero)));
}

#[test]
fn test_average_tip_rejects_negative_total() {
    let (_env, client) = setup();

    let result = client.try_calculate_average_tip(&-7, &2);
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
    assert_eq!(client.calculate_average_tip(&7, &2), 3);
}

#[test]
fn test_tip_on_missing_or_deleted_post_fails() {
    let (env, client) = setup();
    let author = Address::generate(&env);
    let tipper = Address::generate(&env);

    let result = client.try_record_tip(&tipper, &author, &99, &(ONE / 10));
    assert_eq!(result, Err(Ok(Error::PostIndexOutOfBounds)));

    client.create_post(&author, &String::from_str(&env, "Short lived"));
    client.record_tip(&tipper, &author, &0, &ONE);
    client.delete_post(&author, &0);

    let result = client.try_record_tip(&tipper, &author, &0, &ONE);
    assert_eq!(result, Err(Ok(Error::PostDeleted)));

    // Stats survive deletion and never go back to zero
    assert_eq!(client.get_post_tip_stats(&author, &0), (1, ONE));
    assert_eq!(
        client.try_get_post_tip_stats(&author, &5),
        Err(Ok(Error::PostIndexOutOfBounds))
    );
}

#[test]
fn test_update_keeps_tip_stats() {
    let (env, client) = setup();
    let author = Address::generate(&env);
    let tipper = Address::generate(&env);

    client.create_post(&author, &String::from_str(&env, "Before"));
    client.record_tip(&tipper, &author, &0, &ONE);
    client.update_post(&author, &0, &String::from_str(&env, "After"));

    assert_eq!(client.get_post_tip_stats(&author, &0), (1, ONE));
}

#[test]
fn test_negative_tip_rejected() {
    let (env, client) = setup();
    let author = Address::generate(&env);
    let tipper = Address::generate(&env);

    client.create_post(&author, &String::from_str(&env, "Tippable post"));

    let result = client.try_record_tip(&tipper, &author, &0, &-1);
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
    assert_eq!(client.get_post_tip_stats(&author, &0), (0, 0));
}

#[test]
fn test_tip_flow_through_ledger() {
    let (env, posts) = setup();

    let owner = Address::generate(&env);
    let author = Address::generate(&env);
    let tipper = Address::generate(&env);

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    StellarAssetClient::new(&env, &token).mint(&tipper, &(10 * ONE));

    let ledger_id = env.register(EthTransfer, ());
    let ledger = EthTransferClient::new(&env, &ledger_id);
    ledger.initialize(&owner, &token);

    posts.create_post(&author, &String::from_str(&env, "Worth a tip"));
    ledger.deposit(&tipper, &ONE);

    // Value moves through the ledger, then the tip is recorded
    let tip = ONE / 4;
    ledger.transfer_to(&tipper, &author, &tip);
    posts.record_tip(&tipper, &author, &0, &tip);

    assert_eq!(ledger.get_balance(&tipper), ONE - tip);
    assert_eq!(ledger.get_balance(&author), tip);
    assert_eq!(posts.get_post_tip_stats(&author, &0), (1, tip));

    ledger.withdraw(&author, &tip);
    assert_eq!(ledger.get_balance(&author), 0);
    assert_eq!(ledger.get_contract_balance(&owner), ONE - tip);
}
