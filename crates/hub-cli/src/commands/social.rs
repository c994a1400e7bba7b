use anyhow::Result;
use hub_infrastructure::HubRuntime;

use super::console::print_user;

pub async fn friends(runtime: &HubRuntime) {
    if runtime.manager.current_user().await.is_none() {
        println!("Log in to see your friends.");
        return;
    }
    let friends = runtime.manager.friends().await;
    if friends.is_empty() {
        println!("No friends yet. Try `hub search`.");
    }
    for friend in &friends {
        print_user(friend);
    }
}

pub async fn search(runtime: &HubRuntime, term: &str) {
    for user in runtime.manager.search_users(term).await {
        print_user(&user);
    }
}

pub async fn add_friend(runtime: &HubRuntime, user_id: &str) {
    // Outcome is reported by the notifier
    runtime.manager.add_friend(user_id).await;
}

pub async fn admin(runtime: &HubRuntime) -> Result<()> {
    let user = runtime.manager.require_admin().await?;
    println!("Welcome to the admin panel, {}.", user.nickname);
    Ok(())
}
