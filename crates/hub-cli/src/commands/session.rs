use std::path::Path;

use anyhow::{Context, Result};
use hub_core::session::AvatarFile;
use hub_infrastructure::HubRuntime;

use super::console::print_user;

pub async fn login(runtime: &HubRuntime, email: &str, password: &str) -> Result<()> {
    let user = runtime.manager.login(email, password).await?;
    print_user(&user);
    Ok(())
}

pub async fn signup(runtime: &HubRuntime, email: &str, password: &str, nickname: &str) -> Result<()> {
    let user = runtime.manager.signup(email, password, nickname).await?;
    print_user(&user);
    Ok(())
}

pub async fn logout(runtime: &HubRuntime) -> Result<()> {
    runtime.manager.logout().await?;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami(runtime: &HubRuntime) {
    match runtime.manager.current_user().await {
        Some(user) => {
            print_user(&user);
            println!("avatar: {}", user.avatar_url);
        }
        None => println!("Not logged in."),
    }
}

pub async fn profile(runtime: &HubRuntime, nickname: &str, avatar: Option<&Path>) -> Result<()> {
    let avatar = match avatar {
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read avatar {:?}", path))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "avatar".to_string());
            Some(AvatarFile::new(file_name, bytes))
        }
        None => None,
    };

    let user = runtime.manager.update_profile(nickname, avatar).await?;
    print_user(&user);
    Ok(())
}
