//! Friends and searchable-users derivation.
//!
//! Both views are pure functions of the directory and the current user, so
//! the manager can recompute them wholesale after any change.

use super::model::User;

/// The two derived views cached by the session manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialView {
    pub friends: Vec<User>,
    pub searchable_users: Vec<User>,
}

impl SocialView {
    pub fn derive(directory: &[User], current: Option<&User>, hide_admins: bool) -> Self {
        Self {
            friends: derive_friends(directory, current),
            searchable_users: derive_searchable(directory, current, hide_admins),
        }
    }
}

/// Directory entries whose id is in the current user's `friend_ids`.
pub fn derive_friends(directory: &[User], current: Option<&User>) -> Vec<User> {
    let Some(current) = current else {
        return Vec::new();
    };
    directory
        .iter()
        .filter(|u| u.id != current.id && current.is_friend_with(&u.id))
        .cloned()
        .collect()
}

/// Directory entries the current user may add as a friend.
///
/// Logged in: everyone except self and existing friends. Logged out: the whole
/// directory, minus administrative accounts when `hide_admins` is set.
pub fn derive_searchable(directory: &[User], current: Option<&User>, hide_admins: bool) -> Vec<User> {
    match current {
        Some(current) => directory
            .iter()
            .filter(|u| u.id != current.id && !current.is_friend_with(&u.id))
            .cloned()
            .collect(),
        None => directory
            .iter()
            .filter(|u| !(hide_admins && u.is_admin()))
            .cloned()
            .collect(),
    }
}

/// Case-insensitive substring match on nickname or email. An empty term
/// matches everyone.
pub fn matches_search(user: &User, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    user.nickname.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;

    fn user(id: &str, nickname: &str, friends: &[&str]) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", nickname.to_lowercase()),
            nickname: nickname.to_string(),
            avatar_url: String::new(),
            role: Role::User,
            friend_ids: friends.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn directory() -> Vec<User> {
        let mut admin = user("admin", "Boss", &["1"]);
        admin.role = Role::Admin;
        vec![
            user("1", "Meta", &["2", "3"]),
            user("2", "Alpha", &["1"]),
            user("3", "Beta", &["1"]),
            user("4", "Gamma", &[]),
            admin,
        ]
    }

    #[test]
    fn test_views_are_disjoint_and_exclude_self() {
        let dir = directory();
        let view = SocialView::derive(&dir, Some(&dir[0]), true);

        let friend_ids: Vec<_> = view.friends.iter().map(|u| u.id.as_str()).collect();
        let searchable_ids: Vec<_> = view.searchable_users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(friend_ids, vec!["2", "3"]);
        assert_eq!(searchable_ids, vec!["4", "admin"]);
    }

    #[test]
    fn test_anonymous_view_hides_admins() {
        let dir = directory();
        let view = SocialView::derive(&dir, None, true);
        assert!(view.friends.is_empty());
        assert_eq!(view.searchable_users.len(), 4);
        assert!(view.searchable_users.iter().all(|u| !u.is_admin()));

        let unfiltered = SocialView::derive(&dir, None, false);
        assert_eq!(unfiltered.searchable_users.len(), 5);
    }

    #[test]
    fn test_new_friend_moves_between_views() {
        let dir = directory();
        let mut current = dir[0].clone();
        current.friend_ids.push("4".to_string());

        let view = SocialView::derive(&dir, Some(&current), true);
        assert!(view.friends.iter().any(|u| u.id == "4"));
        assert!(view.searchable_users.iter().all(|u| u.id != "4"));
    }

    #[test]
    fn test_matches_search() {
        let u = user("2", "FriendAlpha", &[]);
        assert!(matches_search(&u, "alpha"));
        assert!(matches_search(&u, "FRIENDALPHA@"));
        assert!(matches_search(&u, ""));
        assert!(!matches_search(&u, "gamma"));
    }
}
