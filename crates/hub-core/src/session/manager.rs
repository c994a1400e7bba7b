use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{Mutex as AsyncMutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::avatar::{AvatarFile, AvatarRegistry};
use crate::catalog::SpaceItem;
use crate::clock::{Clock, SystemClock};
use crate::config::HubConfig;
use crate::error::{HubError, Result};
use crate::navigation::{Navigator, Route};
use crate::notification::{Notification, Notifier};
use crate::room::{ActiveRoom, ActiveRoomList, player_capacity};
use crate::storage::{KeyValueStore, SessionStore};
use crate::user::{SocialView, User, UserDirectory, matches_search};

/// Result of [`SessionManager::add_friend`].
///
/// Adding a friend never raises; a rejection is reported through the
/// notifier and returned here with the state left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFriendOutcome {
    Added(User),
    Rejected(HubError),
}

impl AddFriendOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

#[derive(Debug, Default)]
struct SessionState {
    current_user: Option<User>,
    is_loading: bool,
    view: SocialView,
    active_rooms: ActiveRoomList,
}

/// Single authority for who is logged in, who their friends are, who else
/// can be added as a friend, and which rooms were entered recently.
///
/// `SessionManager` is responsible for:
/// - Logging in (fabricating unknown accounts), signing up and logging out
/// - Profile updates and friend additions for the current user
/// - Keeping the friends / searchable-users views consistent with the directory
/// - Persisting the current user and active rooms to durable storage
///
/// Mutating operations are serialized; state changes are applied only after
/// every precondition and the storage write succeeded.
pub struct SessionManager {
    directory: Arc<dyn UserDirectory>,
    store: SessionStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    config: HubConfig,
    state: RwLock<SessionState>,
    /// Held for the duration of login/signup/logout/profile/friend operations
    operation_lock: AsyncMutex<()>,
    avatars: AvatarRegistry,
    rng: Mutex<StdRng>,
}

impl SessionManager {
    /// Creates a manager with an empty session.
    ///
    /// The manager reports `is_loading() == true` until [`restore`](Self::restore)
    /// has rehydrated the persisted session.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        config: HubConfig,
    ) -> Self {
        let state = SessionState {
            is_loading: true,
            active_rooms: ActiveRoomList::new(config.active_room_limit),
            ..SessionState::default()
        };

        Self {
            directory,
            store: SessionStore::new(store),
            notifier,
            navigator,
            clock: Arc::new(SystemClock),
            config,
            state: RwLock::new(state),
            operation_lock: AsyncMutex::new(()),
            avatars: AvatarRegistry::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Makes the simulated player counts reproducible.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Rehydrates the current user and active rooms from durable storage.
    pub async fn restore(&self) -> Result<()> {
        let _guard = self.operation_lock.lock().await;

        let result = async {
            let user = self.store.load_user().await?;
            let mut rooms = self
                .store
                .load_active_rooms(self.config.active_room_limit)
                .await?;
            rooms.clamp_to(self.clock.now_millis());
            let view = self.derive_view(user.as_ref()).await?;
            Ok::<_, HubError>((user, rooms, view))
        }
        .await;

        let mut state = self.state.write().await;
        state.is_loading = false;
        let (user, rooms, view) = result?;
        info!(
            "[SessionManager] Restored session (user: {}, active rooms: {})",
            user.as_ref().map(|u| u.id.as_str()).unwrap_or("none"),
            rooms.len()
        );
        state.current_user = user;
        state.active_rooms = rooms;
        state.view = view;
        Ok(())
    }

    // ============================================================================
    // Authentication
    // ============================================================================

    /// Logs in as the directory entry with `email`.
    ///
    /// Unknown emails are not rejected: a new identity is fabricated from the
    /// email instead. The password is not checked.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User> {
        let _guard = self.operation_lock.lock().await;
        info!("[SessionManager] Login requested for {}", email);

        self.set_loading(true).await;
        let result = self.login_inner(email).await;
        self.set_loading(false).await;

        self.report(result, Some(Route::Dashboard), |user| {
            Notification::info("Welcome!", format!("Logged in as {}.", user.nickname))
        })
    }

    async fn login_inner(&self, email: &str) -> Result<User> {
        self.simulate_latency(self.config.latency()).await;

        let user = match self.directory.find_by_email(email).await? {
            Some(existing) => existing.normalized(),
            None => {
                let fabricated = User::fabricate_from_email(Uuid::new_v4().to_string(), email);
                info!(
                    "[SessionManager] Fabricated identity {} for unknown email {}",
                    fabricated.id, email
                );
                fabricated
            }
        };

        self.commit_user(&user).await?;
        Ok(user)
    }

    /// Creates a new account and logs in as it.
    pub async fn signup(&self, email: &str, _password: &str, nickname: &str) -> Result<User> {
        let _guard = self.operation_lock.lock().await;
        info!("[SessionManager] Signup requested for {}", email);

        self.set_loading(true).await;
        let result = self.signup_inner(email, nickname).await;
        self.set_loading(false).await;

        self.report(result, Some(Route::Dashboard), |user| {
            Notification::info(
                "Account Created",
                format!("Welcome to MetaVerse Hub, {}!", user.nickname),
            )
        })
    }

    async fn signup_inner(&self, email: &str, nickname: &str) -> Result<User> {
        self.simulate_latency(self.config.latency()).await;

        if self.directory.find_by_email(email).await?.is_some() {
            return Err(HubError::duplicate_account(email));
        }

        let user = User::signed_up(Uuid::new_v4().to_string(), email, nickname);
        self.commit_user(&user).await?;
        Ok(user)
    }

    /// Clears the current user. Active rooms are kept.
    pub async fn logout(&self) -> Result<()> {
        let _guard = self.operation_lock.lock().await;
        info!("[SessionManager] Logout requested");

        self.set_loading(true).await;
        let result = self.logout_inner().await;
        self.set_loading(false).await;

        match result {
            Ok(()) => {
                self.navigator.navigate(Route::Login);
                Ok(())
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    async fn logout_inner(&self) -> Result<()> {
        self.simulate_latency(self.config.latency() / 2).await;

        let view = self.derive_view(None).await?;
        self.store.clear_user().await?;

        let mut state = self.state.write().await;
        state.current_user = None;
        state.view = view;
        Ok(())
    }

    // ============================================================================
    // Profile
    // ============================================================================

    /// Changes the current user's nickname and, optionally, avatar.
    ///
    /// A supplied avatar gets a `blob:` URL that resolves through
    /// [`resolve_avatar`](Self::resolve_avatar) for the lifetime of this manager
    /// only. The directory entry for the user is updated in place.
    pub async fn update_profile(&self, nickname: &str, avatar: Option<AvatarFile>) -> Result<User> {
        let _guard = self.operation_lock.lock().await;

        let Some(current) = self.current_user().await else {
            return Err(self.reject(HubError::NotAuthenticated));
        };

        self.set_loading(true).await;
        let result = self.update_profile_inner(current, nickname, avatar).await;
        self.set_loading(false).await;

        self.report(result, None, |_| {
            Notification::info("Profile Updated", "Your changes have been saved.")
        })
    }

    async fn update_profile_inner(
        &self,
        current: User,
        nickname: &str,
        avatar: Option<AvatarFile>,
    ) -> Result<User> {
        self.simulate_latency(self.config.latency()).await;

        let minted_url = avatar.map(|file| self.avatars.register(file));
        let updated = User {
            nickname: nickname.to_string(),
            avatar_url: minted_url
                .clone()
                .unwrap_or_else(|| current.avatar_url.clone()),
            ..current.clone()
        };

        let result = async {
            let in_directory = self.directory.update(&updated).await?;
            if let Err(e) = self.commit_user(&updated).await {
                if in_directory {
                    self.directory.update(&current).await?;
                }
                return Err(e);
            }
            Ok::<(), HubError>(())
        }
        .await;

        if let Err(e) = result {
            if let Some(url) = &minted_url {
                self.avatars.revoke(url);
            }
            return Err(e);
        }

        debug!("[SessionManager] Profile updated for {}", updated.id);
        Ok(updated)
    }

    /// Looks up the upload behind an avatar URL minted by this manager.
    pub fn resolve_avatar(&self, url: &str) -> Option<AvatarFile> {
        self.avatars.resolve(url)
    }

    // ============================================================================
    // Friends
    // ============================================================================

    /// Adds `friend_id` to the current user's friends.
    ///
    /// Rejections, checked in order: not logged in, adding oneself, already a
    /// friend, unknown id. The outcome is always notified.
    pub async fn add_friend(&self, friend_id: &str) -> AddFriendOutcome {
        let _guard = self.operation_lock.lock().await;

        match self.add_friend_inner(friend_id).await {
            Ok(friend) => {
                info!("[SessionManager] Added friend {}", friend.id);
                self.notifier.notify(Notification::info(
                    "Friend Added!",
                    format!("{} is now your friend.", friend.nickname),
                ));
                AddFriendOutcome::Added(friend)
            }
            Err(e) => {
                debug!("[SessionManager] Friend request for {} rejected: {}", friend_id, e);
                self.notifier.notify(Notification::from_error(&e));
                AddFriendOutcome::Rejected(e)
            }
        }
    }

    async fn add_friend_inner(&self, friend_id: &str) -> Result<User> {
        let current = self
            .current_user()
            .await
            .ok_or(HubError::NotAuthenticated)?;
        if friend_id == current.id {
            return Err(HubError::SelfFriendship);
        }
        if current.is_friend_with(friend_id) {
            return Err(HubError::already_friends(friend_id));
        }
        let friend = self
            .directory
            .find_by_id(friend_id)
            .await?
            .ok_or_else(|| HubError::not_found("user", friend_id))?;

        let mut updated = current;
        updated.friend_ids.push(friend_id.to_string());
        self.commit_user(&updated).await?;
        Ok(friend)
    }

    pub async fn is_friend(&self, user_id: &str) -> bool {
        let state = self.state.read().await;
        state
            .current_user
            .as_ref()
            .is_some_and(|u| u.is_friend_with(user_id))
    }

    /// Searchable users whose nickname or email contains `term`.
    pub async fn search_users(&self, term: &str) -> Vec<User> {
        let state = self.state.read().await;
        state
            .view
            .searchable_users
            .iter()
            .filter(|u| matches_search(u, term))
            .cloned()
            .collect()
    }

    // ============================================================================
    // Active rooms
    // ============================================================================

    /// Records that the user entered `space`.
    ///
    /// Has no failure path: a storage error is logged and the in-memory list
    /// stays authoritative until the next successful write.
    pub async fn add_active_room(&self, space: &SpaceItem) -> ActiveRoom {
        let players = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.gen_range(1..=player_capacity(space))
        };
        let now = self.clock.now_millis();

        let mut state = self.state.write().await;
        let room = state.active_rooms.enter(space, now, players).clone();
        if let Err(e) = self.store.save_active_rooms(&state.active_rooms).await {
            warn!("[SessionManager] Failed to persist active rooms: {}", e);
        }
        debug!(
            "[SessionManager] Entered space {} ({} players, {} active rooms)",
            space.id,
            players,
            state.active_rooms.len()
        );
        room
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.current_user.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    pub async fn friends(&self) -> Vec<User> {
        self.state.read().await.view.friends.clone()
    }

    pub async fn searchable_users(&self) -> Vec<User> {
        self.state.read().await.view.searchable_users.clone()
    }

    pub async fn active_rooms(&self) -> Vec<ActiveRoom> {
        self.state.read().await.active_rooms.to_vec()
    }

    /// Returns the current user when they hold the admin role.
    pub async fn require_admin(&self) -> Result<User> {
        let user = self.current_user().await.ok_or(HubError::NotAuthenticated)?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(HubError::Forbidden(
                "You do not have permission to view this page.".to_string(),
            ))
        }
    }

    // ============================================================================
    // Internals
    // ============================================================================

    /// Persists `user` as the current user, then swaps it and its derived
    /// views into memory.
    async fn commit_user(&self, user: &User) -> Result<()> {
        let view = self.derive_view(Some(user)).await?;
        self.store.save_user(user).await?;

        let mut state = self.state.write().await;
        state.current_user = Some(user.clone());
        state.view = view;
        Ok(())
    }

    async fn derive_view(&self, user: Option<&User>) -> Result<SocialView> {
        let directory = self.directory.list_all().await?;
        Ok(SocialView::derive(
            &directory,
            user,
            self.config.hide_admins_when_anonymous,
        ))
    }

    async fn set_loading(&self, loading: bool) {
        self.state.write().await.is_loading = loading;
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Notifies the outcome of a raising operation and passes the result on.
    fn report<F>(&self, result: Result<User>, route: Option<Route>, success: F) -> Result<User>
    where
        F: FnOnce(&User) -> Notification,
    {
        match result {
            Ok(user) => {
                self.notifier.notify(success(&user));
                if let Some(route) = route {
                    self.navigator.navigate(route);
                }
                Ok(user)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    fn reject(&self, err: HubError) -> HubError {
        warn!("[SessionManager] Operation rejected: {}", err);
        self.notifier.notify(Notification::from_error(&err));
        err
    }
}
