use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use userbase_core::UserId;
use userbase_infra::{InMemoryStore, Store};
use userbase_users::{NewUser, User, UserPatch};

/// Fixed result of `GET /user/name`.
const OWNER_NAME: &str = "Saefulloh Maslul";

/// CRUD service for the user resource.
///
/// Owns the backing store and the id sequence. Handlers treat it as an
/// opaque capability; the service is the sole mutator of user records.
pub struct UserService {
    store: Arc<dyn Store<UserId, User>>,
    next_id: AtomicI64,
}

impl UserService {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn Store<UserId, User>>) -> Self {
        Self {
            store,
            next_id: AtomicI64::new(1),
        }
    }

    /// All users, ordered by id.
    pub fn get_users(&self) -> Vec<User> {
        let mut users = self.store.list();
        users.sort_by_key(|u| u.id);
        users
    }

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.store.get(&id)
    }

    pub fn create_user(&self, new_user: NewUser) -> User {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let user = new_user.into_user(id, Utc::now());
        self.store.upsert(id, user.clone());
        user
    }

    /// Partial overwrite: only supplied fields change; `updated_at` is
    /// refreshed. Returns `None` when the id does not exist.
    pub fn update_user(&self, id: UserId, patch: UserPatch) -> Option<User> {
        let mut user = self.store.get(&id)?;
        patch.apply(&mut user);
        user.updated_at = Utc::now();
        self.store.upsert(id, user.clone());
        Some(user)
    }

    /// Remove a user, returning the removed record.
    pub fn delete_user(&self, id: UserId) -> Option<User> {
        self.store.remove(&id)
    }

    pub fn owner_name(&self) -> &'static str {
        OWNER_NAME
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
