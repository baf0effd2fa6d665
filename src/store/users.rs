use parking_lot::RwLock;

use crate::models::User;

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterError {
    DuplicateUser,
}

/// Process-wide registered-user list. The duplicate check and the append
/// happen under the same write lock.
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        UserStore {
            users: RwLock::new(Vec::new()),
        }
    }

    pub fn exists(&self, username: &str) -> bool {
        self.users
            .read()
            .iter()
            .any(|user| user.username == username)
    }

    pub fn register(&self, username: &str, password: &str) -> Result<(), RegisterError> {
        let mut users = self.users.write();
        if users.iter().any(|user| user.username == username) {
            return Err(RegisterError::DuplicateUser);
        }
        users.push(User {
            username: username.to_string(),
            password: password.to_string(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        UserStore::new()
    }
}
