use crate::domain::User;

// Errors that can occur while appending a user.
#[derive(Debug, PartialEq)]
pub enum RosterError {
    DuplicateId { id: i64 },
}

// In-memory roster of user records, kept in insertion order.
#[derive(Debug, Default)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    // Create a roster with an empty user list.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    // Create a roster pre-populated with the demo seed records.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "John".to_string(),
                },
                User {
                    id: 2,
                    name: "Jane".to_string(),
                },
            ],
        }
    }

    // Every user currently held, in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    // Find the first user whose id matches.
    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    // Append a user, rejecting an id that is already taken.
    pub fn add(&mut self, user: User) -> Result<(), RosterError> {
        if self.users.iter().any(|existing| existing.id == user.id) {
            return Err(RosterError::DuplicateId { id: user.id });
        }

        self.users.push(user);
        Ok(())
    }
}
