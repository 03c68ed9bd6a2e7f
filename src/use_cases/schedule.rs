use crate::domain::SportsMatch;

// Errors that can occur while appending a match.
#[derive(Debug, PartialEq)]
pub enum ScheduleError {
    DuplicateId { id: i64 },
}

// In-memory schedule of match records, kept in insertion order.
#[derive(Debug, Default)]
pub struct Schedule {
    matches: Vec<SportsMatch>,
}

impl Schedule {
    // Create a schedule with an empty match list.
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    // Create a schedule pre-populated with the demo seed records.
    pub fn seeded() -> Self {
        Self {
            matches: vec![
                SportsMatch {
                    id: 1,
                    team1: "Team A".to_string(),
                    team2: "Team B".to_string(),
                    score: "0-0".to_string(),
                },
                SportsMatch {
                    id: 2,
                    team1: "Team C".to_string(),
                    team2: "Team D".to_string(),
                    score: "1-2".to_string(),
                },
            ],
        }
    }

    // Every match currently held, in insertion order.
    pub fn list(&self) -> &[SportsMatch] {
        &self.matches
    }

    // Append a match, rejecting an id that is already taken.
    pub fn add(&mut self, game: SportsMatch) -> Result<(), ScheduleError> {
        if self.matches.iter().any(|existing| existing.id == game.id) {
            return Err(ScheduleError::DuplicateId { id: game.id });
        }

        self.matches.push(game);
        Ok(())
    }
}
