use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// A registered user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
}

// A recorded sports match with a display score such as "1-2".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SportsMatch {
    pub id: i64,
    pub team1: String,
    pub team2: String,
    pub score: String,
}
