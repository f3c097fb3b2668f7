use serde::{Deserialize, Serialize};

/// The identity handed back by a successful authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image: String,
}
