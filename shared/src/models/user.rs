//! Cafeteria user (employee) models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee who buys from the cafeteria
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub department: String,
}

/// Draft user record before an id is assigned; also the update payload
/// (the id itself is immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub department: String,
}
