use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Signup {
    pub id: i32,
    pub day: String,
    pub hour: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Admin {
    pub username: String,
    pub password_hash: String,
}
