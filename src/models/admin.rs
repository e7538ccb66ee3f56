use serde::{Deserialize, Serialize};

/// A person allowed to modify the plan through the REST backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "id_admin")]
    pub id: i64,
    #[serde(rename = "id_pers")]
    pub person_id: i64,
    pub login: String,
    pub name: String,
    pub firstname: String,
}
