use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "id_pers")]
    pub id: i64,
    pub name: String,
    pub firstname: String,
    #[serde(rename = "id_team")]
    pub team_id: Option<i64>,
    pub team: Option<String>,
}
