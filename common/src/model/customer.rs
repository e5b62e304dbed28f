use serde::{Deserialize, Serialize};

/// One customer row as exchanged through CSV.
///
/// Every value is carried as text; the date of birth is not parsed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub citizen_id: String,
    pub address: String,
    pub dob: String,
    pub phone_number: String,
}
