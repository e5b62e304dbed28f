use serde::{Deserialize, Serialize};

/// One apartment row as exchanged through CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub address: String,
    pub number_of_room: String,
    pub retail_price: String,
}
