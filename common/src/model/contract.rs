use serde::{Deserialize, Serialize};

/// One rental contract row as exchanged through CSV.
///
/// `customer_id`, `apartment_id` and `user_id` reference other entities by
/// their identifiers; nothing checks that they exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub customer_id: String,
    pub apartment_id: String,
    pub start_date: String,
    pub end_date: String,
    pub create_date: String,
    pub retail_price: String,
    pub total: String,
    pub user_id: String,
}
