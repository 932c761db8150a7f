use serde::{Deserialize, Serialize};

/// Employee record owned by the standalone employee-ms service. It is not
/// federated with database-api and keeps its own sequential id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}
