use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    // None marks a value that failed numeric coercion; serialized as null.
    pub budget: Option<i64>,
    pub travel_time: Option<i64>,
    pub route: String,
    // Assigned by the durable store only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Destination {
    pub fn new(id: i64, fields: NewDestination) -> Self {
        Destination {
            id,
            name: fields.name,
            budget: fields.budget,
            travel_time: fields.travel_time,
            route: fields.route,
            created_at: None,
            updated_at: None,
        }
    }
}

/// The four creation fields, already checked for presence at the gateway.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub budget: Option<i64>,
    pub travel_time: Option<i64>,
    pub route: String,
}
