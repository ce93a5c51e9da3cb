//! Notification wire types.

use serde::{Deserialize, Serialize};

/// An application-status notification row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "idNotification")]
    pub id: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(rename = "nameCompany", default)]
    pub company_name: String,
}
