use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person document as stored in the `people` collection. The id is assigned
/// at creation and never reassigned; every other field is optional and absent
/// fields are omitted from the stored document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Person {
    pub fn new(name: Option<String>, image: Option<String>, title: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            image,
            title,
        }
    }
}
