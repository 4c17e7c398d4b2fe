use crate::models::Person;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Candidate person fields taken from a request body. Any subset may be
/// present; unknown fields are silently ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PersonInput {
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "a.png")]
    pub image: Option<String>,
    #[schema(example = "Engineer")]
    pub title: Option<String>,
}

impl PersonInput {
    /// Update document containing only the provided fields.
    pub fn to_update_document(&self) -> Document {
        let mut update = Document::new();
        if let Some(name) = &self.name {
            update.insert("name", name);
        }
        if let Some(image) = &self.image {
            update.insert("image", image);
        }
        if let Some(title) = &self.title {
            update.insert("title", title);
        }
        update
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            image: person.image,
            title: person.title,
        }
    }
}
