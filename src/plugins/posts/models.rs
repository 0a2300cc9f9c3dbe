use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Author as clients send it: two separate name fields.
#[derive(Deserialize, Debug)]
pub struct AuthorName {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Deserialize, Debug)]
pub struct CreatePost {
    pub author: AuthorName,
    pub title: String,
    pub content: String,
}

/// Full replacement of author/title/content. Clients may echo the record id
/// in the body; the path parameter is authoritative and the body id is ignored.
#[derive(Deserialize, Debug)]
pub struct UpdatePost {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub author: AuthorName,
    pub title: String,
    pub content: String,
}

/// A post as stored: author kept as two columns, `created` set on insert.
#[derive(FromRow, Debug)]
pub struct PostRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// The wire representation. Exactly these five keys, with the author
/// collapsed to a single "First Last" string.
#[derive(Serialize, Debug)]
pub struct PostDto {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub title: String,
    pub created: DateTime<Utc>,
}

impl From<PostRecord> for PostDto {
    fn from(rec: PostRecord) -> Self {
        PostDto {
            id: rec.id,
            author: format!("{} {}", rec.first_name, rec.last_name),
            content: rec.content,
            title: rec.title,
            created: rec.created,
        }
    }
}
