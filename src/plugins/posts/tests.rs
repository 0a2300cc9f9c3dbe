use crate::plugins::posts::models::{CreatePost, PostDto, PostRecord, UpdatePost};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

fn sample_record() -> PostRecord {
    PostRecord {
        id: Uuid::new_v4(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        title: "T".to_string(),
        content: "C".to_string(),
        created: Utc::now(),
    }
}

#[test]
fn dto_concatenates_author_name() {
    let rec = sample_record();
    let dto = PostDto::from(rec);
    assert_eq!(dto.author, "Jane Doe");
}

#[test]
fn dto_preserves_id_and_created() {
    let rec = sample_record();
    let id = rec.id;
    let created = rec.created;
    let dto = PostDto::from(rec);
    assert_eq!(dto.id, id);
    assert_eq!(dto.created, created);
}

#[test]
fn wire_object_has_exactly_five_keys() {
    let dto = PostDto::from(sample_record());
    let value = serde_json::to_value(&dto).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(keys, vec!["author", "content", "created", "id", "title"]);
}

#[test]
fn create_body_parses_camel_case_author() {
    let body = json!({
        "author": {"firstName": "Jane", "lastName": "Doe"},
        "title": "T",
        "content": "C"
    });
    let parsed: CreatePost = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.author.first_name, "Jane");
    assert_eq!(parsed.author.last_name, "Doe");
}

#[test]
fn create_body_rejects_missing_field() {
    let body = json!({
        "author": {"firstName": "Jane", "lastName": "Doe"},
        "title": "T"
    });
    assert!(serde_json::from_value::<CreatePost>(body).is_err());
}

#[test]
fn update_body_id_is_optional() {
    let with_id = json!({
        "id": Uuid::new_v4(),
        "author": {"firstName": "John", "lastName": "Smith"},
        "title": "Y",
        "content": "X"
    });
    let parsed: UpdatePost = serde_json::from_value(with_id).unwrap();
    assert!(parsed.id.is_some());

    let without_id = json!({
        "author": {"firstName": "John", "lastName": "Smith"},
        "title": "Y",
        "content": "X"
    });
    let parsed: UpdatePost = serde_json::from_value(without_id).unwrap();
    assert!(parsed.id.is_none());
}
