//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use serde_json::json;

use crate::core::config::ResolvedConfig;
use crate::core::endpoint::EndpointKey;
use crate::core::record::Record;
use crate::core::state::App;

/// Creates a test App with the default endpoints and no data loaded.
pub fn test_app() -> App {
    App::from_config(&ResolvedConfig::default())
}

/// Three realistic records for the given endpoint.
pub fn sample_records(key: EndpointKey) -> Vec<Record> {
    let values = match key {
        EndpointKey::Posts => vec![
            json!({"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit\nsuscipit recusandae"}),
            json!({"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore vitae"}),
            json!({"userId": 2, "id": 3, "title": "ea molestias quasi", "body": "et iusto sed quo iure"}),
        ],
        EndpointKey::Users => vec![
            json!({
                "id": 1, "name": "Leanne Graham", "username": "Bret",
                "email": "Sincere@april.biz", "phone": "1-770-736-8031",
                "website": "hildegard.org",
                "company": {"name": "Romaguera-Crona"},
                "address": {"city": "Gwenborough"}
            }),
            json!({
                "id": 2, "name": "Ervin Howell", "username": "Antonette",
                "email": "Shanna@melissa.tv", "phone": "010-692-6593",
                "website": "anastasia.net",
                "company": {"name": "Deckow-Crist"},
                "address": {"city": "Wisokyburgh"}
            }),
            json!({"id": 3, "name": "Clementine Bauch", "username": "Samantha"}),
        ],
        EndpointKey::Albums => vec![
            json!({"userId": 1, "id": 1, "title": "quidem molestiae enim"}),
            json!({"userId": 1, "id": 2, "title": "sunt qui excepturi"}),
            json!({"userId": 2, "id": 3, "title": "omnis laborum odio"}),
        ],
        EndpointKey::Todos => vec![
            json!({"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}),
            json!({"userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": true}),
            json!({"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": false}),
        ],
    };
    values
        .into_iter()
        .map(|v| Record::from_value(key, v))
        .collect()
}
