use serde::{Deserialize, Serialize};

/// Body of `GET /greeting`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello, {name}!"),
        }
    }
}
