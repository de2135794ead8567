use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain acknowledgement body returned by mutations that carry no entity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub response: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { response: msg.into() }
    }
}
