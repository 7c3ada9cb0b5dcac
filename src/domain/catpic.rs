use derive_more::derive::Display;
use uuid::Uuid;

/// A stored cat picture: an opaque id and the raw image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{} ({} bytes)", id, data.len())]
pub struct CatPic {
    pub id: String,
    pub data: Vec<u8>,
}

impl CatPic {
    /// Builds a new picture under a freshly generated id.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            id: new_catpic_id(),
            data,
        }
    }
}

// ids are random v4 uuids, never reused once handed out
pub fn new_catpic_id() -> String {
    Uuid::new_v4().to_string()
}
