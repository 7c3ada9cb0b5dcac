use serde::{Deserialize, Serialize};

/// Body of a successful create.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedCatPic {
    pub id: String,
}

/// One entry of the list endpoint. Never carries the blob.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatPicInfo {
    pub id: String,
}

pub const UPDATED_MESSAGE: &str = "Cat picture updated successfully";
pub const NOT_FOUND_MESSAGE: &str = "Cat picture not found";
