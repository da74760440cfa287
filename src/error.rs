#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("decode error: {reason}")]
    Decode { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
