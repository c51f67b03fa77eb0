use serde::{Deserialize, Serialize};

use crate::services::estimate::CostEstimate;

fn default_prompt() -> String {
    String::new()
}

/// Body of the image-conditioned paid operations (redesign, concept,
/// variation, internal views). `image` is a base64 data URL.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub image: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    pub style_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreativityRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    pub style_id: Option<String>,
}

/// Result of a paid single-image operation. `credits` is the post-debit
/// balance; `None` with a `warning` means the debit write failed after the
/// image was already produced and the client balance is stale.
#[derive(Debug, Serialize)]
pub struct PaidImageResponse {
    pub image: String,
    pub cost: i32,
    pub credits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InternalViewsResponse {
    pub images: Vec<String>,
    pub cost: i32,
    pub credits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub estimate: CostEstimate,
    pub cost: i32,
    pub credits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub filename: String,
    pub mime_type: String,
    /// Base64-encoded file contents.
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// The canonical image input for the generation operations (data URL).
    pub image: String,
    /// Display preview reference; for PDFs this is the rasterized page.
    pub preview: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct StyleDto {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ExplainCodeRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateCodeRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct DualiteResponse {
    pub text: String,
}
