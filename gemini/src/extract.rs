use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use common::error::{AppError, Res};
use serde_json::Value;

/// An image as the API carries it: base64 payload plus mime type.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: BASE64.encode(bytes),
        }
    }

    /// Renders as a `data:` URL, the opaque image reference the rest of the
    /// system stores and serves.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Parses a `data:<mime>;base64,<payload>` URL back into an inline image.
    pub fn from_data_url(url: &str) -> Res<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| AppError::BadRequest("Not a data URL".to_string()))?;
        let (mime_type, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| AppError::BadRequest("Data URL is not base64-encoded".to_string()))?;
        if mime_type.is_empty() || data.is_empty() {
            return Err(AppError::BadRequest("Empty data URL".to_string()));
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    pub fn decode_bytes(&self) -> Res<Vec<u8>> {
        BASE64
            .decode(self.data.as_bytes())
            .map_err(|e| AppError::BadRequest(format!("Invalid base64 image payload: {}", e)))
    }
}

/// Pulls the first inline image out of a `generateContent` response.
/// The API spells the field `inlineData` but `inline_data` shows up too.
pub fn extract_inline_image(response: &Value) -> Option<InlineImage> {
    let candidates = response.get("candidates")?.as_array()?;
    for candidate in candidates {
        let parts = candidate.get("content")?.get("parts")?.as_array()?;
        for part in parts {
            let Some(inline) = part.get("inlineData").or_else(|| part.get("inline_data")) else {
                continue;
            };
            let data = inline.get("data").and_then(Value::as_str).unwrap_or("");
            if data.is_empty() {
                continue;
            }
            let mime_type = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(Value::as_str)
                .unwrap_or("image/png");
            return Some(InlineImage {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            });
        }
    }
    None
}

/// Concatenates the text parts of the first candidate, the same value the
/// official SDKs expose as `response.text`.
pub fn extract_text(response: &Value) -> String {
    let mut out = String::new();
    let parts = response
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    for part in parts {
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image_response(data: &str, mime: &str) -> Value {
        json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here you go" },
                        { "inlineData": { "mimeType": mime, "data": data } }
                    ]
                }
            }]
        })
    }

    #[test]
    fn picks_first_inline_image_part() {
        let response = image_response("aGVsbG8=", "image/png");
        let image = extract_inline_image(&response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn accepts_snake_case_inline_data() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inline_data": { "mime_type": "image/jpeg", "data": "Zm9v" } }]
                }
            }]
        });
        let image = extract_inline_image(&response).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn empty_inline_payload_is_no_image() {
        let response = image_response("", "image/png");
        assert!(extract_inline_image(&response).is_none());
    }

    #[test]
    fn text_only_response_has_no_image_but_keeps_explanation() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I cannot render that plan." }] }
            }]
        });
        assert!(extract_inline_image(&response).is_none());
        assert_eq!(extract_text(&response), "I cannot render that plan.");
    }

    #[test]
    fn data_url_round_trip() {
        let image = InlineImage::from_bytes("image/png", b"hello");
        let url = image.to_data_url();
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
        let parsed = InlineImage::from_data_url(&url).unwrap();
        assert_eq!(parsed, image);
        assert_eq!(parsed.decode_bytes().unwrap(), b"hello");
    }

    #[test]
    fn rejects_non_data_urls() {
        assert!(InlineImage::from_data_url("https://example.com/a.png").is_err());
        assert!(InlineImage::from_data_url("data:image/png,plain").is_err());
    }
}
