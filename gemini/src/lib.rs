use common::{
    env_config::Config,
    error::{AppError, Res},
};
use serde_json::{Value, json};

pub mod extract;

pub use extract::{InlineImage, extract_inline_image, extract_text};

/// Something that can turn a prompt (and optionally a reference image) into
/// an image. The batch loop and its tests run against this seam.
pub trait ImageModel {
    fn generate_image(
        &self,
        image: Option<&InlineImage>,
        prompt: &str,
    ) -> impl Future<Output = Res<InlineImage>>;
}

/// Client for the Google Generative Language REST API.
///
/// One call per operation; no retries and no request timeout on the
/// generation paths, matching the product's accepted behavior.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    image_model: String,
    text_model: String,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            image_model: config.gemini_image_model.clone(),
            text_model: config.gemini_text_model.clone(),
        }
    }

    fn endpoint_for_model(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }

    async fn generate_content(&self, model: &str, payload: Value) -> Res<Value> {
        let response = self
            .http
            .post(self.endpoint_for_model(model))
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "generateContent returned {}: {}",
                status, body
            )));
        }

        response.json::<Value>().await.map_err(AppError::from)
    }

    /// Generates a single image, optionally conditioned on an input image.
    /// Fails with the model's text explanation when no image part comes back.
    pub async fn generate_image(
        &self,
        image: Option<&InlineImage>,
        prompt: &str,
    ) -> Res<InlineImage> {
        let mut parts = Vec::new();
        if let Some(image) = image {
            parts.push(json!({
                "inlineData": { "mimeType": image.mime_type, "data": image.data }
            }));
        }
        parts.push(json!({ "text": prompt }));

        let payload = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "responseModalities": ["IMAGE", "TEXT"] },
        });

        let response = self.generate_content(&self.image_model, payload).await?;
        match extract_inline_image(&response) {
            Some(image) => Ok(image),
            None => {
                let explanation = extract_text(&response);
                Err(AppError::Upstream(if explanation.is_empty() {
                    "The AI did not return an image.".to_string()
                } else {
                    explanation
                }))
            }
        }
    }

    /// Generates free-form text.
    pub async fn generate_text(&self, prompt: &str) -> Res<String> {
        let payload = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });
        let response = self.generate_content(&self.text_model, payload).await?;
        let text = extract_text(&response);
        if text.is_empty() {
            return Err(AppError::Upstream(
                "The AI returned an empty response.".to_string(),
            ));
        }
        Ok(text)
    }

    /// Generates JSON constrained by `schema`. Returns the raw text for the
    /// caller to parse, since parse failures must stay distinguishable from
    /// API failures.
    pub async fn generate_structured(&self, prompt: &str, schema: Value) -> Res<String> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });
        let response = self.generate_content(&self.text_model, payload).await?;
        let text = extract_text(&response);
        if text.is_empty() {
            return Err(AppError::Upstream(
                "The AI returned an empty response.".to_string(),
            ));
        }
        Ok(text)
    }
}

impl ImageModel for GeminiClient {
    fn generate_image(
        &self,
        image: Option<&InlineImage>,
        prompt: &str,
    ) -> impl Future<Output = Res<InlineImage>> {
        GeminiClient::generate_image(self, image, prompt)
    }
}
