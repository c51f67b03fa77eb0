use actix_web::{Responder, post, web};
use common::{
    error::{AppError, Res},
    http::Success,
};
use gemini::GeminiClient;

use crate::dtos::studio::{DualiteResponse, ExplainCodeRequest, GenerateCodeRequest};

fn explain_prompt(code: &str) -> String {
    format!(
        "You are a senior software engineer. Explain the following code snippet in clear, plain language, covering what it does, how it works and anything noteworthy about it:\n\n{}",
        code
    )
}

fn generate_prompt(request: &str) -> String {
    format!(
        "You are a senior software engineer. Write clean, well-structured code for the following request. Respond with the code and brief inline comments only:\n\n{}",
        request
    )
}

/// Free text-model helper: explains a pasted code snippet.
#[post("/dualite/explain")]
async fn post_explain(
    client: web::Data<GeminiClient>,
    req: web::Json<ExplainCodeRequest>,
) -> Res<impl Responder> {
    if req.code.trim().is_empty() {
        return Err(AppError::BadRequest("Provide the code to explain.".to_string()));
    }
    let text = client.generate_text(&explain_prompt(&req.code)).await?;
    Success::ok(DualiteResponse { text })
}

/// Free text-model helper: generates code from a description.
#[post("/dualite/generate")]
async fn post_generate(
    client: web::Data<GeminiClient>,
    req: web::Json<GenerateCodeRequest>,
) -> Res<impl Responder> {
    if req.prompt.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Describe the code you want generated.".to_string(),
        ));
    }
    let text = client.generate_text(&generate_prompt(&req.prompt)).await?;
    Success::ok(DualiteResponse { text })
}
