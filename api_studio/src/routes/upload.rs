use actix_web::{Responder, post, web};
use common::{error::Res, http::Success};

use crate::{dtos::studio::UploadRequest, services};

/// Normalizes an uploaded file into the canonical image input. Free.
#[post("/uploads")]
async fn post_upload(req: web::Json<UploadRequest>) -> Res<impl Responder> {
    let response = services::normalize::normalize_upload(req.into_inner()).await?;
    Success::ok(response)
}
