use std::sync::Arc;

use actix_web::{HttpRequest, Responder, post, web};
use common::{env_config::Config, error::Res, http::Success};
use sqlx::PgPool;

use crate::{
    dtos::credits::{PurchaseWebhook, WebhookAck},
    services::webhook::{self, WebhookDecision},
};

const TOKEN_HEADER: &str = "X-Hotmart-Hottok";

#[post("/webhook")]
async fn post_webhook(
    http_req: HttpRequest,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<PurchaseWebhook>,
) -> Res<impl Responder> {
    let provided = http_req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    webhook::verify_token(provided, config.hotmart_webhook_token.as_deref())?;

    match webhook::decide(&req)? {
        WebhookDecision::Ignore(reason) => Success::ok(WebhookAck {
            received: true,
            message: reason.to_string(),
        }),
        WebhookDecision::Acknowledge(product_id) => {
            log::warn!("Approved purchase of unmapped product {}", product_id);
            Success::ok(WebhookAck {
                received: true,
                message: "product not mapped to a credit package".to_string(),
            })
        }
        WebhookDecision::Credit { email, credits } => {
            let pg_pool: &PgPool = &**pool;
            webhook::apply_credit(pg_pool, &email, credits).await?;
            Success::ok(WebhookAck {
                received: true,
                message: format!("{} credits granted", credits),
            })
        }
    }
}
