use common::error::{AppError, Res};
use sqlx::PgPool;

use crate::{dtos::credits::PurchaseWebhook, misc::packages};

const APPROVED_EVENT: &str = "PURCHASE_APPROVED";
const APPROVED_STATUS: &str = "APPROVED";

/// What to do with an incoming purchase notification, decided before any
/// database work.
#[derive(Debug, PartialEq)]
pub enum WebhookDecision {
    /// Not an approved purchase; acknowledge and move on.
    Ignore(&'static str),
    /// An approved purchase of a product we do not sell; acknowledge so the
    /// provider stops retrying, but grant nothing.
    Acknowledge(String),
    /// Grant `credits` to the buyer's account.
    Credit { email: String, credits: i32 },
}

/// Shared-secret check. When no token is configured the check is skipped,
/// which keeps local development working without provider credentials.
pub fn verify_token(provided: Option<&str>, expected: Option<&str>) -> Res<()> {
    match expected {
        None => Ok(()),
        Some(expected) if provided == Some(expected) => Ok(()),
        Some(_) => Err(AppError::Unauthorized(
            "Invalid webhook token".to_string(),
        )),
    }
}

/// Pure classification of the notification. Malformed approved purchases
/// (no buyer email, no product) are errors; everything non-approved is
/// acknowledged without effect.
pub fn decide(payload: &PurchaseWebhook) -> Res<WebhookDecision> {
    if payload.event != APPROVED_EVENT {
        return Ok(WebhookDecision::Ignore("event ignored"));
    }

    let status = payload
        .data
        .purchase
        .as_ref()
        .map(|purchase| purchase.status.as_str())
        .unwrap_or_default();
    if status != APPROVED_STATUS {
        return Ok(WebhookDecision::Ignore("purchase not approved"));
    }

    let email = payload
        .data
        .buyer
        .as_ref()
        .and_then(|buyer| buyer.email.as_deref())
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AppError::BadRequest("The purchase has no buyer email.".to_string()))?;

    let product_id = payload
        .data
        .product
        .as_ref()
        .and_then(|product| product.id.as_deref())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("The purchase has no product id.".to_string()))?;

    match packages::credits_for_product(product_id) {
        Some(credits) => Ok(WebhookDecision::Credit {
            email: email.to_string(),
            credits,
        }),
        None => Ok(WebhookDecision::Acknowledge(product_id.to_string())),
    }
}

/// Applies a credit grant. A buyer with no account here is a hard error so
/// the provider retries once the mismatch is resolved.
pub async fn apply_credit(pool: &PgPool, email: &str, credits: i32) -> Res<i32> {
    match db::profile::credit_profile_by_email(pool, email, credits).await? {
        Some(balance) => {
            log::info!("Credited {} credits to {} (balance {})", credits, email, balance);
            Ok(balance)
        }
        None => Err(AppError::NotFound(format!(
            "No account found for the buyer email {}",
            email
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::credits::{Buyer, Product, Purchase, PurchaseData};

    fn approved(email: Option<&str>, product: Option<&str>) -> PurchaseWebhook {
        PurchaseWebhook {
            event: APPROVED_EVENT.to_string(),
            data: PurchaseData {
                purchase: Some(Purchase {
                    status: APPROVED_STATUS.to_string(),
                }),
                buyer: Some(Buyer {
                    email: email.map(str::to_string),
                }),
                product: Some(Product {
                    id: product.map(str::to_string),
                }),
            },
        }
    }

    #[test]
    fn approved_purchase_of_a_known_product_grants_credits() {
        let decision = decide(&approved(Some("buyer@example.com"), Some("F101885804K"))).unwrap();
        assert_eq!(
            decision,
            WebhookDecision::Credit {
                email: "buyer@example.com".to_string(),
                credits: 50
            }
        );
    }

    #[test]
    fn other_events_are_ignored() {
        let mut payload = approved(Some("buyer@example.com"), Some("F101885804K"));
        payload.event = "PURCHASE_CANCELED".to_string();
        assert!(matches!(decide(&payload), Ok(WebhookDecision::Ignore(_))));
    }

    #[test]
    fn approved_event_with_pending_status_is_ignored() {
        let mut payload = approved(Some("buyer@example.com"), Some("F101885804K"));
        payload.data.purchase = Some(Purchase {
            status: "WAITING_PAYMENT".to_string(),
        });
        assert!(matches!(decide(&payload), Ok(WebhookDecision::Ignore(_))));
    }

    #[test]
    fn missing_buyer_email_is_an_error() {
        assert!(decide(&approved(None, Some("F101885804K"))).is_err());
        assert!(decide(&approved(Some(""), Some("F101885804K"))).is_err());
    }

    #[test]
    fn missing_product_is_an_error() {
        assert!(decide(&approved(Some("buyer@example.com"), None)).is_err());
    }

    #[test]
    fn unknown_product_is_acknowledged_without_credits() {
        let decision = decide(&approved(Some("buyer@example.com"), Some("Z999999999Z"))).unwrap();
        assert_eq!(
            decision,
            WebhookDecision::Acknowledge("Z999999999Z".to_string())
        );
    }

    #[test]
    fn token_check_only_applies_when_configured() {
        assert!(verify_token(None, None).is_ok());
        assert!(verify_token(Some("anything"), None).is_ok());
        assert!(verify_token(Some("secret"), Some("secret")).is_ok());
        assert!(verify_token(Some("wrong"), Some("secret")).is_err());
        assert!(verify_token(None, Some("secret")).is_err());
    }
}
