use serde::{Deserialize, Serialize};

/// Purchase notification payload. Only the fields the credit grant needs
/// are modeled; everything else the provider sends is ignored.
#[derive(Debug, Deserialize)]
pub struct PurchaseWebhook {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub data: PurchaseData,
}

#[derive(Debug, Default, Deserialize)]
pub struct PurchaseData {
    pub purchase: Option<Purchase>,
    pub buyer: Option<Buyer>,
    pub product: Option<Product>,
}

#[derive(Debug, Deserialize)]
pub struct Purchase {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct Buyer {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SetCreditsRequest {
    pub credits: i32,
}
