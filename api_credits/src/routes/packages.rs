use actix_web::{Responder, get};
use common::{error::Res, http::Success};

use crate::misc::packages::CREDIT_PACKAGES;

#[get("/packages")]
async fn get_packages() -> Res<impl Responder> {
    Success::ok(CREDIT_PACKAGES)
}
