use actix_web::web::{self};

pub mod routes {
    pub mod admin;
    pub mod packages;
    pub mod webhook;
}

mod services {
    pub(crate) mod webhook;
}

mod dtos {
    pub(crate) mod credits;
}

mod misc {
    pub(crate) mod packages;
}

/// Authenticated credit endpoints.
pub fn mount_credits() -> actix_web::Scope {
    web::scope("/credits").service(routes::packages::get_packages)
}

/// Payment-provider callback; mounted outside the auth middleware because
/// the provider does not carry a user token.
pub fn mount_webhook() -> actix_web::Scope {
    web::scope("/pay").service(routes::webhook::post_webhook)
}

pub fn mount_admin() -> actix_web::Scope {
    web::scope("/admin")
        .service(routes::admin::get_users)
        .service(routes::admin::put_user_credits)
}
