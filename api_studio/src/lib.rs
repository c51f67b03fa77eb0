use actix_web::web::{self};

pub mod routes {
    pub mod dualite;
    pub mod studio;
    pub mod upload;
}

mod services {
    pub(crate) mod credits;
    pub(crate) mod estimate;
    pub(crate) mod normalize;
    pub(crate) mod prompt;
    pub(crate) mod studio;
    pub(crate) mod views;
}

mod dtos {
    pub(crate) mod studio;
}

mod misc {
    pub(crate) mod styles;
}

pub fn mount_studio() -> actix_web::Scope {
    web::scope("/studio")
        .service(routes::upload::post_upload)
        .service(routes::studio::get_styles)
        .service(routes::studio::post_redesign)
        .service(routes::studio::post_concept)
        .service(routes::studio::post_variation)
        .service(routes::studio::post_creativity)
        .service(routes::studio::post_internal_views)
        .service(routes::studio::post_estimate)
        .service(routes::dualite::post_explain)
        .service(routes::dualite::post_generate)
}
