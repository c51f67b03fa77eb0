use actix_web::web::{self};

pub mod routes {
    pub mod projects;
}

mod services {
    pub(crate) mod projects;
}

mod dtos {
    pub(crate) mod projects;
}

pub fn mount_projects() -> actix_web::Scope {
    web::scope("/projects")
        .service(routes::projects::get_projects)
        .service(routes::projects::post_save)
        .service(routes::projects::delete_project)
        .service(routes::projects::delete_generation)
}
