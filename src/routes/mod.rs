pub mod exams;

pub mod invigilators;

pub mod registrations;

pub mod rooms;

pub mod seating;

pub mod state;

pub mod students;

pub mod frontend;

pub use exams::configure_exams_routes;
pub use frontend::configure_frontend_routes;
pub use invigilators::configure_invigilators_routes;
pub use registrations::configure_registrations_routes;
pub use rooms::configure_rooms_routes;
pub use seating::configure_seating_routes;
pub use state::configure_state_routes;
pub use students::configure_students_routes;

use actix_web::web;

/// 注册全部 API 路由，前端 fallback 需最后注册
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_state_routes)
        .configure(configure_rooms_routes)
        .configure(configure_exams_routes)
        .configure(configure_students_routes)
        .configure(configure_invigilators_routes)
        .configure(configure_registrations_routes)
        .configure(configure_seating_routes);
}
