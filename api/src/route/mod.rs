use axum::Router;
use registry::AppRegistry;

pub mod auth;
pub mod health;
pub mod member;
pub mod reservation;
pub mod schedule;
pub mod theme;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(auth::build_auth_routers())
        .merge(member::build_member_routers())
        .merge(theme::build_theme_routers())
        .merge(schedule::build_schedule_routers())
        .merge(reservation::build_reservation_routers())
}
