use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, logout};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/login/token", post(login))
        .route("/logout", post(logout))
}
