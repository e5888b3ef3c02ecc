use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::member::{get_current_member, register_member};

pub fn build_member_routers() -> Router<AppRegistry> {
    let members_routers = Router::new()
        .route("/", post(register_member))
        .route("/me", get(get_current_member));

    Router::new().nest("/members", members_routers)
}
