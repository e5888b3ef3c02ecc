use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::theme::{delete_theme, register_theme, show_theme_list};

pub fn build_theme_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new()
        .route("/", post(register_theme))
        .route("/:theme_id", delete(delete_theme));

    Router::new()
        .route("/themes", get(show_theme_list))
        .nest("/admin/themes", admin_routers)
}
