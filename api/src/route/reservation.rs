use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{create_reservation, delete_reservation, show_reservation_list};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", get(show_reservation_list).post(create_reservation))
        .route("/:reservation_id", delete(delete_reservation));

    Router::new().nest("/reservations", reservations_routers)
}
