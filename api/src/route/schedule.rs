use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::schedule::{register_schedule, show_schedule_list};

pub fn build_schedule_routers() -> Router<AppRegistry> {
    Router::new().route("/schedules", get(show_schedule_list).post(register_schedule))
}
