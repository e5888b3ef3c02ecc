pub mod auth;
pub mod health;
pub mod member;
pub mod reservation;
pub mod schedule;
pub mod theme;
