#[macro_use]
extern crate diesel;

pub mod actions;
pub mod api;
pub mod error;
pub mod models;
#[rustfmt::skip]
pub mod schema;
