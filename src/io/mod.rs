//! Loading city maps from files.

mod json;

pub use json::{load_cities, parse_cities};
