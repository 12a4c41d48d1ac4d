pub mod ranking;

pub use ranking::*;

use rocket::get;

#[get("/")]
pub fn index() -> &'static str {
    "mvrank API - see /api/ranking"
}

#[get("/health")]
pub fn health() -> &'static str {
    "ok"
}
