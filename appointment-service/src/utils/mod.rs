pub mod json;

pub use json::{rejection_response, JsonBody};
