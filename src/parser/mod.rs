pub mod cat_response;

pub use cat_response::parse_indices;
