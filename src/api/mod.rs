pub mod format;

pub use format::{post_to_api, PostDto};
