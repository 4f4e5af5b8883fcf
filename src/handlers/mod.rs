pub mod posts;
pub mod public;
