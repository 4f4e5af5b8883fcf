pub mod post;
pub mod share;
pub mod user;

pub use post::Post;
pub use share::Share;
pub use user::User;
