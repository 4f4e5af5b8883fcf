pub mod manager;
pub mod models;
pub mod posts;
pub mod shares;
pub mod users;

pub use manager::{DatabaseError, DatabaseManager};
pub use posts::PostRepository;
pub use shares::ShareRepository;
pub use users::UserRepository;
