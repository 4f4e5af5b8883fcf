// The authorization-and-ownership-gated post operations.
//
// Gate steps 1-2 (credential presence, identity decode) run once in
// `middleware::bearer_auth_middleware`; step 3 (ownership) is the explicit
// `require_owner` predicate composed by update and delete after loading
// their target.
pub mod create;
pub mod delete;
pub mod get;
pub mod share;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use get::get;
pub use share::{share, unshare};
pub use update::update;
