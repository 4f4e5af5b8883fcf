pub mod login;
pub mod register;
mod utils;

pub use login::login;
pub use register::register;
