pub mod login_user;
pub mod register_user;

pub use login_user::{login_user_handler, LoginRequestDto};
pub use register_user::{register_user_handler, RegisterRequestDto};
