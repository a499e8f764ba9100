pub mod forgot_password;
pub mod home;
pub mod login;
pub mod reset_password;

pub use forgot_password::*;
pub use home::*;
pub use login::*;
pub use reset_password::*;
