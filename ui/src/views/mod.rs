mod account;
mod gateway;
mod home;

pub use account::{Activate, ResetFinish};
pub use gateway::{Login, Register};
pub use home::{Home, HomeState};
