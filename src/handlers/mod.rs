pub mod health;
pub mod list;
pub mod signup;
pub mod unregister;
