pub mod state;
pub mod login;
pub mod signup;
pub mod verify;

pub use state::{AuthState, Panel};
