mod email_input;
mod otp_input;
mod password_input;
mod strand_select;
mod username_input;

pub use email_input::*;
pub use otp_input::*;
pub use password_input::*;
pub use strand_select::*;
pub use username_input::*;
