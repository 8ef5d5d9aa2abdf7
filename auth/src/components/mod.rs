pub mod form;
pub mod notification;
pub mod otp_timer;
pub mod submit_button;
pub mod switch_link;
