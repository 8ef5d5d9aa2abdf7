/// ======================= Messages =======================
pub const GENERIC_ERROR: &str = "Something went wrong!";
pub const VERIFIED_MESSAGE: &str = "Account verified successfully!";
pub const SIGNED_UP_MESSAGE: &str = "Account created. You can now log in.";
pub const RESENT_MESSAGE: &str = "A new code has been sent to your email.";

/// ======================= Button labels =======================
pub const BUSY_LABEL: &str = "Please wait...";
pub const VERIFYING_LABEL: &str = "Verifying...";
pub const SENDING_LABEL: &str = "Sending...";

pub const SIGNUP_LABEL: &str = "Create Account";
pub const LOGIN_LABEL: &str = "Login";
pub const VERIFY_LABEL: &str = "Verify Code";
pub const RESEND_LABEL: &str = "Resend Code";

/// ======================= Icons =======================
pub const ICON_ARROW: &str = "fa-arrow-right";
pub const ICON_CHECK: &str = "fa-check-circle";
pub const ICON_EXCLAMATION: &str = "fa-exclamation-circle";
pub const ICON_REDO: &str = "fa-redo";
pub const ICON_EYE: &str = "fa-eye";
pub const ICON_EYE_SLASH: &str = "fa-eye-slash";

/// Senior high school strands offered on the signup form.
pub const STRANDS: &[(&str, &str)] = &[
    ("STEM", "Science, Technology, Engineering and Mathematics"),
    ("ABM", "Accountancy, Business and Management"),
    ("HUMSS", "Humanities and Social Sciences"),
    ("GAS", "General Academic Strand"),
    ("TVL", "Technical-Vocational-Livelihood"),
];
