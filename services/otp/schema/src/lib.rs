//! sea-orm entities for the OTP service.

pub mod otps;
