use crate::domain::types::{OTP_TTL_SECS, OtpEmail};

pub const OTP_EMAIL_SUBJECT: &str = "Your Verification Code";

/// Render the verification email carrying `code`.
pub fn render_otp_email(to: &str, code: &str) -> OtpEmail {
    let minutes = OTP_TTL_SECS / 60;
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>Verification Code</h2>
  <p>Your verification code is:</p>
  <div style="background-color: #f4f4f4; padding: 20px; text-align: center; font-size: 24px; letter-spacing: 5px; margin: 20px 0;">
    <strong>{code}</strong>
  </div>
  <p>This code will expire in {minutes} minutes.</p>
  <p>If you didn't request this code, please ignore this email.</p>
</div>"#
    );
    let text = format!(
        "Your verification code is: {code}\n\n\
         This code will expire in {minutes} minutes.\n\
         If you didn't request this code, please ignore this email.\n"
    );
    OtpEmail {
        to: to.to_owned(),
        subject: OTP_EMAIL_SUBJECT.to_owned(),
        html,
        text,
    }
}
