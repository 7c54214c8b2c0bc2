pub mod jwt;
pub mod mailer;
