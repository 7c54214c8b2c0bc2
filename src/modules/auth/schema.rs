use serde::{Deserialize, Serialize};

use crate::modules::user::schema::UserResponse;

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SendOtpResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct VerifySessionResponse {
    pub user: UserResponse,
}
