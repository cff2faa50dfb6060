use shared::{
    AuthData, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
    UserProfile,
};

use crate::api::client::{self, ApiError};

pub async fn login(request: &LoginRequest) -> Result<AuthData, ApiError> {
    let response = client::post("/auth/login").json(request)?.send().await?;
    let data: AuthData = client::expect_data(response).await?;
    log::info!("Api auth login, email={}", request.email);
    Ok(data)
}

pub async fn register(request: &RegisterRequest) -> Result<AuthData, ApiError> {
    let response = client::post("/auth/register").json(request)?.send().await?;
    let data: AuthData = client::expect_data(response).await?;
    log::info!("Api auth register, email={}", request.email);
    Ok(data)
}

pub async fn get_profile() -> Result<UserProfile, ApiError> {
    let response = client::get("/auth/profile").send().await?;
    client::expect_data(response).await
}

pub async fn update_profile(request: &UpdateProfileRequest) -> Result<UserProfile, ApiError> {
    let response = client::put("/auth/profile").json(request)?.send().await?;
    let user: UserProfile = client::expect_data(response).await?;
    log::info!("Api update profile, email={}", user.email);
    Ok(user)
}

pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), ApiError> {
    let response = client::put("/auth/change-password")
        .json(request)?
        .send()
        .await?;
    client::expect_ok(response).await?;
    log::info!("Api change password");
    Ok(())
}
