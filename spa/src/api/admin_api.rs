use shared::{AdminAnalytics, AdminStats, AdminUser, UpdateUserRequest};

use crate::api::client::{self, ApiError};

pub async fn get_users() -> Result<Vec<AdminUser>, ApiError> {
    let response = client::get("/admin/users").send().await?;
    client::expect_data(response).await
}

pub async fn get_stats() -> Result<AdminStats, ApiError> {
    let response = client::get("/admin/stats").send().await?;
    client::expect_data(response).await
}

pub async fn get_analytics() -> Result<AdminAnalytics, ApiError> {
    let response = client::get("/admin/analytics").send().await?;
    client::expect_data(response).await
}

pub async fn update_user(user_id: &str, request: &UpdateUserRequest) -> Result<(), ApiError> {
    let response = client::put(&format!("/admin/users/{user_id}"))
        .json(request)?
        .send()
        .await?;
    client::expect_ok(response).await?;
    log::info!("Api admin update user, user_id={user_id}");
    Ok(())
}

pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    let response = client::delete(&format!("/admin/users/{user_id}"))
        .send()
        .await?;
    client::expect_ok(response).await?;
    log::info!("Api admin delete user, user_id={user_id}");
    Ok(())
}
