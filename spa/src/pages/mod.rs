pub mod admin;
pub mod charts;
pub mod history;
pub mod insights;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod upload;
