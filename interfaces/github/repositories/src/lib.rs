//! GitHub REST client for a user's public repository list
//!
//! - `index` issues `GET /users/{user}/repos`
//! - `models` decodes the payload into validated `RepositoryRecord`s

pub mod index;
pub mod models;
