use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Fields absent from the payload are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_seller: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}
