use lodge_core::{CoreResult, NewUser, Role};

use serde::Deserialize;

/// Request body for POST /api/users/register
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub address: String,
    pub role: Role,
}

impl CreateUserRequest {
    #[track_caller]
    pub fn into_new_user(self) -> CoreResult<NewUser> {
        NewUser::new(
            self.email,
            self.username,
            self.password,
            self.name,
            self.surname,
            self.address,
            self.role,
        )
    }
}
