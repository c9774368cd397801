
use larder_test_utils::prelude::*;

use super::*;

fn new_user(email: &str, username: &str) -> NewUserDto {
    NewUserDto {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Anna".to_string(),
        last_name: "Smith".to_string(),
    }
}
