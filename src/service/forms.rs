use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use validator::{HasLen, Validate, ValidationError, ValidationErrors};

pub fn from_validation_errors(e: ValidationErrors) -> String {
    let mut err_str = "".to_string();
    let errors_map: HashMap<&'static str, &Vec<ValidationError>> = e.field_errors();
    let mut fields: Vec<_> = errors_map.into_iter().collect();
    fields.sort_by_key(|(k, _)| *k);
    for (_, value) in fields {
        for item in value {
            match item.message.as_ref() {
                None => (),
                Some(s) => {
                    if err_str.length() > 0 {
                        err_str.push_str(" , ");
                    }
                    err_str.push_str(s)
                }
            }
        }
    }
    err_str
}

#[derive(Validate, Serialize, Deserialize, Debug)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[validate(length(max = 32, message = "Password must be at most 32 characters"))]
    #[validate(custom = "validate_password")]
    pub password: String,
}

#[derive(Validate, Serialize, Deserialize, Debug)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Name is required"))]
    #[validate(length(max = 64, message = "Name is too long"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[validate(length(max = 32, message = "Password must be at most 32 characters"))]
    #[validate(custom = "validate_password")]
    pub password: String,
}

// the admin form only checks that both fields are present
#[derive(Validate, Serialize, Deserialize, Debug)]
pub struct AdminLoginForm {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Validate, Serialize, Deserialize, Debug)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
}

#[derive(Validate, Serialize, Deserialize, Debug, Default)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name is required"))]
    #[validate(length(max = 64, message = "Name is too long"))]
    pub name: Option<String>,
    #[validate(length(max = 280, message = "Bio must be at most 280 characters"))]
    pub bio: Option<String>,
    #[validate(length(max = 64, message = "Location is too long"))]
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
}

pub fn validate_password(s: &str) -> Result<(), ValidationError> {
    if s.contains(char::is_whitespace) {
        return Err(ValidationError {
            code: Cow::from("white_space"),
            message: Some(Cow::from("Password must not contain whitespace")),
            params: Default::default(),
        });
    }
    Ok(())
}
