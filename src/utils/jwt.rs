use crate::config::env;
use crate::constants;
use anyhow::Result;
use chrono::Local;
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lazy_static::lazy_static;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const DEV_SECRET: &str = "byte-arena-dev-secret";

lazy_static! {
    static ref HEADER: Header = Header::new(Algorithm::HS256);
    static ref VALIDATION: Validation = Validation::new(Algorithm::HS256);
    static ref SECRET: String = env::get_key_or("JWT_HS256_KEY", DEV_SECRET);
    static ref DK: DecodingKey<'static> = DecodingKey::from_secret(SECRET.as_bytes());
    static ref EK: EncodingKey = EncodingKey::from_secret(SECRET.as_bytes());
    static ref PERIOD_OF_VALIDITY: i64 = env::seconds("PERIOD_OF_VALIDITY", 7 * 24 * 3600);
}

pub fn using_dev_secret() -> bool {
    SECRET.as_str() == DEV_SECRET
}

/// The caller's session, attached to the request by `token_decode`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserToken {
    pub iat: i64, // issued at, UTC seconds
    pub exp: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserToken {
    pub fn from(id: i64, name: String, email: String, role: String) -> Self {
        let now = Local::now().timestamp();
        UserToken {
            iat: now,
            exp: now + *PERIOD_OF_VALIDITY,
            id,
            name,
            email,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == constants::ADMIN
    }
}

pub fn encode<T: Serialize>(claims: &T) -> Result<String> {
    Ok(jsonwebtoken::encode(&*HEADER, claims, &EK)?)
}

pub fn decode<T: DeserializeOwned>(token: &str) -> Result<T, ErrorKind> {
    let t = jsonwebtoken::decode::<T>(token, &DK, &*VALIDATION);
    match t {
        Ok(res) => Ok(res.claims),
        Err(e) => Err(e.into_kind()),
    }
}
