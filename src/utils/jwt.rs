use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::users::entities::UserRole;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // 账号 ID 或学生 ID，由 role 区分
    pub role: String, // admin / teacher / student
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn subject_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role.parse::<UserRole>().ok()
    }
}

pub struct JwtUtils;

impl JwtUtils {
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    /// 访问令牌有效期（秒）
    pub fn access_token_ttl_secs() -> i64 {
        AppConfig::get().jwt.access_token_expiry * 60
    }

    // 生成 Access Token
    pub fn generate_access_token(
        subject_id: i64,
        role: UserRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_secret(
            subject_id,
            role,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
            &Self::get_secret(),
        )
    }

    fn generate_token_with_secret(
        subject_id: i64,
        role: UserRole,
        expiry_duration: chrono::Duration,
        secret: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: subject_id.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_with_secret(token, &Self::get_secret())
    }

    fn verify_token_with_secret(
        token: &str,
        secret: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_token_round_trip_keeps_role() {
        let token = JwtUtils::generate_token_with_secret(
            42,
            UserRole::Student,
            chrono::Duration::minutes(5),
            SECRET,
        )
        .unwrap();
        let claims = JwtUtils::verify_token_with_secret(&token, SECRET).unwrap();
        assert_eq!(claims.subject_id(), Some(42));
        assert_eq!(claims.role(), Some(UserRole::Student));
    }

    #[test]
    fn test_token_rejected_with_other_secret() {
        let token = JwtUtils::generate_token_with_secret(
            1,
            UserRole::Admin,
            chrono::Duration::minutes(5),
            SECRET,
        )
        .unwrap();
        assert!(JwtUtils::verify_token_with_secret(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::generate_token_with_secret(
            1,
            UserRole::Admin,
            chrono::Duration::minutes(-10),
            SECRET,
        )
        .unwrap();
        assert!(JwtUtils::verify_token_with_secret(&token, SECRET).is_err());
    }
}
