use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;
use crate::models::users::entities::{User, UserRole};

/// 已认证身份：管理端账号或学生
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    User(User),
    Student(Student),
}

impl Principal {
    pub fn id(&self) -> i64 {
        match self {
            Principal::User(user) => user.id,
            Principal::Student(student) => student.id,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Principal::User(user) => user.role,
            Principal::Student(_) => UserRole::Student,
        }
    }

    /// 教师账号绑定的教师 ID
    pub fn teacher_ref(&self) -> Option<i64> {
        match self {
            Principal::User(user) if user.role == UserRole::Teacher => user.ref_id,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(role: UserRole, ref_id: Option<i64>) -> User {
        let now = chrono::Utc::now();
        User {
            id: 9,
            username: "somchai".into(),
            password_hash: String::new(),
            role,
            ref_id,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_teacher_ref_only_for_teacher_accounts() {
        assert_eq!(
            Principal::User(account(UserRole::Teacher, Some(4))).teacher_ref(),
            Some(4)
        );
        assert_eq!(
            Principal::User(account(UserRole::Admin, Some(4))).teacher_ref(),
            None
        );
    }

    #[test]
    fn test_principal_cache_round_trip_keeps_kind() {
        let p = Principal::User(account(UserRole::Admin, None));
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""kind":"user""#));
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role(), UserRole::Admin);
        assert_eq!(back.id(), 9);
    }
}
