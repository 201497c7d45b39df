//! 对象缓存
//!
//! 后端以插件形式注册（moka / redis），启动时按配置选择。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

use serde::{Serialize, de::DeserializeOwned};

/// 缓存已认证身份的键
pub fn principal_cache_key(token: &str) -> String {
    format!("principal:{token}")
}

/// 读取 JSON 值，反序列化失败时清除该键
pub async fn get_json<T: DeserializeOwned>(cache: &dyn ObjectCache, key: &str) -> Option<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str::<T>(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Dropping undecodable cache entry {}: {}", key, e);
                cache.remove(key).await;
                None
            }
        },
        _ => None,
    }
}

pub async fn insert_json<T: Serialize>(cache: &dyn ObjectCache, key: String, value: &T, ttl: u64) {
    match serde_json::to_string(value) {
        Ok(json) => cache.insert_raw(key, json, ttl).await,
        Err(e) => tracing::warn!("Failed to serialize cache entry {}: {}", key, e),
    }
}

/// 声明并通过 ctor 注册一个缓存插件
///
/// 类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::EvalSystemError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;

    #[derive(Debug, Serialize, serde::Deserialize, PartialEq)]
    struct Sample {
        id: i64,
        name: String,
    }

    #[actix_web::test]
    async fn test_json_helpers_round_trip_and_drop_garbage() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        let value = Sample {
            id: 3,
            name: "ม.1/1".into(),
        };
        insert_json(&cache, "k".into(), &value, 0).await;
        assert_eq!(get_json::<Sample>(&cache, "k").await, Some(value));

        cache.insert_raw("bad".into(), "{not json".into(), 0).await;
        assert_eq!(get_json::<Sample>(&cache, "bad").await, None);
        assert!(matches!(cache.get_raw("bad").await, CacheResult::NotFound));
    }

    #[test]
    fn test_principal_cache_key() {
        assert_eq!(principal_cache_key("abc"), "principal:abc");
    }
}
