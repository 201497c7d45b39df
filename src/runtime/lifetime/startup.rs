use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::errors::{EvalSystemError, Result};
use crate::models::evaluation_questions::entities::DEFAULT_RUBRIC;
use crate::models::evaluation_questions::requests::CreateEvaluationQuestionRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_random_code;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const GENERATED_PASSWORD_LENGTH: usize = 16;
const FALLBACK_CACHE: &str = "moka";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn build_cache(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        EvalSystemError::cache_plugin_not_found(format!("Cache backend '{name}' not registered"))
    })?;
    Ok(Arc::from(constructor().await?))
}

/// 创建缓存，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = AppConfig::get().cache.cache_type.as_str();
    warn!("Attempting to create {} cache backend", cache_type);

    match build_cache(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != FALLBACK_CACHE => {
            warn!("Failed to create {} cache: {}", cache_type, e);
            warn!("Falling back to Moka (in-memory) cache");
            build_cache(FALLBACK_CACHE).await
        }
        Err(e) => Err(e),
    }
}

/// 没有任何账号时创建默认管理员
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} account(s), skipping admin seed", count);
            return;
        }
        Ok(_) => info!("No accounts found, creating default admin account..."),
        Err(e) => {
            warn!("Failed to count accounts: {}, skipping admin seed", e);
            return;
        }
    }

    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| {
            let generated = generate_random_code(GENERATED_PASSWORD_LENGTH);
            warn!("==========================================================");
            warn!("  ADMIN_PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", generated);
            warn!("  Save this password or set the ADMIN_PASSWORD env var");
            warn!("==========================================================");
            generated
        });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let request = CreateUserRequest {
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        password: password_hash,
        role: UserRole::Admin,
        ref_id: None,
        is_active: true,
    };
    match storage.create_user(request).await {
        Ok(user) => info!(
            "Default admin account created (ID: {}, username: {})",
            user.id, user.username
        ),
        Err(e) => warn!("Failed to create admin account: {}", e),
    }
}

/// 题库为空时写入默认评价量表
async fn seed_rubric(storage: &Arc<dyn Storage>) {
    match storage.count_questions().await {
        Ok(0) => {}
        Ok(count) => {
            debug!("Rubric already has {} question(s), skipping seed", count);
            return;
        }
        Err(e) => {
            warn!("Failed to count rubric questions: {}, skipping seed", e);
            return;
        }
    }

    for text in DEFAULT_RUBRIC {
        let request = CreateEvaluationQuestionRequest {
            question_text: text.to_string(),
        };
        if let Err(e) = storage.create_question(request).await {
            warn!("Failed to seed rubric question: {}", e);
            return;
        }
    }
    info!("Seeded default rubric with {} questions", DEFAULT_RUBRIC.len());
}

/// 准备服务器启动所需的存储与缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 已安装过 provider 时返回 Err，可忽略
    let _ = rustls::crypto::ring::default_provider().install_default();

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;
    seed_rubric(&storage).await;

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
