//! 前端静态资源
//!
//! 构建产物通过 rust-embed 编译进二进制。未知路径回退到 index.html（SPA），
//! `/api/` 下未匹配的路径返回 JSON 404。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

fn mime_type(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "webmanifest" => "application/manifest+json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

// 带 hash 的构建产物可长期缓存
fn is_immutable_asset(path: &str) -> bool {
    path.starts_with("assets/")
        && matches!(
            extension(path),
            "js" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "svg" | "webp"
        )
}

/// 替换页面中的 `%SYSTEM_NAME%`
fn render_html(content: &[u8], system_name: &str) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%SYSTEM_NAME%", system_name)
        .into_bytes()
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    if path == "api" || path.starts_with("api/") {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            format!("No API route for /{path}"),
        )));
    }

    let (asset, file_path) = match FrontendAssets::get(path).filter(|_| !path.is_empty()) {
        Some(asset) => (Some(asset), path),
        None => (FrontendAssets::get("index.html"), "index.html"),
    };

    let Some(asset) = asset else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(
                "<h1>Frontend not built</h1><p>Run <code>npm run build</code> in frontend/.</p>",
            ));
    };

    let mime = mime_type(file_path);
    let body = if mime.starts_with("text/html") {
        render_html(&asset.data, &AppConfig::get().app.system_name)
    } else {
        asset.data.into_owned()
    };

    let cache_control = if is_immutable_asset(file_path) {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache"
    };

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", cache_control))
        .body(body))
}

/// 其余 GET 请求交给前端
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(mime_type("assets/app.mjs"), "application/javascript; charset=utf-8");
        assert_eq!(mime_type("logo.svg"), "image/svg+xml");
        assert_eq!(mime_type("report.bin"), "application/octet-stream");
    }

    #[test]
    fn test_immutable_assets() {
        assert!(is_immutable_asset("assets/index-3f2a.js"));
        assert!(!is_immutable_asset("index.html"));
        assert!(!is_immutable_asset("favicon.svg"));
    }

    #[test]
    fn test_render_html_replaces_system_name() {
        let html = render_html(b"<title>%SYSTEM_NAME%</title>", "Teacher Evaluation");
        assert_eq!(html, b"<title>Teacher Evaluation</title>");
    }
}
