use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// 前端未构建时生成占位页，保证 rust-embed 目录存在
const PLACEHOLDER_HTML: &str = r#"<!DOCTYPE html>
<html lang="th">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>%SYSTEM_NAME%</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 640px;
            margin: 96px auto;
            padding: 20px;
            text-align: center;
            color: #1f2937;
        }
        .notice {
            background: #eff6ff;
            border: 1px solid #bfdbfe;
            padding: 20px;
            border-radius: 8px;
        }
        code {
            background: #f3f4f6;
            padding: 2px 6px;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <h1>%SYSTEM_NAME%</h1>
    <div class="notice">
        <p>The web frontend has not been built. The API is available under <code>/api/v1</code>.</p>
        <p><code>cd frontend &amp;&amp; npm install &amp;&amp; npm run build</code></p>
    </div>
</body>
</html>
"#;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=frontend/dist");

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(io::Error::other)?;
    let dist_path = PathBuf::from(manifest_dir).join("frontend/dist");

    if !dist_path.join("index.html").exists() {
        println!("cargo:warning=frontend/dist not found, embedding a placeholder page");
        write_placeholder(&dist_path)?;
    }
    Ok(())
}

fn write_placeholder(dist_path: &Path) -> io::Result<()> {
    fs::create_dir_all(dist_path.join("assets"))?;
    fs::write(dist_path.join("index.html"), PLACEHOLDER_HTML)?;
    fs::write(dist_path.join("favicon.ico"), [])
}
