//! 仪表盘静态资源路由
//!
//! 使用 rust-embed 在编译时嵌入 static/ 目录：
//! - 未找到的路径返回 index.html
//! - 可用 ./static-custom/ 目录覆盖嵌入的文件（开发用）

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

#[derive(Embed)]
#[folder = "static/"]
struct DashboardAssets;

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    matches!(ext, "js" | "css" | "png" | "svg" | "ico")
}

fn try_custom_file(path: &str) -> Option<Vec<u8>> {
    std::fs::read(format!("./static-custom/{path}")).ok()
}

fn get_file(path: &str) -> Option<Vec<u8>> {
    try_custom_file(path).or_else(|| DashboardAssets::get(path).map(|f| f.data.to_vec()))
}

/// 仪表盘资源请求处理
pub async fn serve_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    // 拒绝目录穿越
    let (content, file_path) = if path.is_empty() || path.contains("..") {
        (get_file("index.html"), "index.html")
    } else if let Some(content) = get_file(path) {
        (Some(content), path)
    } else {
        (get_file("index.html"), "index.html")
    };

    match content {
        Some(data) => {
            let mut response = HttpResponse::Ok();
            response.content_type(get_mime_type(file_path));

            if should_cache(file_path) {
                response.insert_header(("Cache-Control", "public, max-age=86400"));
            } else {
                response.insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"));
            }

            Ok(response.body(data))
        }
        None => Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(
                r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Exam Seater</title>
</head>
<body>
    <h1>Dashboard Not Found</h1>
    <p>The dashboard assets have not been embedded. The JSON API is available under /api/v1.</p>
</body>
</html>"#,
            )),
    }
}

/// 配置仪表盘路由
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    // 所有非 API 的 GET 请求都交给仪表盘处理
    cfg.route("/{tail:.*}", web::get().to(serve_dashboard));
}
