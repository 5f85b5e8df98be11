//! Upload Routes
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /upload | POST | multipart 上传图片 (`filename` + `file`) |
//! | /public/{filename} | GET | 访问已上传文件 |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::core::ServerState;

/// multipart 边界与文本字段的额外开销
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build upload router
pub fn router(max_upload_bytes: usize) -> Router<ServerState> {
    Router::new()
        .route(
            "/upload",
            post(handler::upload)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD)),
        )
        .route("/public/{filename}", get(handler::serve))
}
