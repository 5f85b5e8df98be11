//! Record ID parsing
//!
//! 路径参数与请求体中的 ID 接受两种写法：
//! - 完整形式 `"item:abc123"` (表名必须匹配)
//! - 纯 key `"abc123"`
//!
//! key 只允许 `[A-Za-z0-9_]`，长度 1..=64；其余一律 `InvalidId`，
//! 在查询数据库之前就失败。数据库渲染 ID 时可能给 key 加上 `⟨⟩` 或反引号，
//! 这两种包裹形式同样接受。
//!
//! 本服务创建的记录 key 全部是字符串，因此解析结果总是字符串 key。

use shared::error::{AppError, AppResult};
use surrealdb::RecordId;

pub const CATEGORY: &str = "category";
pub const ITEM: &str = "item";
pub const USER: &str = "user";
pub const ORDER: &str = "order";
pub const FAVOURITE: &str = "favourite";

const MAX_KEY_LEN: usize = 64;

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 将原始字符串解析为指定表的 RecordId
pub fn parse_id(table: &str, raw: &str) -> AppResult<RecordId> {
    let raw = raw.trim();
    let key = match raw.split_once(':') {
        Some((tb, key)) if tb == table => key,
        Some(_) => return Err(AppError::invalid_id(raw)),
        None => raw,
    };
    let key = unwrap_escaped(key);

    if !is_valid_key(key) {
        return Err(AppError::invalid_id(raw));
    }

    Ok(RecordId::from_table_key(table, key))
}

fn unwrap_escaped(key: &str) -> &str {
    key.strip_prefix('⟨')
        .and_then(|k| k.strip_suffix('⟩'))
        .or_else(|| key.strip_prefix('`').and_then(|k| k.strip_suffix('`')))
        .unwrap_or(key)
}
