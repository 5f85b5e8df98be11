//! Serde helpers for SurrealDB values
//!
//! 记录 ID 在 API JSON 和内嵌快照中是 `"table:key"` 字符串，
//! 从数据库读出时是原生结构；反序列化两种都接受，序列化统一输出字符串。

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// 缺省或 null 的布尔字段视为 `true` (如 `item.available`)
pub fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// 缺省或 null 的布尔字段视为 `false` (如 `user.admin`)
pub fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

pub fn default_true() -> bool {
    true
}

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a \"table:key\" string or a native record id")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RecordId, E> {
        value
            .parse::<RecordId>()
            .map_err(|_| E::custom(format!("invalid record id: {value}")))
    }

    fn visit_map<M: de::MapAccess<'de>>(self, map: M) -> Result<RecordId, M::Error> {
        RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}

/// `Option` 包装需要一个可独立反序列化的类型
struct AnyRecordId(RecordId);

impl<'de> Deserialize<'de> for AnyRecordId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(RecordIdVisitor).map(AnyRecordId)
    }
}

/// `RecordId` <-> `"table:key"`
pub mod record_id {
    use super::*;

    pub fn serialize<S: Serializer>(id: &RecordId, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<RecordId, D::Error> {
        d.deserialize_any(RecordIdVisitor)
    }
}

/// `Option<RecordId>` <-> `"table:key"` / null
pub mod option_record_id {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => s.collect_str(id),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RecordId>, D::Error> {
        Ok(Option::<AnyRecordId>::deserialize(d)?.map(|id| id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe {
        #[serde(with = "record_id")]
        id: RecordId,
        #[serde(default, with = "option_record_id")]
        user: Option<RecordId>,
        #[serde(default = "default_true", deserialize_with = "null_as_true")]
        available: bool,
    }

    #[test]
    fn record_id_as_string() {
        let probe: Probe =
            serde_json::from_str(r#"{"id":"item:latte","user":null,"available":null}"#).unwrap();
        assert_eq!(probe.id, RecordId::from_table_key("item", "latte"));
        assert!(probe.user.is_none());
        assert!(probe.available);

        let json = serde_json::to_value(&probe).unwrap();
        assert_eq!(json["id"], "item:latte");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let probe: Probe = serde_json::from_str(r#"{"id":"item:latte"}"#).unwrap();
        assert!(probe.user.is_none());
        assert!(probe.available);
    }

    #[test]
    fn invalid_record_id_is_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"id":"not an id"}"#).is_err());
    }
}
