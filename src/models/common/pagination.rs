use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 每页条数上限
pub const MAX_PAGE_LIMIT: i64 = 1000;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        alias = "size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

impl PaginationQuery {
    /// 归一化后的 (page, limit)：page 至少为 1，limit 限制在 1..=1000
    pub fn normalized(&self) -> (u64, u64) {
        normalize_page(Some(self.page), Some(self.limit))
    }
}

/// 存储层使用的分页归一化
///
/// page 上限保证 `page * limit` 不超过 `i64::MAX`，偏移量计算不会溢出。
pub fn normalize_page(page: Option<i64>, limit: Option<i64>) -> (u64, u64) {
    let limit = limit.unwrap_or(10).clamp(1, MAX_PAGE_LIMIT);
    let page = page.unwrap_or(1).clamp(1, i64::MAX / limit);
    (page as u64, limit as u64)
}

// 分页元信息
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total: total as i64,
            page: page as i64,
            limit: limit as i64,
            total_pages: total_pages as i64,
        }
    }
}

// 分页结果（存储层返回，服务层拆成 data + meta）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

// 按名称精确查找
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct NameLookupQuery {
    pub name: String,
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(I64Visitor)
}

/// 可选的数值参数，接受数字、数字字符串或空字符串
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(OptionalI64Visitor)
}

struct I64Visitor;

impl<'de> serde::de::Visitor<'de> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value <= i64::MAX as u64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

struct OptionalI64Visitor;

impl<'de> serde::de::Visitor<'de> for OptionalI64Visitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an optional integer or a string containing an integer")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        I64Visitor.visit_u64(value).map(Some)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.trim().is_empty() {
            return Ok(None);
        }
        I64Visitor.visit_str(value).map(Some)
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page_clamps() {
        assert_eq!(normalize_page(None, None), (1, 10));
        assert_eq!(normalize_page(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_page(Some(-3), Some(5000)), (1, 1000));
        assert_eq!(normalize_page(Some(4), Some(25)), (4, 25));
    }

    #[test]
    fn test_page_meta_total_pages() {
        assert_eq!(PageMeta::new(0, 1, 10).total_pages, 0);
        assert_eq!(PageMeta::new(10, 1, 10).total_pages, 1);
        assert_eq!(PageMeta::new(11, 2, 10).total_pages, 2);
    }

    #[test]
    fn test_page_meta_serializes_camel_total_pages() {
        let json = serde_json::to_value(PageMeta::new(21, 3, 10)).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["limit"], 10);
    }

    #[test]
    fn test_query_accepts_strings_and_size_alias() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page":"2","size":"50"}"#).unwrap();
        assert_eq!((q.page, q.limit), (2, 50));
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!((q.page, q.limit), (1, 10));
    }

    #[test]
    fn test_huge_page_keeps_offset_in_range() {
        let (page, limit) = normalize_page(Some(i64::MAX), Some(25));
        assert_eq!(page, (i64::MAX / 25) as u64);
        assert!(page.checked_mul(limit).is_some_and(|end| end <= i64::MAX as u64));

        let (page, limit) = normalize_page(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(limit, MAX_PAGE_LIMIT as u64);
        assert!((page * limit) <= i64::MAX as u64);
    }
}
