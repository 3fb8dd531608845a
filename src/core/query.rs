use crate::domain::model::SourceId;
use crate::utils::error::{JobSearchError, Result};
use crate::utils::validation::validate_input_range;
use serde::Serialize;
use std::collections::BTreeSet;
use url::form_urlencoded;

pub const EXPERIENCE_MIN: u8 = 0;
pub const EXPERIENCE_MAX: u8 = 15;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// 只有這兩個欄位會寫進網址，其他篩選條件只存在於當前 session
pub const URL_DESIGNATION: &str = "designation";
pub const URL_LOCATION: &str = "location";

/// 有序的網址查詢參數
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pairs: Vec<(String, String)>,
}

impl UrlParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析查詢字串，開頭的 `?` 可有可無
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 設定參數，同名參數只保留一個
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.push((key.to_string(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// 送往 `GET /jobs/search` 的參數；等於中性預設值的欄位不送
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_max: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl BackendSearchParams {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(7);
        if let Some(designation) = &self.designation {
            pairs.push(("designation", designation.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(exp_min) = self.exp_min {
            pairs.push(("exp_min", exp_min.to_string()));
        }
        if let Some(exp_max) = self.exp_max {
            pairs.push(("exp_max", exp_max.to_string()));
        }
        if let Some(sources) = &self.sources {
            pairs.push(("sources", sources.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// 目前有效的搜尋條件
///
/// 不變量：`exp_min <= exp_max <= 15`。空的來源集合代表不限制來源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryModel {
    designation: Option<String>,
    location: Option<String>,
    exp_min: u8,
    exp_max: u8,
    sources: BTreeSet<SourceId>,
}

impl Default for QueryModel {
    fn default() -> Self {
        Self {
            designation: None,
            location: None,
            exp_min: EXPERIENCE_MIN,
            exp_max: EXPERIENCE_MAX,
            sources: SourceId::DEFAULT_SELECTION.into_iter().collect(),
        }
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl QueryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從網址還原；只有文字條件會被帶回來，其餘用預設值
    pub fn from_url_params(params: &UrlParams) -> Self {
        Self {
            designation: params.get(URL_DESIGNATION).and_then(non_empty),
            location: params.get(URL_LOCATION).and_then(non_empty),
            ..Self::default()
        }
    }

    pub fn to_url_params(&self) -> UrlParams {
        let mut params = UrlParams::new();
        if let Some(designation) = &self.designation {
            params.set(URL_DESIGNATION, designation.as_str());
        }
        if let Some(location) = &self.location {
            params.set(URL_LOCATION, location.as_str());
        }
        params
    }

    pub fn to_request_params(&self, page: u32, limit: u32) -> BackendSearchParams {
        BackendSearchParams {
            designation: self.designation.clone(),
            location: self.location.clone(),
            exp_min: (self.exp_min != EXPERIENCE_MIN).then_some(self.exp_min),
            exp_max: (self.exp_max != EXPERIENCE_MAX).then_some(self.exp_max),
            sources: self.sources_filter(),
            page,
            limit,
        }
    }

    /// 以逗號串接的來源清單；選了全部或全都沒選時不限制
    pub fn sources_filter(&self) -> Option<String> {
        if self.sources.is_empty() || self.sources.len() == SourceId::ALL.len() {
            return None;
        }
        Some(
            self.sources
                .iter()
                .map(SourceId::id)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn experience_range(&self) -> (u8, u8) {
        (self.exp_min, self.exp_max)
    }

    pub fn sources(&self) -> &BTreeSet<SourceId> {
        &self.sources
    }

    pub fn is_source_selected(&self, source: SourceId) -> bool {
        self.sources.contains(&source)
    }

    pub fn set_designation(&mut self, designation: impl Into<String>) {
        self.designation = non_empty(designation);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = non_empty(location);
    }

    pub fn set_experience_range(&mut self, min: u8, max: u8) -> Result<()> {
        validate_input_range("exp_min", min, EXPERIENCE_MIN, EXPERIENCE_MAX)?;
        validate_input_range("exp_max", max, EXPERIENCE_MIN, EXPERIENCE_MAX)?;
        if min > max {
            return Err(JobSearchError::validation(
                "exp_min",
                format!(
                    "Minimum experience ({}) cannot exceed maximum experience ({})",
                    min, max
                ),
            ));
        }
        self.exp_min = min;
        self.exp_max = max;
        Ok(())
    }

    /// 切換來源勾選狀態，回傳切換後是否被選取
    pub fn toggle_source(&mut self, source: SourceId) -> bool {
        if self.sources.remove(&source) {
            false
        } else {
            self.sources.insert(source);
            true
        }
    }

    pub fn set_sources(&mut self, sources: impl IntoIterator<Item = SourceId>) {
        self.sources = sources.into_iter().collect();
    }

    /// 清除所有篩選條件，回到初始狀態
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
