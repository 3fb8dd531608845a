use crate::core::query::UrlParams;
use crate::domain::ports::AddressBar;

/// 記憶體中的網址列，保留每次送出的歷史紀錄
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressBar {
    current: UrlParams,
    history: Vec<String>,
}

impl InMemoryAddressBar {
    pub fn new(query: &str) -> Self {
        let current = UrlParams::parse(query);
        Self {
            history: vec![current.to_query_string()],
            current,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn query_string(&self) -> String {
        self.current.to_query_string()
    }
}

impl AddressBar for InMemoryAddressBar {
    fn current(&self) -> UrlParams {
        self.current.clone()
    }

    fn replace(&mut self, params: &UrlParams) {
        let query = params.to_query_string();
        // 相同的查詢不重複新增歷史紀錄
        if self.history.last() != Some(&query) {
            self.history.push(query);
        }
        self.current = params.clone();
    }
}
