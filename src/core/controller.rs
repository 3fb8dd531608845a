use crate::core::gate::{gate, GatedJobs};
use crate::core::pagination::PageWindow;
use crate::core::query::{BackendSearchParams, QueryModel, UrlParams};
use crate::core::view;
use crate::domain::model::{Job, JobSearchResponse, PlanTier, SearchResult};
use crate::domain::ports::{AddressBar, JobSearchBackend, SessionContext};
use crate::utils::error::{JobSearchError, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 可關閉的錯誤通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

/// 畫面看到的搜尋狀態，成功時四個結果欄位一起替換
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub jobs: Vec<Job>,
    pub total: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub is_loading: bool,
    pub notification: Option<Notification>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            total: 0,
            current_page: 1,
            total_pages: 1,
            is_loading: false,
            notification: None,
        }
    }
}

/// 已發出、尚未套用的搜尋
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    generation: u64,
    params: BackendSearchParams,
}

impl PendingSearch {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// 結果已套用到狀態
    Applied(SearchResult),
    /// 請求失敗，狀態已清空並顯示通知
    Failed {
        notification: Notification,
        error: JobSearchError,
    },
    /// 已有較新的搜尋，回應被丟棄
    Superseded { generation: u64, latest: u64 },
}

impl SearchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SearchOutcome::Applied(_))
    }
}

/// 某一時刻的完整畫面資料
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub query: QueryModel,
    pub state: SearchState,
    pub plan: PlanTier,
    pub is_authenticated: bool,
}

impl SearchView {
    /// 每次呼叫都依目前的職缺與方案重新計算
    pub fn gated(&self) -> GatedJobs<'_> {
        gate(&self.state.jobs, &self.plan)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::compute(self.state.current_page, self.state.total_pages)
    }

    pub fn results_summary(&self) -> String {
        view::results_summary(self.state.total, &self.query)
    }

    pub fn page_summary(&self) -> String {
        view::page_summary(self.state.current_page, self.state.total_pages)
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: SearchState,
    latest_issued: u64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 搜尋流程的協調者
///
/// 每次發出的搜尋都有遞增的 generation；回應套用前先比對，
/// 不是最新一次的就丟棄。鎖只在同步區段持有，不跨 `.await`。
pub struct SearchController<B, A, S>
where
    B: JobSearchBackend,
    A: AddressBar,
    S: SessionContext,
{
    backend: B,
    session: S,
    address_bar: Mutex<A>,
    query: Mutex<QueryModel>,
    inner: Mutex<Inner>,
    limit: u32,
}

impl<B, A, S> SearchController<B, A, S>
where
    B: JobSearchBackend,
    A: AddressBar,
    S: SessionContext,
{
    /// 建立 controller 並從網址還原搜尋條件，不會發出請求
    pub fn new(backend: B, address_bar: A, session: S, limit: u32) -> Self {
        let query = QueryModel::from_url_params(&address_bar.current());
        tracing::debug!(
            "Restored query from address bar: designation={:?}, location={:?}",
            query.designation(),
            query.location()
        );

        Self {
            backend,
            session,
            address_bar: Mutex::new(address_bar),
            query: Mutex::new(query),
            inner: Mutex::new(Inner::default()),
            limit: limit.max(1),
        }
    }

    /// 建立 controller 並執行唯一一次的初始搜尋 (第 1 頁)
    ///
    /// 之後不會自動重新搜尋，只有明確的觸發動作才會。
    pub async fn initialize(backend: B, address_bar: A, session: S, limit: u32) -> Self {
        let controller = Self::new(backend, address_bar, session, limit);
        let query = controller.query();
        match controller.search(&query, 1).await {
            Ok(outcome) => tracing::debug!("Initial search finished: {}", outcome_kind(&outcome)),
            Err(e) => tracing::warn!("Initial search rejected: {}", e),
        }
        controller
    }

    pub fn query(&self) -> QueryModel {
        lock(&self.query).clone()
    }

    /// 修改表單條件；編輯失敗時原本的條件保持不變
    pub fn update_query<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut QueryModel) -> Result<()>,
    {
        let mut query = lock(&self.query);
        let mut draft = query.clone();
        edit(&mut draft)?;
        *query = draft;
        Ok(())
    }

    pub fn state(&self) -> SearchState {
        lock(&self.inner).state.clone()
    }

    /// 同時持有 query 與 state 的鎖，取得一致的快照 (順序固定為 query → inner)
    pub fn view(&self) -> SearchView {
        let query = lock(&self.query);
        let inner = lock(&self.inner);
        SearchView {
            query: query.clone(),
            state: inner.state.clone(),
            plan: self.session.plan(),
            is_authenticated: self.session.is_authenticated(),
        }
    }

    pub fn url_params(&self) -> UrlParams {
        lock(&self.address_bar).current()
    }

    pub fn dismiss_notification(&self) {
        lock(&self.inner).state.notification = None;
    }

    /// 發出一次搜尋：檢查輸入、配發 generation、標記載入中
    pub fn issue(&self, model: &QueryModel, page: u32) -> Result<PendingSearch> {
        if page < 1 {
            return Err(JobSearchError::validation("page", "Page must be at least 1"));
        }

        let params = model.to_request_params(page, self.limit);
        let mut inner = lock(&self.inner);
        inner.latest_issued += 1;
        inner.state.is_loading = true;

        tracing::debug!(
            "Issuing search #{} (page {}, limit {})",
            inner.latest_issued,
            page,
            self.limit
        );

        Ok(PendingSearch {
            generation: inner.latest_issued,
            params,
        })
    }

    /// 送出已發出的搜尋並套用回應
    pub async fn complete(&self, pending: PendingSearch) -> SearchOutcome {
        let response = self.backend.search_jobs(&pending.params).await;
        self.apply(pending.generation(), response)
    }

    /// 套用一個回應；不是最新 generation 的回應不會碰到狀態
    pub fn apply(&self, generation: u64, response: Result<JobSearchResponse>) -> SearchOutcome {
        let mut inner = lock(&self.inner);
        if generation != inner.latest_issued {
            tracing::debug!(
                "Discarding stale response #{} (latest is #{})",
                generation,
                inner.latest_issued
            );
            return SearchOutcome::Superseded {
                generation,
                latest: inner.latest_issued,
            };
        }

        match response {
            Ok(response) => {
                let result = SearchResult::from(response);
                tracing::info!(
                    "🔎 {} jobs found, page {} of {}",
                    result.total,
                    result.page,
                    result.total_pages
                );
                inner.state = SearchState {
                    jobs: result.jobs.clone(),
                    total: result.total,
                    current_page: result.page,
                    total_pages: result.total_pages,
                    is_loading: false,
                    notification: None,
                };
                SearchOutcome::Applied(result)
            }
            Err(error) => {
                let notification = Notification::error(error.notification_message());
                tracing::warn!("❌ Job search failed: {}", error);
                // 失敗時清空結果，不保留舊資料
                inner.state.jobs.clear();
                inner.state.total = 0;
                inner.state.is_loading = false;
                inner.state.notification = Some(notification.clone());
                SearchOutcome::Failed {
                    notification,
                    error,
                }
            }
        }
    }

    /// 以指定條件搜尋某一頁
    ///
    /// 只有輸入檢查失敗會回傳 `Err`；網路與後端錯誤都收斂成 `SearchOutcome::Failed`。
    pub async fn search(&self, model: &QueryModel, page: u32) -> Result<SearchOutcome> {
        let pending = self.issue(model, page)?;
        Ok(self.complete(pending).await)
    }

    /// 送出搜尋表單：更新網址並回到第 1 頁
    pub async fn submit_search(&self) -> Result<SearchOutcome> {
        let query = self.query();
        let params = query.to_url_params();
        tracing::debug!("Updating address bar: ?{}", params.to_query_string());
        lock(&self.address_bar).replace(&params);
        self.search(&query, 1).await
    }

    /// 套用進階篩選並回到第 1 頁，網址不變
    pub async fn apply_filters(&self) -> Result<SearchOutcome> {
        let query = self.query();
        self.search(&query, 1).await
    }

    /// 換頁，其他條件不變；頁碼先夾在已知範圍內
    pub async fn change_page(&self, page: u32) -> Result<SearchOutcome> {
        let total_pages = self.state().total_pages.max(1);
        let page = page.clamp(1, total_pages);
        let query = self.query();
        self.search(&query, page).await
    }

    /// 清除所有篩選條件後重新搜尋第 1 頁
    pub async fn clear_filters(&self) -> Result<SearchOutcome> {
        self.update_query(|query| {
            query.reset();
            Ok(())
        })?;
        self.apply_filters().await
    }
}

fn outcome_kind(outcome: &SearchOutcome) -> &'static str {
    match outcome {
        SearchOutcome::Applied(_) => "applied",
        SearchOutcome::Failed { .. } => "failed",
        SearchOutcome::Superseded { .. } => "superseded",
    }
}
