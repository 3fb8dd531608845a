use crate::domain::model::{Job, PlanTier};

/// 免費方案最多可看到的職缺數
pub const FREE_PLAN_JOB_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatedJobs<'a> {
    pub visible: &'a [Job],
    pub truncated: bool,
    /// 實際取回的職缺數，升級提示要顯示這個數字
    pub available: usize,
}

impl GatedJobs<'_> {
    pub fn upsell_message(&self) -> Option<String> {
        self.truncated.then(|| {
            format!(
                "You're viewing {} out of {} available jobs. Premium members get unlimited job listings.",
                self.visible.len(),
                self.available
            )
        })
    }
}

/// 依方案截斷顯示清單，不改動原本取回的資料
pub fn gate<'a>(jobs: &'a [Job], plan: &PlanTier) -> GatedJobs<'a> {
    let truncated = *plan == PlanTier::Free && jobs.len() > FREE_PLAN_JOB_LIMIT;
    let visible = if truncated {
        &jobs[..FREE_PLAN_JOB_LIMIT]
    } else {
        jobs
    };

    GatedJobs {
        visible,
        truncated,
        available: jobs.len(),
    }
}
