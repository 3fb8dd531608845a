use crate::domain::model::PlanTier;
use crate::domain::ports::{ConfigProvider, SessionContext};

/// 固定值的 session，由設定或呼叫端注入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSession {
    plan: PlanTier,
    authenticated: bool,
}

impl StaticSession {
    pub fn new(plan: PlanTier, authenticated: bool) -> Self {
        Self {
            plan,
            authenticated,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.plan(), config.is_authenticated())
    }
}

impl SessionContext for StaticSession {
    fn plan(&self) -> PlanTier {
        self.plan.clone()
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
