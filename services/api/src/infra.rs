use benefit_eligibility::config::EngineConfig;
use benefit_eligibility::eligibility::{
    EligibilityEngine, EligibilityService, EligibilityThresholds,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn eligibility_service(config: &EngineConfig) -> EligibilityService {
    let engine = EligibilityEngine::new(EligibilityThresholds::default())
        .with_field_scope(config.field_scope);
    EligibilityService::new(engine)
}
