use analyst_fit::assessment::{AnswerPolicy, QuestionBank, Section};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) bank: Arc<QuestionBank>,
    pub(crate) answer_policy: AnswerPolicy,
}

pub(crate) fn parse_section(raw: &str) -> Result<Section, String> {
    raw.parse::<Section>().map_err(|err| {
        let known: Vec<&str> = Section::ordered().iter().map(|s| s.key()).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

/// `Some(Lenient)` when the flag was passed, otherwise defer to configuration.
pub(crate) fn policy_override(lenient: bool) -> Option<AnswerPolicy> {
    lenient.then_some(AnswerPolicy::Lenient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_section_lists_known_keys_on_error() {
        assert_eq!(parse_section("wiscar"), Ok(Section::Wiscar));
        let err = parse_section("aptitude").expect_err("not a section");
        assert!(err.contains("psychometric, technical, wiscar"));
    }
}
