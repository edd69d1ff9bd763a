use crate::models::lighthouse::metrics::{MetricsRecord, WebVital};
use crate::models::lighthouse::report::Root;

/// Map a raw report to the fixed metrics record. A vital is absent when its
/// audit is missing, when Lighthouse scored it null, or when the audit
/// carries no numeric value. Absence is a value, not a failure.
pub fn extract_metrics(report: &Root) -> MetricsRecord {
    let mut record = MetricsRecord::default();
    for vital in WebVital::ALL {
        let value = report
            .audits
            .get(vital.audit_id())
            .filter(|audit| audit.score.is_some())
            .and_then(|audit| audit.numericValue);
        record.set(vital, value);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lighthouse::audit::Audit;
    use crate::models::lighthouse::category::Categories;
    use std::collections::HashMap;

    fn report_with(audits: HashMap<String, Audit>) -> Root {
        Root {
            requestedUrl: "https://example.com".to_string(),
            categories: Categories {
                performance: None,
                accessibility: None,
                best_practices: None,
                seo: None,
            },
            audits,
        }
    }

    fn audit(score: Option<f64>, numeric_value: Option<f64>) -> Audit {
        Audit {
            score,
            numericValue: numeric_value,
            title: None,
            description: None,
        }
    }

    #[test]
    fn present_audit_yields_value() {
        let mut audits = HashMap::new();
        audits.insert(
            "largest-contentful-paint".to_string(),
            audit(Some(0.9), Some(2400.0)),
        );
        let metrics = extract_metrics(&report_with(audits));
        assert_eq!(metrics.lcp, Some(2400.0));
    }

    #[test]
    fn missing_audit_is_absent() {
        let metrics = extract_metrics(&report_with(HashMap::new()));
        assert_eq!(metrics.fcp, None);
        assert_eq!(metrics.cls, None);
    }

    #[test]
    fn null_score_is_absent_even_with_numeric_value() {
        let mut audits = HashMap::new();
        audits.insert(
            "first-contentful-paint".to_string(),
            audit(None, Some(1500.0)),
        );
        let metrics = extract_metrics(&report_with(audits));
        assert_eq!(metrics.fcp, None);
    }

    #[test]
    fn missing_numeric_value_is_absent() {
        let mut audits = HashMap::new();
        audits.insert("total-blocking-time".to_string(), audit(Some(1.0), None));
        let metrics = extract_metrics(&report_with(audits));
        assert_eq!(metrics.tbt, None);
    }

    #[test]
    fn fid_reads_max_potential_fid() {
        let mut audits = HashMap::new();
        audits.insert(
            "max-potential-fid".to_string(),
            audit(Some(0.7), Some(120.0)),
        );
        let metrics = extract_metrics(&report_with(audits));
        assert_eq!(metrics.fid, Some(120.0));
    }
}
