use crate::models::lighthouse::metrics::WebVital;
use crate::models::lighthouse::status::Band;
use crate::services::audit_service::compute::evaluate::MetricAssessment;

/// Static improvement advice per vital. No ranking, no personalization;
/// the catalog order is the display order.
pub fn recommendations_for(vital: WebVital) -> &'static [&'static str] {
    match vital {
        WebVital::Fcp => &[
            "Eliminate render-blocking stylesheets and scripts",
            "Inline critical CSS and defer the rest",
            "Use a CDN to shorten the distance to the first byte",
            "Preconnect to origins required for first paint",
        ],
        WebVital::Lcp => &[
            "Compress and resize the largest above-the-fold image",
            "Preload the LCP resource",
            "Serve images in modern formats (WebP/AVIF)",
            "Cut server response time for the main document",
        ],
        WebVital::Cls => &[
            "Set explicit width and height on images and video",
            "Reserve space for ads, embeds and iframes",
            "Avoid inserting content above existing content",
            "Use transform animations instead of layout-triggering properties",
        ],
        WebVital::Fid => &[
            "Break up long tasks on the main thread",
            "Defer unused JavaScript",
            "Use a web worker for heavy computation",
        ],
        WebVital::Tti => &[
            "Reduce total JavaScript payload",
            "Code-split and lazy-load non-critical bundles",
            "Remove unused third-party scripts",
            "Minimize main-thread work during load",
        ],
        WebVital::Tbt => &[
            "Split long tasks into chunks under 50ms",
            "Defer or async third-party scripts",
            "Trim polyfills on modern browsers",
        ],
        WebVital::Ttfb => &[
            "Cache server responses at the edge",
            "Tune slow database queries and server-side rendering",
            "Enable HTTP/2 or HTTP/3 on the origin",
            "Use early hints or preconnect for critical origins",
        ],
    }
}

/// Advice for every present metric whose band is not good.
pub fn build_recommendations(
    assessments: &[MetricAssessment],
) -> Vec<(WebVital, &'static [&'static str])> {
    assessments
        .iter()
        .filter(|assessment| assessment.band != Band::Good)
        .map(|assessment| (assessment.vital, recommendations_for(assessment.vital)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_metrics_get_no_advice() {
        let assessments = vec![
            MetricAssessment {
                vital: WebVital::Fcp,
                value: 900.0,
                band: Band::Good,
            },
            MetricAssessment {
                vital: WebVital::Tbt,
                value: 450.0,
                band: Band::NeedsImprovement,
            },
        ];
        let recommendations = build_recommendations(&assessments);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].0, WebVital::Tbt);
        assert!(!recommendations[0].1.is_empty());
    }

    #[test]
    fn every_vital_has_a_catalog() {
        for vital in WebVital::ALL {
            let advice = recommendations_for(vital);
            assert!(advice.len() >= 3 && advice.len() <= 4);
        }
    }
}
