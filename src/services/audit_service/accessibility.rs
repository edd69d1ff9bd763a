use crate::models::lighthouse::audit::AccessibilityIssue;
use crate::models::lighthouse::report::Root;

/// Collect the accessibility audits that failed in this run. Only audits
/// referenced by the accessibility category are considered; anything scored
/// below 1.0 counts as an issue.
pub fn collect_accessibility_issues(report: &Root) -> Vec<AccessibilityIssue> {
    let category = match &report.categories.accessibility {
        Some(category) => category,
        None => return Vec::new(),
    };

    let mut issues = Vec::new();
    for audit_ref in &category.auditRefs {
        if let Some(audit) = report.audits.get(&audit_ref.id) {
            if let Some(score) = audit.score {
                if score < 1.0 {
                    issues.push(AccessibilityIssue {
                        id: audit_ref.id.clone(),
                        title: audit
                            .title
                            .clone()
                            .unwrap_or_else(|| audit_ref.id.clone()),
                        description: audit.description.clone(),
                        score,
                    });
                }
            }
        }
    }
    issues
}
