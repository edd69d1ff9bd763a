pub mod audit_service;
pub mod history_service;
pub mod report_service;

pub use audit_service::{
    collect_accessibility_issues, run_audits, run_lighthouse, AuditOutcome, BrowserSession,
};
pub use history_service::{load_entries, save_entry};
pub use report_service::{render_comparison_report, render_detailed_report, render_trend_report};
