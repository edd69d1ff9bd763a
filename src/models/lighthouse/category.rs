use serde::{Deserialize, Serialize};

// Reference from a category to the audits that feed it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditRef {
    pub id: String,
}

// pub struct for each category as Lighthouse emits it, score in [0,1]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(non_snake_case)]
pub struct Category {
    pub score: Option<f64>,
    #[serde(default)]
    pub auditRefs: Vec<AuditRef>,
}

// pub struct for Lighthouse categories
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}

// Category scores on the 0-100 scale, one audit run's worth (or, in an
// aggregated result, the per-category mean across runs)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryScores {
    pub performance: Option<f64>,
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
    pub seo: Option<f64>,
}

impl CategoryScores {
    // Fixed iteration order for tables and charts
    pub fn fields(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("performance", self.performance),
            ("accessibility", self.accessibility),
            ("best_practices", self.best_practices),
            ("seo", self.seo),
        ]
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "performance" => self.performance,
            "accessibility" => self.accessibility,
            "best_practices" => self.best_practices,
            "seo" => self.seo,
            _ => None,
        }
    }

    pub fn label(key: &str) -> &'static str {
        match key {
            "performance" => "Performance",
            "accessibility" => "Accessibility",
            "best_practices" => "Best Practices",
            "seo" => "SEO",
            _ => "Unknown",
        }
    }
}
