use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven tracked Web Vitals. Each value is either a measurement or
/// absent -- Lighthouse had no data or scored the audit null. Absence is a
/// value here, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsRecord {
    pub fcp: Option<f64>,
    pub lcp: Option<f64>,
    pub cls: Option<f64>,
    pub fid: Option<f64>,
    pub tti: Option<f64>,
    pub tbt: Option<f64>,
    pub ttfb: Option<f64>,
}

impl MetricsRecord {
    pub fn get(&self, vital: WebVital) -> Option<f64> {
        match vital {
            WebVital::Fcp => self.fcp,
            WebVital::Lcp => self.lcp,
            WebVital::Cls => self.cls,
            WebVital::Fid => self.fid,
            WebVital::Tti => self.tti,
            WebVital::Tbt => self.tbt,
            WebVital::Ttfb => self.ttfb,
        }
    }

    pub fn set(&mut self, vital: WebVital, value: Option<f64>) {
        match vital {
            WebVital::Fcp => self.fcp = value,
            WebVital::Lcp => self.lcp = value,
            WebVital::Cls => self.cls = value,
            WebVital::Fid => self.fid = value,
            WebVital::Tti => self.tti = value,
            WebVital::Tbt => self.tbt = value,
            WebVital::Ttfb => self.ttfb = value,
        }
    }
}

// Band thresholds for one vital: below `good` is good, below `poor` needs
// improvement, everything else is poor. Both comparisons are strict.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub good: f64,
    pub poor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebVital {
    Fcp,
    Lcp,
    Cls,
    Fid,
    Tti,
    Tbt,
    Ttfb,
}

impl WebVital {
    pub const ALL: [WebVital; 7] = [
        WebVital::Fcp,
        WebVital::Lcp,
        WebVital::Cls,
        WebVital::Fid,
        WebVital::Tti,
        WebVital::Tbt,
        WebVital::Ttfb,
    ];

    /// The Lighthouse audit id this vital is read from. FID has no audit of
    /// its own, `max-potential-fid` stands in; TTFB is what Lighthouse now
    /// calls `server-response-time`.
    pub fn audit_id(&self) -> &'static str {
        match self {
            WebVital::Fcp => "first-contentful-paint",
            WebVital::Lcp => "largest-contentful-paint",
            WebVital::Cls => "cumulative-layout-shift",
            WebVital::Fid => "max-potential-fid",
            WebVital::Tti => "interactive",
            WebVital::Tbt => "total-blocking-time",
            WebVital::Ttfb => "server-response-time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebVital::Fcp => "First Contentful Paint",
            WebVital::Lcp => "Largest Contentful Paint",
            WebVital::Cls => "Cumulative Layout Shift",
            WebVital::Fid => "First Input Delay",
            WebVital::Tti => "Time to Interactive",
            WebVital::Tbt => "Total Blocking Time",
            WebVital::Ttfb => "Time to First Byte",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            WebVital::Fcp => "FCP",
            WebVital::Lcp => "LCP",
            WebVital::Cls => "CLS",
            WebVital::Fid => "FID",
            WebVital::Tti => "TTI",
            WebVital::Tbt => "TBT",
            WebVital::Ttfb => "TTFB",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            WebVital::Cls => "",
            _ => "ms",
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        match self {
            WebVital::Fcp => Thresholds { good: 1800.0, poor: 3000.0 },
            WebVital::Lcp => Thresholds { good: 2500.0, poor: 4000.0 },
            WebVital::Cls => Thresholds { good: 0.1, poor: 0.25 },
            WebVital::Fid => Thresholds { good: 100.0, poor: 300.0 },
            WebVital::Tti => Thresholds { good: 3800.0, poor: 7300.0 },
            WebVital::Tbt => Thresholds { good: 200.0, poor: 600.0 },
            WebVital::Ttfb => Thresholds { good: 800.0, poor: 1800.0 },
        }
    }

    /// Reference ceiling for the comparison radar chart: the value mapped to
    /// a goodness of 0. Matches each vital's poor-band threshold.
    pub fn radar_ceiling(&self) -> f64 {
        self.thresholds().poor
    }
}

impl fmt::Display for WebVital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_label())
    }
}
