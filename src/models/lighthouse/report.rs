use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Root pub structure for one raw Lighthouse JSON report. Only the fields
// the aggregator consumes are modelled; everything else in the report is
// ignored during deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[allow(non_snake_case)]
pub struct Root {
    pub requestedUrl: String,
    pub categories: Categories,
    pub audits: HashMap<String, Audit>,
}
