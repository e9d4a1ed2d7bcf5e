//! Transient request/response value objects. Nothing here persists; every
//! value lives for a single request.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai-doctor`.
///
/// `message` defaults to empty when the field is missing so a missing field
/// and an empty string fail validation the same way.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Successful completion payload: the model text verbatim, untruncated.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: String,
}

/// One entry of the static specialist directory.
#[derive(Debug, Clone, Serialize)]
pub struct Specialist {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f64,
}

#[derive(Debug, Serialize)]
pub struct SpecialistsResponse {
    pub success: bool,
    pub specialists: Vec<Specialist>,
}

#[derive(Debug, Serialize)]
pub struct HealthTipsResponse {
    pub success: bool,
    pub tips: Vec<&'static str>,
}
