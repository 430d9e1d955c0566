use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A value inside the free-form `analysis` mapping.
///
/// Variants are tried in order, so whole numbers stay integers and `null`
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<AnalysisValue>),
    Map(BTreeMap<String, AnalysisValue>),
}

pub type Analysis = BTreeMap<String, AnalysisValue>;

/// A stored consultation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub business_size: String,
    pub current_challenges: String,
    pub data_availability: String,
    pub tech_stack: String,
    pub budget: String,
    pub timeline: String,
    pub contact: String,
    /// Readiness assessment computed client-side
    #[schema(value_type = Option<Object>)]
    pub analysis: Option<Analysis>,
    pub timestamp: DateTime<Utc>,
}

/// Consultation form body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationCreate {
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    pub business_size: String,
    #[validate(length(min = 1))]
    pub current_challenges: String,
    #[validate(length(min = 1))]
    pub data_availability: String,
    #[validate(length(min = 1))]
    pub tech_stack: String,
    #[validate(length(min = 1))]
    pub budget: String,
    #[validate(length(min = 1))]
    pub timeline: String,
    #[validate(length(min = 1))]
    pub contact: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub analysis: Option<Analysis>,
}

impl ConsultationRequest {
    pub fn new(input: ConsultationCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_name: input.company_name,
            industry: input.industry,
            business_size: input.business_size,
            current_challenges: input.current_challenges,
            data_availability: input.data_availability,
            tech_stack: input.tech_stack,
            budget: input.budget,
            timeline: input.timeline,
            contact: input.contact,
            analysis: input.analysis,
            timestamp: database::mongodb::now_millis(),
        }
    }
}
