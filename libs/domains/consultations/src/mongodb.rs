//! MongoDB implementation of ConsultationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::mongodb::{
    SortSpec, aggregate, count, find_many, find_one, from_bson_datetime, insert_one,
    to_bson_datetime,
};
use mongodb::{
    Collection, Database,
    bson::{self, doc},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::analytics::{
    GroupCount, TrendBucket, business_size_pipeline, industry_pipeline, trend_pipeline,
};
use crate::error::ConsultationResult;
use crate::models::{Analysis, ConsultationRequest};
use crate::repository::ConsultationRepository;

pub const COLLECTION: &str = "consultations";

/// Stored shape. Field names match the API so pipelines can group on
/// `$industry` and `$businessSize`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConsultationDocument {
    id: String,
    company_name: String,
    industry: String,
    business_size: String,
    current_challenges: String,
    data_availability: String,
    tech_stack: String,
    budget: String,
    timeline: String,
    contact: String,
    #[serde(default)]
    analysis: Option<Analysis>,
    timestamp: bson::DateTime,
}

impl From<ConsultationRequest> for ConsultationDocument {
    fn from(request: ConsultationRequest) -> Self {
        Self {
            id: request.id,
            company_name: request.company_name,
            industry: request.industry,
            business_size: request.business_size,
            current_challenges: request.current_challenges,
            data_availability: request.data_availability,
            tech_stack: request.tech_stack,
            budget: request.budget,
            timeline: request.timeline,
            contact: request.contact,
            analysis: request.analysis,
            timestamp: to_bson_datetime(request.timestamp),
        }
    }
}

impl From<ConsultationDocument> for ConsultationRequest {
    fn from(doc: ConsultationDocument) -> Self {
        Self {
            id: doc.id,
            company_name: doc.company_name,
            industry: doc.industry,
            business_size: doc.business_size,
            current_challenges: doc.current_challenges,
            data_availability: doc.data_availability,
            tech_stack: doc.tech_stack,
            budget: doc.budget,
            timeline: doc.timeline,
            contact: doc.contact,
            analysis: doc.analysis,
            timestamp: from_bson_datetime(doc.timestamp),
        }
    }
}

pub struct MongoConsultationRepository {
    collection: Collection<ConsultationDocument>,
}

impl MongoConsultationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ConsultationRepository for MongoConsultationRepository {
    #[instrument(skip(self, request), fields(consultation_id = %request.id))]
    async fn insert(
        &self,
        request: ConsultationRequest,
    ) -> ConsultationResult<ConsultationRequest> {
        let document = ConsultationDocument::from(request.clone());
        insert_one(&self.collection, &document).await?;
        Ok(request)
    }

    #[instrument(skip(self))]
    async fn list_newest(&self, limit: i64) -> ConsultationResult<Vec<ConsultationRequest>> {
        let documents = find_many(
            &self.collection,
            doc! {},
            Some(SortSpec::descending("timestamp")),
            limit,
        )
        .await?;
        Ok(documents.into_iter().map(ConsultationRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ConsultationResult<Option<ConsultationRequest>> {
        let document = find_one(&self.collection, doc! { "id": id }).await?;
        Ok(document.map(ConsultationRequest::from))
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> ConsultationResult<u64> {
        Ok(count(&self.collection, doc! {}).await?)
    }

    #[instrument(skip(self))]
    async fn industry_breakdown(&self, limit: i64) -> ConsultationResult<Vec<GroupCount>> {
        Ok(aggregate(&self.collection, industry_pipeline(), limit).await?)
    }

    #[instrument(skip(self))]
    async fn business_size_breakdown(&self, limit: i64) -> ConsultationResult<Vec<GroupCount>> {
        Ok(aggregate(&self.collection, business_size_pipeline(), limit).await?)
    }

    #[instrument(skip(self))]
    async fn daily_trend(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> ConsultationResult<Vec<TrendBucket>> {
        Ok(aggregate(&self.collection, trend_pipeline(since), limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisValue;
    use database::mongodb::now_millis;
    use std::collections::BTreeMap;

    fn request() -> ConsultationRequest {
        let mut analysis = Analysis::new();
        analysis.insert("score".to_string(), AnalysisValue::Integer(72));
        analysis.insert("confidence".to_string(), AnalysisValue::Number(0.8));
        analysis.insert("ready".to_string(), AnalysisValue::Bool(true));
        analysis.insert(
            "notes".to_string(),
            AnalysisValue::List(vec![
                AnalysisValue::Text("clean data".to_string()),
                AnalysisValue::Map(BTreeMap::from([(
                    "gaps".to_string(),
                    AnalysisValue::Integer(3),
                )])),
            ]),
        );

        ConsultationRequest {
            id: "c-1".to_string(),
            company_name: "Acme".to_string(),
            industry: "Retail".to_string(),
            business_size: "Small".to_string(),
            current_challenges: "Forecasting".to_string(),
            data_availability: "Spreadsheets".to_string(),
            tech_stack: "Postgres".to_string(),
            budget: "10k".to_string(),
            timeline: "Q3".to_string(),
            contact: "ops@acme.test".to_string(),
            analysis: Some(analysis),
            timestamp: now_millis(),
        }
    }

    fn stored(request: ConsultationRequest) -> bson::Document {
        bson::to_document(&ConsultationDocument::from(request)).unwrap()
    }

    #[test]
    fn test_grouped_fields_exist_under_pipeline_paths() {
        let document = stored(request());
        assert_eq!(document.get_str("industry").unwrap(), "Retail");
        assert_eq!(document.get_str("businessSize").unwrap(), "Small");
        assert!(!document.contains_key("business_size"));

        for pipeline in [industry_pipeline(), business_size_pipeline()] {
            let group = pipeline[0].get_document("$group").unwrap();
            let path = group.get_str("_id").unwrap();
            assert!(document.contains_key(path.trim_start_matches('$')), "{path}");
        }
    }

    #[test]
    fn test_timestamp_is_a_bson_date() {
        let request = request();
        let document = stored(request.clone());

        let timestamp = document.get_datetime("timestamp").unwrap();
        assert_eq!(
            timestamp.timestamp_millis(),
            request.timestamp.timestamp_millis()
        );

        let trend = trend_pipeline(request.timestamp);
        let matched = trend[0].get_document("$match").unwrap();
        assert!(matched.contains_key("timestamp"));
    }

    #[test]
    fn test_document_round_trip_keeps_analysis() {
        let original = request();
        let restored: ConsultationDocument = bson::from_document(stored(original.clone())).unwrap();
        assert_eq!(ConsultationRequest::from(restored), original);
    }

    #[test]
    fn test_int32_analysis_values_read_as_integers() {
        let mut document = stored(request());
        document.insert("analysis", doc! { "score": 5_i32 });

        let restored: ConsultationDocument = bson::from_document(document).unwrap();
        let analysis = ConsultationRequest::from(restored).analysis.unwrap();
        assert_eq!(analysis["score"], AnalysisValue::Integer(5));
    }

    #[test]
    fn test_missing_analysis_reads_as_none() {
        let mut document = stored(request());
        document.remove("analysis");

        let restored: ConsultationDocument = bson::from_document(document).unwrap();
        assert!(ConsultationRequest::from(restored).analysis.is_none());
    }
}
