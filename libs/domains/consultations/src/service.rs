use chrono::Utc;
use database::mongodb::MAX_FETCH;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::analytics::{ConsultationAnalytics, GROUP_LIMIT, trend_since};
use crate::error::{ConsultationError, ConsultationResult};
use crate::models::{ConsultationCreate, ConsultationRequest};
use crate::repository::ConsultationRepository;

pub struct ConsultationService<R: ConsultationRepository> {
    repository: Arc<R>,
}

impl<R: ConsultationRepository> ConsultationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(industry = %input.industry))]
    pub async fn create_consultation(
        &self,
        input: ConsultationCreate,
    ) -> ConsultationResult<ConsultationRequest> {
        input
            .validate()
            .map_err(|e| ConsultationError::Validation(e.to_string()))?;

        let request = self
            .repository
            .insert(ConsultationRequest::new(input))
            .await
            .map_err(|e| e.context("Error creating consultation"))?;

        tracing::info!(id = %request.id, "Consultation request stored");
        Ok(request)
    }

    #[instrument(skip(self))]
    pub async fn list_consultations(&self) -> ConsultationResult<Vec<ConsultationRequest>> {
        self.repository
            .list_newest(MAX_FETCH)
            .await
            .map_err(|e| e.context("Error fetching consultations"))
    }

    #[instrument(skip(self))]
    pub async fn get_consultation(&self, id: &str) -> ConsultationResult<ConsultationRequest> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| e.context("Error fetching consultation"))?
            .ok_or_else(ConsultationError::not_found)
    }

    /// Totals, breakdowns by industry and business size, and the 30-day trend.
    #[instrument(skip(self))]
    pub async fn analytics(&self) -> ConsultationResult<ConsultationAnalytics> {
        self.collect_analytics()
            .await
            .map_err(|e| e.context("Error fetching analytics"))
    }

    async fn collect_analytics(&self) -> ConsultationResult<ConsultationAnalytics> {
        let total_consultations = self.repository.count_all().await?;
        let industry_breakdown = self.repository.industry_breakdown(GROUP_LIMIT).await?;
        let business_size_breakdown = self.repository.business_size_breakdown(GROUP_LIMIT).await?;
        let recent_trend = self
            .repository
            .daily_trend(trend_since(Utc::now()), GROUP_LIMIT)
            .await?;

        Ok(ConsultationAnalytics {
            total_consultations,
            industry_breakdown,
            business_size_breakdown,
            recent_trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{GroupCount, TrendBucket, TrendDay};
    use crate::repository::MockConsultationRepository;
    use chrono::Duration;
    use mockall::predicate;

    fn input(industry: &str) -> ConsultationCreate {
        ConsultationCreate {
            company_name: "Acme".to_string(),
            industry: industry.to_string(),
            business_size: "Small".to_string(),
            current_challenges: "Manual work".to_string(),
            data_availability: "Some".to_string(),
            tech_stack: "Python".to_string(),
            budget: "10k".to_string(),
            timeline: "3 months".to_string(),
            contact: "ceo@acme.test".to_string(),
            analysis: None,
        }
    }

    #[tokio::test]
    async fn test_create_stores_generated_record() {
        let mut repo = MockConsultationRepository::new();
        repo.expect_insert()
            .withf(|request| request.industry == "Retail" && !request.id.is_empty())
            .times(1)
            .returning(|request| Ok(request));

        let service = ConsultationService::new(repo);
        let created = service.create_consultation(input("Retail")).await.unwrap();

        assert_eq!(created.company_name, "Acme");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields_before_insert() {
        let mut repo = MockConsultationRepository::new();
        repo.expect_insert().never();

        let service = ConsultationService::new(repo);
        let result = service.create_consultation(input("")).await;

        assert!(matches!(result, Err(ConsultationError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_consultation_is_not_found() {
        let mut repo = MockConsultationRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "missing")
            .times(1)
            .returning(|_| Ok(None));

        let service = ConsultationService::new(repo);
        let err = service.get_consultation("missing").await.unwrap_err();

        assert_eq!(err.to_string(), "Consultation not found");
    }

    #[tokio::test]
    async fn test_list_requests_fetch_cap() {
        let mut repo = MockConsultationRepository::new();
        repo.expect_list_newest()
            .with(predicate::eq(MAX_FETCH))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ConsultationService::new(repo);
        assert!(service.list_consultations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analytics_combines_counts_and_groupings() {
        let mut repo = MockConsultationRepository::new();
        repo.expect_count_all().returning(|| Ok(3));
        repo.expect_industry_breakdown()
            .with(predicate::eq(GROUP_LIMIT))
            .returning(|_| {
                Ok(vec![
                    GroupCount {
                        id: Some("Retail".to_string()),
                        count: 2,
                    },
                    GroupCount {
                        id: Some("Finance".to_string()),
                        count: 1,
                    },
                ])
            });
        repo.expect_business_size_breakdown()
            .with(predicate::eq(GROUP_LIMIT))
            .returning(|_| {
                Ok(vec![GroupCount {
                    id: Some("Small".to_string()),
                    count: 3,
                }])
            });
        repo.expect_daily_trend()
            .withf(|since, limit| {
                let expected = Utc::now() - Duration::days(30);
                (*since - expected).num_seconds().abs() < 5 && *limit == GROUP_LIMIT
            })
            .returning(|_, _| {
                Ok(vec![TrendBucket {
                    id: TrendDay {
                        year: 2024,
                        month: 1,
                        day: 15,
                    },
                    count: 3,
                }])
            });

        let service = ConsultationService::new(repo);
        let analytics = service.analytics().await.unwrap();

        assert_eq!(analytics.total_consultations, 3);
        let industry_total: i64 = analytics.industry_breakdown.iter().map(|g| g.count).sum();
        assert_eq!(industry_total, 3);
        assert_eq!(analytics.recent_trend.len(), 1);
    }

    #[tokio::test]
    async fn test_analytics_failure_names_the_operation() {
        let mut repo = MockConsultationRepository::new();
        repo.expect_count_all()
            .returning(|| Err(ConsultationError::Database("not primary".to_string())));

        let service = ConsultationService::new(repo);
        let err = service.analytics().await.unwrap_err();

        assert!(
            matches!(err, ConsultationError::Database(msg) if msg == "Error fetching analytics: not primary")
        );
    }
}
