//! PostgreSQL adapter for AnalysisRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::entities::{DeveloperAnalysis, DeveloperProfile, DomainScores};
use crate::domain::ports::{AnalysisQuery, AnalysisRepository, AnalysisStats};
use crate::entity::developer_analyses;
use crate::error::DomainError;

/// PostgreSQL implementation of AnalysisRepository
pub struct PostgresAnalysisRepository {
    db: DatabaseConnection,
}

impl PostgresAnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_domain(model: developer_analyses::Model) -> Result<DeveloperAnalysis, DomainError> {
        let domains: DomainScores = serde_json::from_value(model.domains)
            .map_err(|e| DomainError::Internal(format!("corrupt domains column: {e}")))?;
        let profile: DeveloperProfile = serde_json::from_value(model.profile)
            .map_err(|e| DomainError::Internal(format!("corrupt profile column: {e}")))?;

        Ok(DeveloperAnalysis {
            username: model.username,
            talent_rank: model.talent_rank,
            nation: model.nation,
            nation_confidence: model.nation_confidence,
            domains,
            profile,
            last_updated: model.last_updated.with_timezone(&Utc),
        })
    }

    fn apply_filters(
        mut select: sea_orm::Select<developer_analyses::Entity>,
        query: &AnalysisQuery,
    ) -> sea_orm::Select<developer_analyses::Entity> {
        if let Some(nation) = &query.nation {
            select = select.filter(developer_analyses::Column::Nation.eq(nation.clone()));
        }
        if let Some(min_rank) = query.min_rank {
            select = select.filter(developer_analyses::Column::TalentRank.gte(min_rank));
        }
        if let Some(domain) = &query.domain {
            // jsonb_exists avoids the `?` operator, which collides with
            // driver placeholder syntax
            select = select.filter(Expr::cust_with_values(
                "jsonb_exists(domains, $1)",
                [domain.clone()],
            ));
        }
        select
    }
}

#[async_trait]
impl AnalysisRepository for PostgresAnalysisRepository {
    async fn upsert(&self, analysis: &DeveloperAnalysis) -> Result<(), DomainError> {
        let domains = serde_json::to_value(&analysis.domains)
            .map_err(|e| DomainError::Internal(format!("serialize domains: {e}")))?;
        let profile = serde_json::to_value(&analysis.profile)
            .map_err(|e| DomainError::Internal(format!("serialize profile: {e}")))?;

        let model = developer_analyses::ActiveModel {
            username: Set(analysis.username.clone()),
            talent_rank: Set(analysis.talent_rank),
            nation: Set(analysis.nation.clone()),
            nation_confidence: Set(analysis.nation_confidence),
            domains: Set(domains),
            profile: Set(profile),
            last_updated: Set(analysis.last_updated.fixed_offset()),
        };

        developer_analyses::Entity::insert(model)
            .on_conflict(
                OnConflict::column(developer_analyses::Column::Username)
                    .update_columns([
                        developer_analyses::Column::TalentRank,
                        developer_analyses::Column::Nation,
                        developer_analyses::Column::NationConfidence,
                        developer_analyses::Column::Domains,
                        developer_analyses::Column::Profile,
                        developer_analyses::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DeveloperAnalysis>, DomainError> {
        let result = developer_analyses::Entity::find_by_id(username.to_string())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Self::to_domain).transpose()
    }

    async fn search(&self, query: &AnalysisQuery) -> Result<Vec<DeveloperAnalysis>, DomainError> {
        let results = Self::apply_filters(developer_analyses::Entity::find(), query)
            .order_by_desc(developer_analyses::Column::TalentRank)
            .offset(query.offset)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Self::to_domain).collect()
    }

    async fn count(&self, query: &AnalysisQuery) -> Result<u64, DomainError> {
        Self::apply_filters(developer_analyses::Entity::find(), query)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn stats(&self) -> Result<AnalysisStats, DomainError> {
        // Single minimal-column scan; fine at the scale one analyzer
        // instance produces.
        let rows: Vec<(f64, String, serde_json::Value)> = developer_analyses::Entity::find()
            .select_only()
            .column(developer_analyses::Column::TalentRank)
            .column(developer_analyses::Column::Nation)
            .column(developer_analyses::Column::Domains)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let total = rows.len() as u64;
        let mut rank_sum = 0.0;
        let mut nations = BTreeSet::new();
        let mut domains = BTreeSet::new();

        for (rank, nation, domain_map) in rows {
            rank_sum += rank;
            nations.insert(nation);
            if let Some(object) = domain_map.as_object() {
                for key in object.keys() {
                    domains.insert(key.clone());
                }
            }
        }

        let avg_rank = if total > 0 { rank_sum / total as f64 } else { 0.0 };

        Ok(AnalysisStats {
            total_developers: total,
            nations: nations.into_iter().collect(),
            domains: domains.into_iter().collect(),
            avg_rank,
        })
    }
}
