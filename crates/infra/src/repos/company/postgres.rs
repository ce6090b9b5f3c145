use super::ICompanyRepo;
use crate::repos::shared::query_structs::{CompanyQuery, Page};
use signflow_domain::{Company, CompanySettings, ID, ReminderPolicy};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    company_uid: Uuid,
    name: String,
    status: String,
    reminder_policy: Json<ReminderPolicy>,
    settings: Json<CompanySettings>,
}

impl TryFrom<CompanyRaw> for Company {
    type Error = anyhow::Error;

    fn try_from(e: CompanyRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.company_uid.into(),
            name: e.name,
            status: e.status.parse()?,
            reminder_policy: e.reminder_policy.0,
            settings: e.settings.0,
        })
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO companies(company_uid, name, status, reminder_policy, settings)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(company.id.inner_ref())
        .bind(&company.name)
        .bind(company.status.as_str())
        .bind(Json(&company.reminder_policy))
        .bind(Json(&company.settings))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, company: &Company) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE companies
            SET name = $2,
            status = $3,
            reminder_policy = $4,
            settings = $5
            WHERE company_uid = $1
            "#,
        )
        .bind(company.id.inner_ref())
        .bind(&company.name)
        .bind(company.status.as_str())
        .bind(Json(&company.reminder_policy))
        .bind(Json(&company.settings))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, company_id: &ID) -> Option<Company> {
        let res: Option<CompanyRaw> = sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            WHERE company_uid = $1
            "#,
        )
        .bind(company_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find company with id: {:?} failed. DB returned error: {:?}",
                company_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|company| company.try_into().ok())
    }

    async fn find_with_reminders_enabled(
        &self,
        query: &CompanyQuery,
    ) -> anyhow::Result<Page<Company>> {
        let total_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM companies AS c
            WHERE (c.reminder_policy->>'enabled')::boolean = true
            AND c.status = $1
            AND ($2::text IS NULL OR c.name ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(query.status.as_str())
        .bind(&query.name_filter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Count companies with reminders enabled for query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        let companies_raw: Vec<CompanyRaw> = sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies AS c
            WHERE (c.reminder_policy->>'enabled')::boolean = true
            AND c.status = $1
            AND ($2::text IS NULL OR c.name ILIKE '%' || $2 || '%')
            ORDER BY c.name, c.company_uid
            OFFSET $3
            LIMIT $4
            "#,
        )
        .bind(query.status.as_str())
        .bind(&query.name_filter)
        .bind(query.offset as i64)
        .bind(query.limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find companies with reminders enabled for query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        let items = companies_raw
            .into_iter()
            .filter_map(|raw| {
                let company_uid = raw.company_uid;
                match Company::try_from(raw) {
                    Ok(company) => Some(company),
                    Err(e) => {
                        error!("Skipping malformed company: {}. Error: {:?}", company_uid, e);
                        None
                    }
                }
            })
            .collect();

        Ok(Page {
            items,
            total_count: total_count as usize,
        })
    }
}
