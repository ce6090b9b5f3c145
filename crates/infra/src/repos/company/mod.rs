mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{CompanyQuery, Page};
pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;
use signflow_domain::{Company, ID};

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    async fn insert(&self, company: &Company) -> anyhow::Result<()>;
    async fn save(&self, company: &Company) -> anyhow::Result<()>;
    async fn find(&self, company_id: &ID) -> Option<Company>;
    /// Pages through the `Company`s matching the query that have reminders enabled,
    /// ordered by name
    async fn find_with_reminders_enabled(&self, query: &CompanyQuery)
        -> anyhow::Result<Page<Company>>;
}

#[cfg(test)]
mod tests {
    use crate::repos::shared::query_structs::CompanyQuery;
    use crate::tests::create_contexts;
    use signflow_domain::{Company, CompanyStatus, Entity};

    fn company_with_reminders(name: &str, enabled: bool) -> Company {
        let mut company = Company::new(name.into());
        company.reminder_policy.enabled = enabled;
        company
    }

    #[tokio::test]
    async fn create_and_find() {
        for ctx in create_contexts().await {
            let company = company_with_reminders("Insert and find", true);

            assert!(ctx.repos.companies.insert(&company).await.is_ok());
            let res = ctx.repos.companies.find(&company.id).await.unwrap();
            assert!(res.eq(&company));
            assert_eq!(res.reminder_policy, company.reminder_policy);
        }
    }

    #[tokio::test]
    async fn update() {
        for ctx in create_contexts().await {
            let mut company = company_with_reminders("Update", false);
            assert!(ctx.repos.companies.insert(&company).await.is_ok());

            company.reminder_policy.frequency_days = 9;
            company.settings.message_sender_name = Some("Updated".into());
            assert!(ctx.repos.companies.save(&company).await.is_ok());

            let res = ctx.repos.companies.find(&company.id).await.unwrap();
            assert_eq!(res.reminder_policy.frequency_days, 9);
            assert_eq!(res.settings, company.settings);
        }
    }

    #[tokio::test]
    async fn pages_through_companies_with_reminders_enabled() {
        for ctx in create_contexts().await {
            // Unique name so that rows from other tests are filtered out
            let tag = signflow_domain::ID::default().as_string();
            let mut expected = Vec::new();
            for i in 0..5 {
                let company = company_with_reminders(&format!("{}-{}", tag, i), true);
                ctx.repos.companies.insert(&company).await.unwrap();
                expected.push(company);
            }
            let disabled = company_with_reminders(&format!("{}-disabled", tag), false);
            ctx.repos.companies.insert(&disabled).await.unwrap();
            let mut suspended = company_with_reminders(&format!("{}-suspended", tag), true);
            suspended.status = CompanyStatus::Suspended;
            ctx.repos.companies.insert(&suspended).await.unwrap();

            let mut query = CompanyQuery::active(0, 2);
            query.name_filter = Some(tag.clone());

            let first = ctx
                .repos
                .companies
                .find_with_reminders_enabled(&query)
                .await
                .unwrap();
            assert_eq!(first.total_count, 5);
            assert_eq!(first.items.len(), 2);
            assert!(first.items[0].eq(&expected[0]));
            assert!(first.items[1].eq(&expected[1]));

            query.offset = 4;
            let last = ctx
                .repos
                .companies
                .find_with_reminders_enabled(&query)
                .await
                .unwrap();
            assert_eq!(last.total_count, 5);
            assert_eq!(last.items.len(), 1);
            assert_eq!(last.items[0].id(), expected[4].id());

            query.status = CompanyStatus::Suspended;
            query.offset = 0;
            let suspended_page = ctx
                .repos
                .companies
                .find_with_reminders_enabled(&query)
                .await
                .unwrap();
            assert_eq!(suspended_page.total_count, 1);
            assert!(suspended_page.items[0].eq(&suspended));
        }
    }
}
