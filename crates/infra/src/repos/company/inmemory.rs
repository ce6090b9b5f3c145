use super::ICompanyRepo;
use crate::repos::shared::{
    inmemory_repo::*,
    query_structs::{CompanyQuery, Page},
};
use signflow_domain::{Company, ID};

pub struct InMemoryCompanyRepo {
    companies: std::sync::Mutex<Vec<Company>>,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<()> {
        insert(company, &self.companies);
        Ok(())
    }

    async fn save(&self, company: &Company) -> anyhow::Result<()> {
        save(company, &self.companies);
        Ok(())
    }

    async fn find(&self, company_id: &ID) -> Option<Company> {
        find(company_id, &self.companies)
    }

    async fn find_with_reminders_enabled(
        &self,
        query: &CompanyQuery,
    ) -> anyhow::Result<Page<Company>> {
        let name_filter = query.name_filter.as_ref().map(|f| f.to_lowercase());
        let mut companies = find_by(&self.companies, |c| {
            c.reminder_policy.enabled
                && c.status == query.status
                && name_filter
                    .as_ref()
                    .map(|f| c.name.to_lowercase().contains(f))
                    .unwrap_or(true)
        });
        companies.sort_by(|c1, c2| c1.name.cmp(&c2.name).then(c1.id.cmp(&c2.id)));

        let total_count = companies.len();
        let items = companies
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect();
        Ok(Page { items, total_count })
    }
}
