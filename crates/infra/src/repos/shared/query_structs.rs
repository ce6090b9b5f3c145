use signflow_domain::CompanyStatus;

/// Query for paging through the `Company`s that have reminders enabled
#[derive(Debug, Clone)]
pub struct CompanyQuery {
    /// Only include `Company`s whose name contains this text (case insensitive)
    pub name_filter: Option<String>,
    pub offset: usize,
    pub limit: usize,
    pub status: CompanyStatus,
}

impl CompanyQuery {
    pub fn active(offset: usize, limit: usize) -> Self {
        Self {
            name_filter: None,
            offset,
            limit,
            status: CompanyStatus::Active,
        }
    }
}

/// One page of a paged query together with the total number of matches
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}
