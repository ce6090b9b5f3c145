use futures::stream::{self, StreamExt};
use signflow_domain::{
    reminder::{is_reminder_due, resolve_effective_policy, select_candidate_signers},
    Company, DocumentCollection, MessageType, ReminderPassSummary, Signer, User, ID,
};
use signflow_infra::{
    CompanyQuery, DispatchError, DispatchOutcome, DispatchRequest, ICompanyRepo,
    IDocumentCollectionRepo, IReminderDispatcher, ISys, IUserRepo, ReminderConfig,
    SignflowContext,
};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// Drives one full pass of sign reminders over every `Company`.
///
/// Companies are independent of each other and are processed concurrently.
/// A failure is contained at the smallest possible unit: a failed read aborts
/// the work of that `Company` only and a failed dispatch affects only that `Signer`.
/// The orchestrator never writes anything itself, the dispatcher records
/// when a `Signer` was notified.
pub struct ReminderOrchestrator {
    companies: Arc<dyn ICompanyRepo>,
    users: Arc<dyn IUserRepo>,
    collections: Arc<dyn IDocumentCollectionRepo>,
    dispatcher: Arc<dyn IReminderDispatcher>,
    sys: Arc<dyn ISys>,
    config: ReminderConfig,
}

impl ReminderOrchestrator {
    pub fn new(
        companies: Arc<dyn ICompanyRepo>,
        users: Arc<dyn IUserRepo>,
        collections: Arc<dyn IDocumentCollectionRepo>,
        dispatcher: Arc<dyn IReminderDispatcher>,
        sys: Arc<dyn ISys>,
        config: ReminderConfig,
    ) -> Self {
        Self {
            companies,
            users,
            collections,
            dispatcher,
            sys,
            config,
        }
    }

    pub fn from_context(ctx: &SignflowContext) -> Self {
        Self::new(
            ctx.repos.companies.clone(),
            ctx.repos.users.clone(),
            ctx.repos.document_collections.clone(),
            ctx.dispatcher.clone(),
            ctx.sys.clone(),
            ctx.config.reminders.clone(),
        )
    }

    pub async fn run_reminder_pass(&self) -> ReminderPassSummary {
        let now = self.sys.get_timestamp_millis();
        let page_size = self.config.company_page_size.max(1);
        let mut summary = ReminderPassSummary::default();
        let mut offset = 0;
        // Unknown until the first page has been read
        let mut total_count: Option<usize> = None;

        loop {
            let query = CompanyQuery::active(offset, page_size);
            let page = match self.companies.find_with_reminders_enabled(&query).await {
                Ok(page) => page,
                Err(e) => {
                    error!(
                        "Unable to read companies with reminders enabled at offset: {}. Error: {:?}",
                        offset, e
                    );
                    summary.company_pages_failed += 1;
                    offset += page_size;
                    match total_count {
                        Some(total) if offset < total => continue,
                        _ => break,
                    }
                }
            };
            total_count = Some(page.total_count);

            let fetched = page.items.len();
            let company_summaries = stream::iter(page.items)
                .map(|company| self.process_company(company, now))
                .buffer_unordered(self.config.tenant_concurrency.max(1))
                .collect::<Vec<_>>()
                .await;
            for company_summary in &company_summaries {
                summary.merge(company_summary);
            }

            offset += page_size;
            if fetched == 0 || offset >= page.total_count {
                break;
            }
        }

        info!("Reminder pass finished: {:?}", summary);
        summary
    }

    async fn process_company(&self, company: Company, now: i64) -> ReminderPassSummary {
        let mut summary = ReminderPassSummary {
            companies_scanned: 1,
            ..Default::default()
        };
        if !company.is_active() || !company.reminder_policy.enabled {
            return summary;
        }

        let collections = match self.collections.find_reminder_eligible(&company.id).await {
            Ok(collections) => collections,
            Err(e) => {
                error!(
                    "Unable to read document collections of company: {}. Skipping it. Error: {:?}",
                    company.id, e
                );
                summary.companies_failed += 1;
                return summary;
            }
        };
        if collections.is_empty() {
            return summary;
        }

        let senders = match self.find_senders(&company, &collections).await {
            Ok(senders) => senders,
            Err(e) => {
                error!(
                    "Unable to read senders of company: {}. Skipping it. Error: {:?}",
                    company.id, e
                );
                summary.companies_failed += 1;
                return summary;
            }
        };

        for collection in &collections {
            summary.envelopes_scanned += 1;
            if !collection.accepts_reminders() {
                continue;
            }
            let sender = match senders.get(&collection.owner_id) {
                Some(sender) => sender,
                None => {
                    warn!(
                        "Sender: {} of document collection: {} was not found in company: {}",
                        collection.owner_id, collection.id, company.id
                    );
                    summary.envelopes_skipped_by_policy += 1;
                    continue;
                }
            };

            let policy =
                resolve_effective_policy(&company.reminder_policy, &sender.reminder_preference);
            if !policy.enabled {
                info!(
                    "Reminders for document collection: {} are disabled by the {:?} policy",
                    collection.id, policy.source
                );
                summary.envelopes_skipped_by_policy += 1;
                continue;
            }

            for signer in select_candidate_signers(collection) {
                if !is_reminder_due(signer.time_last_sent, policy.frequency_days, now) {
                    summary.signers_not_due += 1;
                    continue;
                }
                match self.dispatch(&company, sender, collection, signer).await {
                    Ok(_) => summary.reminders_sent += 1,
                    Err(e) => {
                        error!(
                            "Unable to send sign reminder to signer: {} of document collection: {}. Error: {}",
                            signer.id, collection.id, e
                        );
                        summary.dispatch_failures += 1;
                    }
                }
            }
        }

        summary
    }

    /// Senders of the given collections that belong to the `Company`
    async fn find_senders(
        &self,
        company: &Company,
        collections: &[DocumentCollection],
    ) -> anyhow::Result<HashMap<ID, User>> {
        let mut sender_ids = collections
            .iter()
            .map(|c| c.owner_id.clone())
            .collect::<Vec<_>>();
        sender_ids.sort();
        sender_ids.dedup();

        Ok(self
            .users
            .find_many(&sender_ids)
            .await?
            .into_iter()
            .filter(|u| u.company_id == company.id)
            .map(|u| (u.id.clone(), u))
            .collect())
    }

    async fn dispatch(
        &self,
        company: &Company,
        sender: &User,
        collection: &DocumentCollection,
        signer: &Signer,
    ) -> Result<DispatchOutcome, DispatchError> {
        let request = DispatchRequest {
            collection,
            signer,
            sender,
            company,
            is_reminder: true,
            message_type: MessageType::SignReminder,
        };
        let timeout_secs = self.config.dispatch_timeout_secs;
        match tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.dispatcher.dispatch(request),
        )
        .await
        {
            Ok(res) => res,
            Err(_) => Err(DispatchError::Timeout(timeout_secs)),
        }
    }
}
