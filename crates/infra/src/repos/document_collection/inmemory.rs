use super::IDocumentCollectionRepo;
use crate::repos::shared::inmemory_repo::*;
use signflow_domain::{DocumentCollection, ID};

pub struct InMemoryDocumentCollectionRepo {
    collections: std::sync::Mutex<Vec<DocumentCollection>>,
}

impl InMemoryDocumentCollectionRepo {
    pub fn new() -> Self {
        Self {
            collections: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IDocumentCollectionRepo for InMemoryDocumentCollectionRepo {
    async fn insert(&self, collection: &DocumentCollection) -> anyhow::Result<()> {
        insert(collection, &self.collections);
        Ok(())
    }

    async fn find(&self, collection_id: &ID) -> Option<DocumentCollection> {
        find(collection_id, &self.collections)
    }

    async fn find_reminder_eligible(
        &self,
        company_id: &ID,
    ) -> anyhow::Result<Vec<DocumentCollection>> {
        Ok(find_by(&self.collections, |c| {
            &c.company_id == company_id && c.accepts_reminders()
        }))
    }

    async fn set_signer_time_last_sent(
        &self,
        collection_id: &ID,
        signer_id: &ID,
        timestamp: i64,
    ) -> anyhow::Result<()> {
        let updated = update_many(
            &self.collections,
            |c| &c.id == collection_id && c.find_signer(signer_id).is_some(),
            |c| {
                if let Some(signer) = c.find_signer_mut(signer_id) {
                    signer.mark_sent(timestamp);
                }
            },
        );
        if updated == 0 {
            return Err(anyhow::anyhow!(
                "Signer: {} in document collection: {} was not found",
                signer_id,
                collection_id
            ));
        }
        Ok(())
    }
}
