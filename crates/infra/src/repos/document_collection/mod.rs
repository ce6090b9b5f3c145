mod inmemory;
mod postgres;

pub use inmemory::InMemoryDocumentCollectionRepo;
pub use postgres::PostgresDocumentCollectionRepo;
use signflow_domain::{DocumentCollection, ID};

#[async_trait::async_trait]
pub trait IDocumentCollectionRepo: Send + Sync {
    /// Inserts the collection together with its `Signer`s
    async fn insert(&self, collection: &DocumentCollection) -> anyhow::Result<()>;
    async fn find(&self, collection_id: &ID) -> Option<DocumentCollection>;
    /// The in flight collections of a `Company` that still want signing notifications
    async fn find_reminder_eligible(&self, company_id: &ID)
        -> anyhow::Result<Vec<DocumentCollection>>;
    /// Sets the time of the last notification sent to a `Signer`.
    /// An older timestamp than the stored one is ignored.
    async fn set_signer_time_last_sent(
        &self,
        collection_id: &ID,
        signer_id: &ID,
        timestamp: i64,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::tests::create_contexts;
    use crate::SignflowContext;
    use signflow_domain::{
        Company, DocumentCollection, DocumentCollectionStatus, Entity, SendingMethod, Signer,
        SignerStatus, SigningMode, User, ID,
    };

    async fn insert_company_and_user(ctx: &SignflowContext) -> (Company, User) {
        let company = Company::new("Documents".into());
        ctx.repos.companies.insert(&company).await.unwrap();
        let user = User::new(company.id.clone());
        ctx.repos.users.insert(&user).await.unwrap();
        (company, user)
    }

    fn collection(company: &Company, user: &User, signers: usize) -> DocumentCollection {
        let mut c =
            DocumentCollection::new(company.id.clone(), user.id.clone(), SigningMode::GroupSign);
        c.name = "Contract".into();
        for i in 0..signers {
            let mut signer = Signer::new(format!("Signer {}", i), Some(SendingMethod::Email), i as i32);
            signer.email = Some(format!("signer{}@example.com", i));
            signer.status = SignerStatus::Sent;
            c.signers.push(signer);
        }
        c
    }

    #[tokio::test]
    async fn create_and_find_with_signers() {
        for ctx in create_contexts().await {
            let (company, user) = insert_company_and_user(&ctx).await;
            let mut c = collection(&company, &user, 2);
            c.signers[1].sending_method = None;
            c.signers[1].time_last_sent = Some(1000);
            assert!(ctx.repos.document_collections.insert(&c).await.is_ok());

            let res = ctx.repos.document_collections.find(&c.id).await.unwrap();
            assert!(res.eq(&c));
            assert_eq!(res.signers.len(), 2);
            assert_eq!(res.signers[0].signing_order, 0);
            assert_eq!(res.signers[1].sending_method, None);
            assert_eq!(res.signers[1].time_last_sent, Some(1000));
        }
    }

    #[tokio::test]
    async fn finds_only_reminder_eligible_collections_of_company() {
        for ctx in create_contexts().await {
            let (company, user) = insert_company_and_user(&ctx).await;
            let (other_company, other_user) = insert_company_and_user(&ctx).await;

            let eligible = collection(&company, &user, 1);
            let mut completed = collection(&company, &user, 1);
            completed.status = DocumentCollectionStatus::Signed;
            let mut muted = collection(&company, &user, 1);
            muted.notifications.should_send_for_signing = false;
            let other = collection(&other_company, &other_user, 1);
            for c in &[&eligible, &completed, &muted, &other] {
                ctx.repos.document_collections.insert(c).await.unwrap();
            }

            let res = ctx
                .repos
                .document_collections
                .find_reminder_eligible(&company.id)
                .await
                .unwrap();
            assert_eq!(res.len(), 1);
            assert!(res[0].eq(&eligible));
            assert_eq!(res[0].signers.len(), 1);
        }
    }

    #[tokio::test]
    async fn time_last_sent_never_moves_backwards() {
        for ctx in create_contexts().await {
            let (company, user) = insert_company_and_user(&ctx).await;
            let c = collection(&company, &user, 2);
            ctx.repos.document_collections.insert(&c).await.unwrap();
            let signer_id = c.signers[0].id.clone();

            let repo = &ctx.repos.document_collections;
            assert!(repo.set_signer_time_last_sent(&c.id, &signer_id, 500).await.is_ok());
            assert!(repo.set_signer_time_last_sent(&c.id, &signer_id, 200).await.is_ok());

            let res = repo.find(&c.id).await.unwrap();
            assert_eq!(res.find_signer(&signer_id).unwrap().time_last_sent, Some(500));
            // Sibling is untouched
            assert_eq!(res.signers[1].time_last_sent, None);

            assert!(repo
                .set_signer_time_last_sent(&c.id, &ID::default(), 500)
                .await
                .is_err());
        }
    }
}
