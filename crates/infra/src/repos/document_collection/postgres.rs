use super::IDocumentCollectionRepo;
use signflow_domain::{DocumentCollection, NotificationSettings, Signer, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use std::collections::HashMap;
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresDocumentCollectionRepo {
    pool: PgPool,
}

impl PostgresDocumentCollectionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentCollectionRaw {
    document_collection_uid: Uuid,
    company_uid: Uuid,
    owner_uid: Uuid,
    name: String,
    mode: String,
    status: String,
    notifications: Json<NotificationSettings>,
}

#[derive(Debug, FromRow)]
struct SignerRaw {
    signer_uid: Uuid,
    document_collection_uid: Uuid,
    name: String,
    email: Option<String>,
    phone_number: Option<String>,
    status: String,
    sending_method: Option<String>,
    signing_order: i32,
    time_last_sent: Option<i64>,
}

impl TryFrom<SignerRaw> for Signer {
    type Error = anyhow::Error;

    fn try_from(e: SignerRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.signer_uid.into(),
            name: e.name,
            email: e.email,
            phone_number: e.phone_number,
            status: e.status.parse()?,
            sending_method: e.sending_method.map(|m| m.parse()).transpose()?,
            signing_order: e.signing_order,
            time_last_sent: e.time_last_sent,
        })
    }
}

fn into_collection(
    raw: DocumentCollectionRaw,
    signers: Vec<SignerRaw>,
) -> anyhow::Result<DocumentCollection> {
    let signers = signers
        .into_iter()
        .map(|s| s.try_into())
        .collect::<anyhow::Result<Vec<Signer>>>()?;
    Ok(DocumentCollection {
        id: raw.document_collection_uid.into(),
        company_id: raw.company_uid.into(),
        owner_id: raw.owner_uid.into(),
        name: raw.name,
        mode: raw.mode.parse()?,
        status: raw.status.parse()?,
        notifications: raw.notifications.0,
        signers,
    })
}

impl PostgresDocumentCollectionRepo {
    async fn find_signers(&self, collection_ids: Vec<Uuid>) -> anyhow::Result<Vec<SignerRaw>> {
        let signers = sqlx::query_as::<_, SignerRaw>(
            r#"
            SELECT * FROM signers
            WHERE document_collection_uid = ANY($1)
            ORDER BY signing_order
            "#,
        )
        .bind(collection_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(signers)
    }
}

#[async_trait::async_trait]
impl IDocumentCollectionRepo for PostgresDocumentCollectionRepo {
    async fn insert(&self, collection: &DocumentCollection) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            INSERT INTO document_collections
            (document_collection_uid, company_uid, owner_uid, name, mode, status, notifications)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(collection.id.inner_ref())
        .bind(collection.company_id.inner_ref())
        .bind(collection.owner_id.inner_ref())
        .bind(&collection.name)
        .bind(collection.mode.as_str())
        .bind(collection.status.as_str())
        .bind(Json(&collection.notifications))
        .execute(&mut tx)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert document collection: {:?}. DB returned error: {:?}",
                collection, e
            );
            e
        })?;

        for signer in &collection.signers {
            sqlx::query(
                r#"
                INSERT INTO signers
                (signer_uid, document_collection_uid, name, email, phone_number, status, sending_method, signing_order, time_last_sent)
                VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(signer.id.inner_ref())
            .bind(collection.id.inner_ref())
            .bind(&signer.name)
            .bind(&signer.email)
            .bind(&signer.phone_number)
            .bind(signer.status.as_str())
            .bind(signer.sending_method.map(|m| m.as_str()))
            .bind(signer.signing_order)
            .bind(signer.time_last_sent)
            .execute(&mut tx)
            .await
            .map_err(|e| {
                error!(
                    "Unable to insert signer: {:?}. DB returned error: {:?}",
                    signer, e
                );
                e
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find(&self, collection_id: &ID) -> Option<DocumentCollection> {
        let raw = sqlx::query_as::<_, DocumentCollectionRaw>(
            r#"
            SELECT * FROM document_collections
            WHERE document_collection_uid = $1
            "#,
        )
        .bind(collection_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find document collection with id: {:?} failed. DB returned error: {:?}",
                collection_id, e
            );
            e
        })
        .ok()??;

        let signers = self
            .find_signers(vec![raw.document_collection_uid])
            .await
            .map_err(|e| {
                error!(
                    "Find signers of document collection: {:?} failed. Error: {:?}",
                    collection_id, e
                );
                e
            })
            .ok()?;
        into_collection(raw, signers).ok()
    }

    async fn find_reminder_eligible(
        &self,
        company_id: &ID,
    ) -> anyhow::Result<Vec<DocumentCollection>> {
        let collections_raw = sqlx::query_as::<_, DocumentCollectionRaw>(
            r#"
            SELECT * FROM document_collections AS d
            WHERE d.company_uid = $1
            AND d.status NOT IN ('signed', 'rejected', 'deleted')
            AND (d.notifications->>'shouldSendForSigning')::boolean = true
            "#,
        )
        .bind(company_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder eligible document collections for company: {:?} failed. DB returned error: {:?}",
                company_id, e
            );
            e
        })?;

        let ids = collections_raw
            .iter()
            .map(|c| c.document_collection_uid)
            .collect::<Vec<_>>();
        let mut signers_lookup: HashMap<Uuid, Vec<SignerRaw>> = HashMap::new();
        for signer in self.find_signers(ids).await? {
            signers_lookup
                .entry(signer.document_collection_uid)
                .or_default()
                .push(signer);
        }

        let collections = collections_raw
            .into_iter()
            .filter_map(|raw| {
                let collection_uid = raw.document_collection_uid;
                let signers = signers_lookup.remove(&collection_uid).unwrap_or_default();
                match into_collection(raw, signers) {
                    Ok(collection) => Some(collection),
                    Err(e) => {
                        error!(
                            "Skipping malformed document collection: {}. Error: {:?}",
                            collection_uid, e
                        );
                        None
                    }
                }
            })
            .collect();
        Ok(collections)
    }

    async fn set_signer_time_last_sent(
        &self,
        collection_id: &ID,
        signer_id: &ID,
        timestamp: i64,
    ) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE signers
            SET time_last_sent = GREATEST(COALESCE(time_last_sent, $3), $3)
            WHERE document_collection_uid = $1 AND signer_uid = $2
            "#,
        )
        .bind(collection_id.inner_ref())
        .bind(signer_id.inner_ref())
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to set time last sent for signer: {:?}. DB returned error: {:?}",
                signer_id, e
            );
            e
        })?;

        if res.rows_affected() == 0 {
            return Err(anyhow::anyhow!(
                "Signer: {} in document collection: {} was not found",
                signer_id,
                collection_id
            ));
        }
        Ok(())
    }
}
