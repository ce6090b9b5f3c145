use super::{IReminderPassRepo, RETAINED_REMINDER_PASSES};
use signflow_domain::{ReminderPass, ReminderPassSummary};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::error;

pub struct PostgresReminderPassRepo {
    pool: PgPool,
}

impl PostgresReminderPassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderPassRaw {
    reminder_pass_uid: Uuid,
    started_at: i64,
    finished_at: i64,
    summary: Json<ReminderPassSummary>,
}

impl From<ReminderPassRaw> for ReminderPass {
    fn from(e: ReminderPassRaw) -> Self {
        Self {
            id: e.reminder_pass_uid.into(),
            started_at: e.started_at,
            finished_at: e.finished_at,
            summary: e.summary.0,
        }
    }
}

#[async_trait::async_trait]
impl IReminderPassRepo for PostgresReminderPassRepo {
    async fn insert(&self, pass: &ReminderPass) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_passes(reminder_pass_uid, started_at, finished_at, summary)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(pass.id.inner_ref())
        .bind(pass.started_at)
        .bind(pass.finished_at)
        .bind(Json(&pass.summary))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder pass: {:?}. DB returned error: {:?}",
                pass, e
            );
            e
        })?;

        // The pass is stored at this point, failing to prune is only logged
        if let Err(e) = sqlx::query(
            r#"
            DELETE FROM reminder_passes
            WHERE reminder_pass_uid NOT IN (
                SELECT reminder_pass_uid FROM reminder_passes
                ORDER BY finished_at DESC
                LIMIT $1
            )
            "#,
        )
        .bind(RETAINED_REMINDER_PASSES as i64)
        .execute(&self.pool)
        .await
        {
            error!("Unable to prune old reminder passes. DB returned error: {:?}", e);
        }
        Ok(())
    }

    async fn find_latest(&self) -> Option<ReminderPass> {
        let res: Option<ReminderPassRaw> = sqlx::query_as::<_, ReminderPassRaw>(
            r#"
            SELECT * FROM reminder_passes
            ORDER BY finished_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find latest reminder pass failed. DB returned error: {:?}", e);
            e
        })
        .ok()?;
        res.map(|pass| pass.into())
    }
}
