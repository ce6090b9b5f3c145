use super::IUserRepo;
use signflow_domain::{ReminderPreference, User, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::error;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    company_uid: Uuid,
    name: String,
    email: String,
    reminder_preference: Json<ReminderPreference>,
}

impl From<UserRaw> for User {
    fn from(e: UserRaw) -> Self {
        Self {
            id: e.user_uid.into(),
            company_id: e.company_uid.into(),
            name: e.name,
            email: e.email,
            reminder_preference: e.reminder_preference.0,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, company_uid, name, email, reminder_preference)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(user.company_id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(Json(&user.reminder_preference))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert user: {:?}. DB returned error: {:?}", user, e);
            e
        })?;
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2,
            email = $3,
            reminder_preference = $4
            WHERE user_uid = $1
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(Json(&user.reminder_preference))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to save user: {:?}. DB returned error: {:?}", user, e);
            e
        })?;
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let res: Option<UserRaw> = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find user with id: {:?} failed. DB returned error: {:?}",
                user_id, e
            );
            e
        })
        .ok()?;
        res.map(|user| user.into())
    }

    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>> {
        let ids = user_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let users_raw: Vec<UserRaw> = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find users with ids: {:?} failed. DB returned error: {:?}",
                user_ids, e
            );
            e
        })?;

        Ok(users_raw.into_iter().map(|user| user.into()).collect())
    }
}
