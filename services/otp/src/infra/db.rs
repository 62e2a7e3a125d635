use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use wof_otp_schema::otps;

use crate::domain::repository::OtpRepository;
use crate::domain::types::OtpRecord;
use crate::error::OtpServiceError;

/// sea-orm backed store; shares the connection pool with `AppState`.
#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OtpRepository for DbOtpRepository {
    async fn replace_for_email(&self, record: &OtpRecord) -> Result<(), OtpServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let record = record.clone();
                Box::pin(async move {
                    otps::Entity::delete_many()
                        .filter(otps::Column::Email.eq(record.email.as_str()))
                        .exec(txn)
                        .await?;
                    insert_otp(txn, &record).await
                })
            })
            .await
            .context("replace otp for email")?;
        Ok(())
    }

    async fn find_active(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, OtpServiceError> {
        let model = otps::Entity::find()
            .filter(otps::Column::Email.eq(email))
            .filter(otps::Column::Code.eq(code))
            .filter(otps::Column::Used.eq(false))
            .filter(otps::Column::ExpiresAt.gt(now))
            .one(self.db.as_ref())
            .await
            .context("find active otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn consume(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, OtpServiceError> {
        let result = otps::Entity::update_many()
            .col_expr(otps::Column::Used, Expr::value(true))
            .filter(otps::Column::Id.eq(id))
            .filter(otps::Column::Used.eq(false))
            .filter(otps::Column::ExpiresAt.gt(now))
            .exec(self.db.as_ref())
            .await
            .context("consume otp")?;
        Ok(result.rows_affected == 1)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, OtpServiceError> {
        let result = otps::Entity::delete_many()
            .filter(otps::Column::ExpiresAt.lt(now))
            .exec(self.db.as_ref())
            .await
            .context("delete expired otps")?;
        Ok(result.rows_affected)
    }
}

async fn insert_otp(txn: &DatabaseTransaction, record: &OtpRecord) -> Result<(), sea_orm::DbErr> {
    otps::ActiveModel {
        id: Set(record.id),
        email: Set(record.email.clone()),
        code: Set(record.code.clone()),
        created_at: Set(record.created_at),
        expires_at: Set(record.expires_at),
        used: Set(record.used),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn otp_from_model(model: otps::Model) -> OtpRecord {
    OtpRecord {
        id: model.id,
        email: model.email,
        code: model.code,
        created_at: model.created_at,
        expires_at: model.expires_at,
        used: model.used,
    }
}
