use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use crate::domain::{
    entities::campaigns::CampaignEntity,
    entities::donations::DonationEntity,
    entities::payments::{InsertPaymentEntity, PaymentEntity},
    errors::CoreError,
    repositories::payments::PaymentRepository,
    value_objects::enums::{
        campaign_statuses::CampaignStatus,
        donation_statuses::DonationStatus,
        payment_statuses::{PaymentStatus, StatusChange},
    },
    value_objects::funding,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::{campaigns, donations, payments};

diesel::define_sql_function! {
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

pub struct PaymentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

/// Marks the donation completed and credits the campaign ledger. Runs
/// inside the caller's transaction; the campaign row lock makes the
/// credit-and-clamp serial per campaign.
fn settle_donation(
    conn: &mut PgConnection,
    donation: &DonationEntity,
    amount_minor: i32,
) -> Result<(), CoreError> {
    diesel::update(donations::table.find(donation.id))
        .set(donations::status.eq(DonationStatus::Completed.to_string()))
        .execute(conn)?;

    let campaign = campaigns::table
        .find(donation.campaign_id)
        .for_update()
        .select(CampaignEntity::as_select())
        .first::<CampaignEntity>(conn)
        .optional()?
        .ok_or(CoreError::CampaignNotFound(donation.campaign_id))?;

    let status: CampaignStatus = campaign.status.parse()?;
    if !status.accepts_funds() {
        return Err(CoreError::CampaignNotAcceptingFunds {
            campaign_id: campaign.id,
            status,
        });
    }

    let applied = funding::apply_funds(
        campaign.goal_minor,
        campaign.raised_minor,
        amount_minor,
        status,
    );

    diesel::update(campaigns::table.find(campaign.id))
        .set((
            campaigns::raised_minor.eq(applied.raised_minor),
            campaigns::status.eq(applied.status.to_string()),
            campaigns::updated_at.eq(Utc::now()),
        ))
        .execute(conn)?;

    Ok(())
}

fn is_unique_violation(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<diesel::result::Error>(),
        Some(diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _
        ))
    )
}

#[async_trait]
impl PaymentRepository for PaymentPostgres {
    async fn create(
        &self,
        donation_id: i64,
        amount_minor: i32,
        method: String,
        status: PaymentStatus,
    ) -> Result<PaymentEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = conn.transaction::<PaymentEntity, CoreError, _>(|conn| {
            let donation = donations::table
                .find(donation_id)
                .for_update()
                .select(DonationEntity::as_select())
                .first::<DonationEntity>(conn)
                .optional()?
                .ok_or(CoreError::DonationNotFound(donation_id))?;

            let existing: i64 = payments::table
                .filter(payments::donation_id.eq(donation_id))
                .count()
                .get_result(conn)?;
            if existing > 0 {
                return Err(CoreError::DuplicatePayment { donation_id });
            }

            if amount_minor != donation.amount_minor {
                return Err(CoreError::AmountMismatch {
                    payment_minor: amount_minor,
                    donation_minor: donation.amount_minor,
                });
            }

            let payment = diesel::insert_into(payments::table)
                .values(InsertPaymentEntity {
                    donation_id,
                    amount_minor,
                    method,
                    status: status.to_string(),
                    transaction_date: Utc::now(),
                })
                .returning(PaymentEntity::as_returning())
                .get_result(conn)?;

            if status == PaymentStatus::Successful {
                settle_donation(conn, &donation, amount_minor)?;
            }

            Ok(payment)
        });

        // The UNIQUE (donation_id) constraint is the arbiter for the
        // check-then-insert race; a losing writer gets the same conflict
        // error the in-transaction check produces.
        result.map_err(|err| match err {
            CoreError::Persistence(source) if is_unique_violation(&source) => {
                CoreError::DuplicatePayment { donation_id }
            }
            other => other,
        })
    }

    async fn find_by_id(&self, payment_id: i64) -> Result<PaymentEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        payments::table
            .find(payment_id)
            .select(PaymentEntity::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or(CoreError::PaymentNotFound(payment_id))
    }

    async fn find_by_donation(&self, donation_id: i64) -> Result<PaymentEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        payments::table
            .filter(payments::donation_id.eq(donation_id))
            .select(PaymentEntity::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| {
                CoreError::NotFound(format!("no payment found for donation {}", donation_id))
            })
    }

    async fn list_all(&self) -> Result<Vec<PaymentEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let payments = payments::table
            .order(payments::transaction_date.desc())
            .select(PaymentEntity::as_select())
            .load(&mut conn)?;

        Ok(payments)
    }

    async fn list_filtered(
        &self,
        status: Option<PaymentStatus>,
        method: Option<String>,
    ) -> Result<Vec<PaymentEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = payments::table
            .select(PaymentEntity::as_select())
            .into_boxed();
        if let Some(status) = status {
            query = query.filter(payments::status.eq(status.to_string()));
        }
        if let Some(method) = method {
            query = query.filter(lower(payments::method).eq(method.to_lowercase()));
        }

        let payments = query
            .order(payments::transaction_date.desc())
            .load(&mut conn)?;

        Ok(payments)
    }

    async fn update_status(
        &self,
        payment_id: i64,
        new_status: PaymentStatus,
    ) -> Result<PaymentEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<PaymentEntity, CoreError, _>(|conn| {
            let payment = payments::table
                .find(payment_id)
                .for_update()
                .select(PaymentEntity::as_select())
                .first::<PaymentEntity>(conn)
                .optional()?
                .ok_or(CoreError::PaymentNotFound(payment_id))?;

            let current: PaymentStatus = payment.status.parse()?;

            match PaymentStatus::plan_transition(current, new_status)? {
                StatusChange::Noop => Ok(payment),
                StatusChange::Plain => {
                    let updated = diesel::update(payments::table.find(payment_id))
                        .set(payments::status.eq(new_status.to_string()))
                        .returning(PaymentEntity::as_returning())
                        .get_result(conn)?;
                    Ok(updated)
                }
                StatusChange::Reconcile => {
                    let donation = donations::table
                        .find(payment.donation_id)
                        .for_update()
                        .select(DonationEntity::as_select())
                        .first::<DonationEntity>(conn)
                        .optional()?
                        .ok_or(CoreError::DonationNotFound(payment.donation_id))?;

                    let updated = diesel::update(payments::table.find(payment_id))
                        .set(payments::status.eq(new_status.to_string()))
                        .returning(PaymentEntity::as_returning())
                        .get_result(conn)?;

                    settle_donation(conn, &donation, payment.amount_minor)?;

                    Ok(updated)
                }
            }
        })
    }

    async fn update_method(
        &self,
        payment_id: i64,
        method: String,
    ) -> Result<PaymentEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<PaymentEntity, CoreError, _>(|conn| {
            let payment = payments::table
                .find(payment_id)
                .for_update()
                .select(PaymentEntity::as_select())
                .first::<PaymentEntity>(conn)
                .optional()?
                .ok_or(CoreError::PaymentNotFound(payment_id))?;

            let current: PaymentStatus = payment.status.parse()?;
            if current.is_terminal() {
                return Err(CoreError::CompletedPaymentImmutable);
            }

            let updated = diesel::update(payments::table.find(payment_id))
                .set(payments::method.eq(method))
                .returning(PaymentEntity::as_returning())
                .get_result(conn)?;

            Ok(updated)
        })
    }

    async fn delete(&self, payment_id: i64) -> Result<(), CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<(), CoreError, _>(|conn| {
            let payment = payments::table
                .find(payment_id)
                .for_update()
                .select(PaymentEntity::as_select())
                .first::<PaymentEntity>(conn)
                .optional()?
                .ok_or(CoreError::PaymentNotFound(payment_id))?;

            let current: PaymentStatus = payment.status.parse()?;
            if current.is_terminal() {
                return Err(CoreError::CompletedPaymentImmutable);
            }

            diesel::delete(payments::table.find(payment_id)).execute(conn)?;
            Ok(())
        })
    }
}
