use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::payments::PaymentEntity;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;

/// The single choke point where money becomes real. Implementations must
/// commit the payment write together with the donation completion and the
/// campaign credit, or not at all.
#[automock]
#[async_trait]
pub trait PaymentRepository {
    async fn create(
        &self,
        donation_id: i64,
        amount_minor: i32,
        method: String,
        status: PaymentStatus,
    ) -> Result<PaymentEntity, CoreError>;
    async fn find_by_id(&self, payment_id: i64) -> Result<PaymentEntity, CoreError>;
    async fn find_by_donation(&self, donation_id: i64) -> Result<PaymentEntity, CoreError>;
    async fn list_all(&self) -> Result<Vec<PaymentEntity>, CoreError>;
    async fn list_filtered(
        &self,
        status: Option<PaymentStatus>,
        method: Option<String>,
    ) -> Result<Vec<PaymentEntity>, CoreError>;
    async fn update_status(
        &self,
        payment_id: i64,
        new_status: PaymentStatus,
    ) -> Result<PaymentEntity, CoreError>;
    async fn update_method(
        &self,
        payment_id: i64,
        method: String,
    ) -> Result<PaymentEntity, CoreError>;
    async fn delete(&self, payment_id: i64) -> Result<(), CoreError>;
}
