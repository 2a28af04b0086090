use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    errors::CoreError,
    repositories::payments::PaymentRepository,
    value_objects::enums::payment_statuses::PaymentStatus,
    value_objects::payments::{
        InsertPaymentModel, PaymentListFilter, PaymentModel, UpdatePaymentMethodModel,
        UpdatePaymentStatusModel,
    },
};

pub struct PaymentUseCase<T>
where
    T: PaymentRepository + Send + Sync,
{
    payment_repository: Arc<T>,
}

impl<T> PaymentUseCase<T>
where
    T: PaymentRepository + Send + Sync,
{
    pub fn new(payment_repository: Arc<T>) -> Self {
        Self { payment_repository }
    }

    pub async fn create(
        &self,
        insert_payment_model: InsertPaymentModel,
    ) -> Result<PaymentModel, CoreError> {
        if insert_payment_model.amount_minor <= 0 {
            return Err(CoreError::InvalidAmount);
        }
        if insert_payment_model.method.trim().is_empty() {
            return Err(CoreError::EmptyPaymentMethod);
        }
        let status: PaymentStatus = insert_payment_model.status.parse()?;

        let payment = self
            .payment_repository
            .create(
                insert_payment_model.donation_id,
                insert_payment_model.amount_minor,
                insert_payment_model.method,
                status,
            )
            .await
            .map_err(|err| {
                warn!(
                    donation_id = insert_payment_model.donation_id,
                    error = %err,
                    "payments: creation refused"
                );
                err
            })?;

        info!(
            payment_id = payment.id,
            donation_id = payment.donation_id,
            status = %status,
            "payments: payment recorded"
        );

        PaymentModel::try_from(payment)
    }

    pub async fn view(&self, payment_id: i64) -> Result<PaymentModel, CoreError> {
        let payment = self.payment_repository.find_by_id(payment_id).await?;
        PaymentModel::try_from(payment)
    }

    pub async fn view_by_donation(&self, donation_id: i64) -> Result<PaymentModel, CoreError> {
        let payment = self.payment_repository.find_by_donation(donation_id).await?;
        PaymentModel::try_from(payment)
    }

    pub async fn list(&self, filter: PaymentListFilter) -> Result<Vec<PaymentModel>, CoreError> {
        let status = filter
            .status
            .map(|raw| raw.parse::<PaymentStatus>())
            .transpose()?;

        let payments = if status.is_none() && filter.method.is_none() {
            self.payment_repository.list_all().await?
        } else {
            self.payment_repository
                .list_filtered(status, filter.method)
                .await?
        };

        payments.into_iter().map(PaymentModel::try_from).collect()
    }

    pub async fn update_status(
        &self,
        payment_id: i64,
        update_payment_status_model: UpdatePaymentStatusModel,
    ) -> Result<PaymentModel, CoreError> {
        let new_status: PaymentStatus = update_payment_status_model.status.parse()?;

        let payment = self
            .payment_repository
            .update_status(payment_id, new_status)
            .await
            .map_err(|err| {
                warn!(
                    payment_id,
                    new_status = %new_status,
                    error = %err,
                    "payments: status change refused"
                );
                err
            })?;

        info!(payment_id, status = %new_status, "payments: status updated");
        PaymentModel::try_from(payment)
    }

    pub async fn update_method(
        &self,
        payment_id: i64,
        update_payment_method_model: UpdatePaymentMethodModel,
    ) -> Result<PaymentModel, CoreError> {
        if update_payment_method_model.method.trim().is_empty() {
            return Err(CoreError::EmptyPaymentMethod);
        }

        let payment = self
            .payment_repository
            .update_method(payment_id, update_payment_method_model.method)
            .await?;

        PaymentModel::try_from(payment)
    }

    pub async fn delete(&self, payment_id: i64) -> Result<(), CoreError> {
        self.payment_repository
            .delete(payment_id)
            .await
            .map_err(|err| {
                warn!(payment_id, error = %err, "payments: delete refused");
                err
            })?;

        info!(payment_id, "payments: payment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::payments::PaymentEntity;
    use crate::domain::repositories::payments::MockPaymentRepository;
    use chrono::Utc;

    fn payment(id: i64, donation_id: i64, amount_minor: i32, status: PaymentStatus) -> PaymentEntity {
        PaymentEntity {
            id,
            donation_id,
            amount_minor,
            method: "card".to_string(),
            status: status.to_string(),
            transaction_date: Utc::now(),
        }
    }

    fn insert_model(status: &str) -> InsertPaymentModel {
        InsertPaymentModel {
            donation_id: 1,
            amount_minor: 400_00,
            method: "card".to_string(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn create_validates_input_before_storage() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_create().never();
        let usecase = PaymentUseCase::new(Arc::new(mock));

        let mut model = insert_model("successful");
        model.amount_minor = -1;
        assert!(matches!(
            usecase.create(model).await,
            Err(CoreError::InvalidAmount)
        ));

        let mut model = insert_model("successful");
        model.method = "  ".to_string();
        assert!(matches!(
            usecase.create(model).await,
            Err(CoreError::EmptyPaymentMethod)
        ));

        let model = insert_model("approved");
        assert!(matches!(
            usecase.create(model).await,
            Err(CoreError::InvalidEnumValue { .. })
        ));
    }

    #[tokio::test]
    async fn create_passes_parsed_status_through() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_create()
            .withf(|donation_id, amount, method, status| {
                *donation_id == 1
                    && *amount == 400_00
                    && method == "card"
                    && *status == PaymentStatus::Successful
            })
            .returning(|donation_id, amount, _, status| {
                Ok(payment(9, donation_id, amount, status))
            });

        let usecase = PaymentUseCase::new(Arc::new(mock));
        let created = usecase.create(insert_model("successful")).await.unwrap();
        assert_eq!(created.status, PaymentStatus::Successful);
    }

    #[tokio::test]
    async fn create_propagates_duplicate_payment_conflict() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_create()
            .returning(|donation_id, _, _, _| Err(CoreError::DuplicatePayment { donation_id }));

        let usecase = PaymentUseCase::new(Arc::new(mock));
        let err = usecase.create(insert_model("successful")).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicatePayment { donation_id: 1 }
        ));
    }

    #[tokio::test]
    async fn update_status_propagates_immutability_conflict() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_update_status()
            .withf(|_, status| *status == PaymentStatus::Pending)
            .returning(|_, _| Err(CoreError::CompletedPaymentImmutable));

        let usecase = PaymentUseCase::new(Arc::new(mock));
        let err = usecase
            .update_status(
                9,
                UpdatePaymentStatusModel {
                    status: "pending".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::CompletedPaymentImmutable));
    }

    #[tokio::test]
    async fn update_status_reapplying_successful_returns_payment_unchanged() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_update_status()
            .withf(|_, status| *status == PaymentStatus::Successful)
            .returning(|payment_id, _| {
                Ok(payment(payment_id, 1, 400_00, PaymentStatus::Successful))
            });

        let usecase = PaymentUseCase::new(Arc::new(mock));
        let updated = usecase
            .update_status(
                9,
                UpdatePaymentStatusModel {
                    status: "successful".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, PaymentStatus::Successful);
    }

    #[tokio::test]
    async fn update_method_rejects_blank_method() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_update_method().never();

        let usecase = PaymentUseCase::new(Arc::new(mock));
        let err = usecase
            .update_method(
                9,
                UpdatePaymentMethodModel {
                    method: "".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::EmptyPaymentMethod));
    }

    #[tokio::test]
    async fn list_without_filter_uses_full_listing() {
        let mut mock = MockPaymentRepository::new();
        mock.expect_list_all()
            .returning(|| Ok(vec![payment(1, 1, 100_00, PaymentStatus::Pending)]));
        mock.expect_list_filtered().never();

        let usecase = PaymentUseCase::new(Arc::new(mock));
        let payments = usecase.list(PaymentListFilter::default()).await.unwrap();
        assert_eq!(payments.len(), 1);
    }
}
