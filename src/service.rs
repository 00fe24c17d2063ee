use crate::db::{SlotStore, StoreError};
use crate::error::AppError;
use crate::models::slot::{ReservationOutcome, Slot, SlotAvailability};

#[derive(Clone)]
pub struct ReservationService {
    store: SlotStore,
}

impl ReservationService {
    pub fn new(store: SlotStore) -> Self {
        Self { store }
    }

    pub async fn get_availability_view(&self) -> Result<Vec<SlotAvailability>, StoreError> {
        let slots = self.store.list_slots().await?;
        Ok(slots.into_iter().map(SlotAvailability::from).collect())
    }

    /// Claim one seat for a visitor. A full or unknown slot is a normal
    /// outcome, not an error; only blank fields and storage failures are.
    pub async fn submit_reservation(
        &self,
        visitor_name: &str,
        grade: &str,
        slot_name: &str,
    ) -> Result<ReservationOutcome, AppError> {
        for (field, value) in [("name", visitor_name), ("grade", grade), ("slot", slot_name)] {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field));
            }
        }

        if self.store.try_reserve(slot_name).await? {
            tracing::info!(slot = slot_name, grade, "Reservation confirmed");
            Ok(ReservationOutcome::Confirmed {
                visitor: visitor_name.to_string(),
                slot: slot_name.to_string(),
            })
        } else {
            tracing::info!(slot = slot_name, grade, "Reservation refused, slot full or unknown");
            Ok(ReservationOutcome::Full)
        }
    }

    pub async fn get_admin_view(&self) -> Result<Vec<Slot>, StoreError> {
        self.store.list_slots().await
    }

    pub async fn reset(&self) -> Result<(), StoreError> {
        let count = self.store.reset_all().await?;
        tracing::info!("Reset {} slots to capacity", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_store;
    use crate::models::slot::FULL_MESSAGE;

    async fn service_with(seeds: &[(&str, i64)]) -> (tempfile::TempDir, ReservationService) {
        let (dir, store) = test_store(seeds).await;
        (dir, ReservationService::new(store))
    }

    #[tokio::test]
    async fn test_availability_flags() {
        let (_dir, service) = service_with(&[("A", 1), ("B", 10)]).await;
        service.submit_reservation("Yui", "5th", "A").await.unwrap();
        for _ in 0..5 {
            service.submit_reservation("Yui", "5th", "B").await.unwrap();
        }

        let view = service.get_availability_view().await.unwrap();
        assert_eq!(view.len(), 2);
        assert!(view[0].disabled);
        assert!(!view[0].recommend);
        assert!(!view[1].disabled);
        assert!(!view[1].recommend);
        assert_eq!(view[1].remaining, 5);
        assert_eq!(view[1].capacity, 10);
    }

    #[tokio::test]
    async fn test_submit_confirms_and_decrements() {
        let (_dir, service) = service_with(&[("A", 2)]).await;

        let outcome = service.submit_reservation("Yui", "5th", "A").await.unwrap();
        assert_eq!(
            outcome,
            ReservationOutcome::Confirmed {
                visitor: "Yui".into(),
                slot: "A".into()
            }
        );
        assert_eq!(service.get_admin_view().await.unwrap()[0].remaining, 1);
    }

    #[tokio::test]
    async fn test_submit_to_full_slot_changes_nothing() {
        let (_dir, service) = service_with(&[("A", 1)]).await;
        service.submit_reservation("Aoi", "4th", "A").await.unwrap();

        let outcome = service.submit_reservation("Yui", "5th", "A").await.unwrap();
        assert_eq!(outcome, ReservationOutcome::Full);
        assert_eq!(outcome.message(), FULL_MESSAGE);
        assert_eq!(service.get_admin_view().await.unwrap()[0].remaining, 0);
    }

    #[tokio::test]
    async fn test_submit_to_unknown_slot_reads_as_full() {
        let (_dir, service) = service_with(&[("A", 2)]).await;

        let outcome = service
            .submit_reservation("Yui", "5th", "Unknown")
            .await
            .unwrap();
        assert_eq!(outcome.message(), FULL_MESSAGE);
        assert_eq!(service.get_admin_view().await.unwrap()[0].remaining, 2);
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected_before_the_store() {
        let (_dir, service) = service_with(&[("A", 2)]).await;

        let err = service.submit_reservation("  ", "5th", "A").await.unwrap_err();
        assert!(matches!(err, AppError::MissingField("name")));
        let err = service.submit_reservation("Yui", "", "A").await.unwrap_err();
        assert!(matches!(err, AppError::MissingField("grade")));
        let err = service.submit_reservation("Yui", "5th", "").await.unwrap_err();
        assert!(matches!(err, AppError::MissingField("slot")));

        assert_eq!(service.get_admin_view().await.unwrap()[0].remaining, 2);
    }

    #[tokio::test]
    async fn test_reset_restores_capacities() {
        let (_dir, service) = service_with(&[("A", 2), ("B", 3)]).await;
        for _ in 0..2 {
            service.submit_reservation("Yui", "5th", "A").await.unwrap();
            service.submit_reservation("Yui", "5th", "B").await.unwrap();
        }

        service.reset().await.unwrap();

        let slots = service.get_admin_view().await.unwrap();
        assert_eq!(
            slots,
            vec![
                Slot { name: "A".into(), remaining: 2, capacity: 2 },
                Slot { name: "B".into(), remaining: 3, capacity: 3 },
            ]
        );
    }
}
