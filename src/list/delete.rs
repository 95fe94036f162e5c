//! Delete confirmation.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    list::{ListRequest, ProductList},
    products::ProductId,
    service::{ProductsService, ProductsServiceError},
};

/// Where the list is in the delete confirmation sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    /// No modal shown
    #[default]
    Idle,

    /// Modal shown, waiting for the user to confirm this product
    Confirming(ProductId),

    /// Confirmed; the DELETE request for this product is in flight
    Deleting(ProductId),
}

/// Why a delete did not go through.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// No delete was confirmed, or the confirmed one already finished.
    #[error("no product is awaiting deletion")]
    NotPending,

    /// Shown to the user as a blocking alert.
    #[error("Failed to delete product.")]
    Failed(#[source] ProductsServiceError),
}

impl ProductList {
    /// Current step of the delete sequence.
    pub fn delete_state(&self) -> DeleteState {
        self.delete
    }

    /// Whether the confirmation modal is shown. It stays open while deleting.
    pub fn show_delete_modal(&self) -> bool {
        !matches!(self.delete, DeleteState::Idle)
    }

    /// Whether a confirmed delete is waiting on the server.
    pub fn is_deleting(&self) -> bool {
        matches!(self.delete, DeleteState::Deleting(_))
    }

    /// Product awaiting confirmation or being deleted.
    pub fn pending_delete(&self) -> Option<ProductId> {
        match self.delete {
            DeleteState::Idle => None,
            DeleteState::Confirming(id) | DeleteState::Deleting(id) => Some(id),
        }
    }

    /// Opens the confirmation modal for `id`. Ignored while a delete is in
    /// flight.
    pub fn request_delete(&mut self, id: ProductId) {
        if let DeleteState::Deleting(current) = self.delete {
            debug!(product_id = %id, deleting = %current, "delete already in flight");
            return;
        }

        self.delete = DeleteState::Confirming(id);
    }

    /// Closes the modal and forgets the target; nothing is sent. A delete
    /// already in flight is not affected.
    pub fn cancel_delete(&mut self) {
        if matches!(self.delete, DeleteState::Confirming(_)) {
            self.delete = DeleteState::Idle;
        }
    }

    /// Marks the confirmed product as being deleted and returns its id.
    ///
    /// Returns `None` unless the modal is waiting for confirmation, so a
    /// second confirm while the first is in flight sends nothing.
    pub fn begin_delete(&mut self) -> Option<ProductId> {
        let DeleteState::Confirming(id) = self.delete else {
            return None;
        };

        self.delete = DeleteState::Deleting(id);

        Some(id)
    }

    /// Records the server's answer to the delete started by
    /// [`Self::begin_delete`] and closes the modal.
    ///
    /// Returns the list reload to issue; the caller also refreshes the total
    /// stock value.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::NotPending`] when no delete is in flight, leaving
    /// the state untouched, and [`DeleteError::Failed`] when the server
    /// refused. No reload is due in either case.
    pub fn finish_delete(
        &mut self,
        result: Result<(), ProductsServiceError>,
    ) -> Result<ListRequest, DeleteError> {
        let DeleteState::Deleting(id) = self.delete else {
            debug!(state = ?self.delete, "delete answer with nothing in flight");

            return Err(DeleteError::NotPending);
        };

        self.delete = DeleteState::Idle;

        match result {
            Ok(()) => {
                info!(product_id = %id, "deleted product");

                Ok(self.refresh())
            }
            Err(error) => {
                error!(product_id = %id, %error, "failed to delete product");

                Err(DeleteError::Failed(error))
            }
        }
    }

    /// Deletes the pending product, then reloads the list and the total stock
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::NotPending`] when no deletion awaits
    /// confirmation and [`DeleteError::Failed`] when the server refused. The
    /// modal is closed and the list is left as it was on failure.
    pub async fn confirm_delete(
        &mut self,
        service: &dyn ProductsService,
    ) -> Result<ProductId, DeleteError> {
        let id = self.begin_delete().ok_or(DeleteError::NotPending)?;

        let result = service.delete_product(id).await;
        let reload = self.finish_delete(result)?;

        self.run(service, reload).await;
        self.load_total_stock_value(service).await;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use testresult::TestResult;

    use super::*;
    use crate::products::ProductPage;

    #[test]
    fn request_then_cancel_returns_to_idle() {
        let mut list = ProductList::new();

        list.request_delete(ProductId::new(4));

        assert!(list.show_delete_modal(), "modal shown while confirming");
        assert_eq!(list.pending_delete(), Some(ProductId::new(4)));

        list.cancel_delete();

        assert!(!list.show_delete_modal(), "modal hidden after cancel");
        assert_eq!(list.delete_state(), DeleteState::Idle);
    }

    #[test]
    fn successful_delete_closes_modal_and_reloads() -> TestResult {
        let mut list = ProductList::new();

        list.request_delete(ProductId::new(4));
        list.begin_delete();

        let reload = list.finish_delete(Ok(()))?;

        assert!(!list.show_delete_modal(), "modal closed");
        assert!(list.is_loading(), "reload in flight");
        assert_eq!(reload.query(), &list.query());

        Ok(())
    }

    #[test]
    fn failed_delete_closes_modal_without_reload() {
        let mut list = ProductList::new();

        list.request_delete(ProductId::new(4));
        list.begin_delete();

        let result = list.finish_delete(Err(ProductsServiceError::Status(StatusCode::CONFLICT)));

        assert!(
            matches!(result, Err(DeleteError::Failed(_))),
            "expected a failure, got {result:?}"
        );
        assert!(!list.show_delete_modal(), "modal closed");
        assert!(!list.is_loading(), "no reload issued");
    }

    #[test]
    fn second_confirm_sends_nothing_while_deleting() {
        let mut list = ProductList::new();

        list.request_delete(ProductId::new(4));

        assert_eq!(list.begin_delete(), Some(ProductId::new(4)));
        assert_eq!(list.begin_delete(), None, "already in flight");
        assert!(list.is_deleting(), "first delete still pending");
        assert!(list.show_delete_modal(), "modal stays open while deleting");

        list.cancel_delete();
        list.request_delete(ProductId::new(5));

        assert_eq!(list.delete_state(), DeleteState::Deleting(ProductId::new(4)));
    }

    #[test]
    fn late_answers_without_a_delete_in_flight_are_refused() -> TestResult {
        let mut list = ProductList::new();

        list.request_delete(ProductId::new(4));
        list.begin_delete();
        let reload = list.finish_delete(Ok(()))?;
        list.apply(reload.generation(), Ok(ProductPage::default()));

        let late_failure = list.finish_delete(Err(ProductsServiceError::NotFound));

        assert!(
            matches!(late_failure, Err(DeleteError::NotPending)),
            "no alert for a late failure, got {late_failure:?}"
        );

        let late_success = list.finish_delete(Ok(()));

        assert!(
            matches!(late_success, Err(DeleteError::NotPending)),
            "no reload for a late success, got {late_success:?}"
        );
        assert!(!list.is_loading(), "no reload issued");
        assert_eq!(list.delete_state(), DeleteState::Idle);

        Ok(())
    }

    #[test]
    fn finish_without_begin_keeps_the_modal_open() {
        let mut list = ProductList::new();

        list.request_delete(ProductId::new(4));

        let result = list.finish_delete(Ok(()));

        assert!(
            matches!(result, Err(DeleteError::NotPending)),
            "not confirmed yet, got {result:?}"
        );
        assert_eq!(list.delete_state(), DeleteState::Confirming(ProductId::new(4)));
    }

    #[test]
    fn alert_text_is_user_facing() {
        let error = DeleteError::Failed(ProductsServiceError::NotFound);

        assert_eq!(error.to_string(), "Failed to delete product.");
    }
}
