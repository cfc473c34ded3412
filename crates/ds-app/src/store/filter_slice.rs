use tracing::{debug, warn};

use ds_core::filter::{
    validate_element_type, validate_operator, Filter, FilterError, FilterManager,
};
use ds_core::notification::Notification;

/// Result of a filter mutation that did not hit a defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    Applied,
    /// The operation was skipped; the notification is also kept in
    /// [`FilterSlice::filter_error`].
    Rejected(Notification),
}

/// Filter table state: active filters, selected rows, last filter error.
///
/// Validation, duplicate and not-found failures become a [`Notification`];
/// `Conflict` and `NotImplemented` are returned as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSlice {
    manager: FilterManager,
    selected_filter_ids: Vec<usize>,
    filter_error: Notification,
}

impl FilterSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager(&self) -> &FilterManager {
        &self.manager
    }

    pub fn filters(&self) -> Vec<Filter> {
        self.manager.get_filters()
    }

    pub fn selected_filter_ids(&self) -> &[usize] {
        &self.selected_filter_ids
    }

    pub fn filter_error(&self) -> &Notification {
        &self.filter_error
    }

    /// Adds a filter from raw form input.
    pub fn add(
        &mut self,
        element_type: &str,
        field_name: &str,
        op_type: &str,
        value: &str,
    ) -> Result<FilterOutcome, FilterError> {
        let result = validate_element_type(element_type)
            .and_then(|element_type| Ok((element_type, validate_operator(op_type)?)))
            .and_then(|(element_type, op_type)| {
                self.manager
                    .add_filter(element_type, field_name, op_type, value)
            });

        if let Ok(id) = &result {
            debug!(id, field_name, op_type, "Filter added");
        }
        self.settle(result.map(|_| ()))
    }

    pub fn remove_filters(&mut self, ids: &[usize]) -> Result<FilterOutcome, FilterError> {
        let result = self.manager.remove_filters(ids);
        if let Ok(removed) = &result {
            debug!(removed = removed.len(), "Filters removed");
            self.selected_filter_ids.clear();
        }
        self.settle(result.map(|_| ()))
    }

    /// Replaces the selected rows, dropping ids with no filter behind them.
    pub fn update_selected_filters(&mut self, ids: &[usize]) {
        let len = self.manager.len();
        let mut selected: Vec<usize> = ids.iter().copied().filter(|id| *id < len).collect();
        selected.sort_unstable();
        selected.dedup();
        self.selected_filter_ids = selected;
    }

    /// Empties the notification once it was shown.
    pub fn clear_error(&mut self) {
        self.filter_error = Notification::none();
    }

    fn settle(&mut self, result: Result<(), FilterError>) -> Result<FilterOutcome, FilterError> {
        match result {
            Ok(()) => {
                self.filter_error = Notification::none();
                Ok(FilterOutcome::Applied)
            }
            Err(err) if err.is_defect() => Err(err),
            Err(err) => {
                warn!(error = %err, "Filter operation skipped");
                let notification = err.to_notification();
                self.filter_error = notification.clone();
                Ok(FilterOutcome::Rejected(notification))
            }
        }
    }
}
