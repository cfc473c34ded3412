//! Canonical ordered list of active filters for one view session.

use super::error::FilterError;
use super::filter::Filter;
use super::model::{ElementType, Operator};

/// Owns the active filters. Ids always equal positions (`0..N-1`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterManager {
    filters: Vec<Filter>,
}

impl FilterManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Appends a filter and returns its id.
    ///
    /// A filter equal on (element type, field, operator, value) to an active
    /// one is discarded with `AlreadyAdded`.
    pub fn add_filter(
        &mut self,
        element_type: ElementType,
        field_name: &str,
        op_type: Operator,
        value: &str,
    ) -> Result<usize, FilterError> {
        let candidate = Filter::new(element_type, field_name, op_type, value)?;
        self.push(candidate)
    }

    /// Appends an already-built filter; its id is overwritten.
    pub fn push(&mut self, mut candidate: Filter) -> Result<usize, FilterError> {
        if self.filters.iter().any(|f| f.same_predicate(&candidate)) {
            return Err(FilterError::AlreadyAdded(
                "The filter is already set! It will be ignored!".to_string(),
            ));
        }
        let id = self.filters.len();
        candidate.id = id;
        self.filters.push(candidate);
        Ok(id)
    }

    pub fn remove_filter(&mut self, id: usize) -> Result<Filter, FilterError> {
        if id >= self.filters.len() {
            return Err(out_of_bounds(id));
        }
        let removed = self.filters.remove(id);
        self.reindex();
        Ok(removed)
    }

    /// Removes every id in `ids`.
    ///
    /// Ids are processed from the highest down so earlier removals never
    /// shift a later target. The batch is all-or-nothing: on error the
    /// active set is left untouched.
    pub fn remove_filters(&mut self, ids: &[usize]) -> Result<Vec<Filter>, FilterError> {
        let mut ordered = ids.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));

        let mut working = self.filters.clone();
        let mut removed = Vec::with_capacity(ordered.len());
        for id in ordered {
            let mut matches = working
                .iter()
                .enumerate()
                .filter(|(_, f)| f.id == id)
                .map(|(pos, _)| pos);
            let position = match (matches.next(), matches.next()) {
                (None, _) => return Err(out_of_bounds(id)),
                (Some(_), Some(_)) => {
                    return Err(FilterError::Conflict(format!(
                        "The index {id} set has found multiple filters in the array!"
                    )))
                }
                (Some(position), None) => position,
            };
            removed.push(working.remove(position));
        }

        self.filters = working;
        self.reindex();
        Ok(removed)
    }

    /// Independent copy of the active filters in display order.
    pub fn get_filters(&self) -> Vec<Filter> {
        self.filters.clone()
    }

    pub fn get_filter(&self, id: usize) -> Result<&Filter, FilterError> {
        self.filters.get(id).ok_or_else(|| out_of_bounds(id))
    }

    /// Filters that apply to library (software) entries.
    pub fn library_filters(&self) -> Vec<Filter> {
        self.filters
            .iter()
            .filter(|f| f.element_type == ElementType::Library)
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    fn reindex(&mut self) {
        for (position, filter) in self.filters.iter_mut().enumerate() {
            filter.id = position;
        }
    }
}

fn out_of_bounds(id: usize) -> FilterError {
    FilterError::NotFound(format!("The index {id} set is not in the array !"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(values: &[&str]) -> FilterManager {
        let mut manager = FilterManager::new();
        for value in values {
            manager
                .add_filter(ElementType::Library, "name", Operator::Includes, value)
                .unwrap();
        }
        manager
    }

    fn assert_contiguous(manager: &FilterManager) {
        for (position, filter) in manager.get_filters().iter().enumerate() {
            assert_eq!(filter.id, position);
        }
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut manager = FilterManager::new();
        let first = manager
            .add_filter(ElementType::File, "name", Operator::Lt, "3")
            .unwrap();
        let second = manager
            .add_filter(ElementType::File, "size", Operator::Gt, "10")
            .unwrap();
        assert_eq!((first, second), (0, 1));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn duplicate_add_is_rejected_and_list_unchanged() {
        let mut manager = FilterManager::new();
        manager
            .add_filter(ElementType::File, "name", Operator::Lt, "3")
            .unwrap();
        let before = manager.get_filters();

        let err = manager
            .add_filter(ElementType::File, "name", Operator::Lt, "3")
            .unwrap_err();

        assert!(matches!(err, FilterError::AlreadyAdded(_)));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get_filters(), before);
    }

    #[test]
    fn same_field_with_other_value_is_not_a_duplicate() {
        let mut manager = FilterManager::new();
        manager
            .add_filter(ElementType::File, "name", Operator::Lt, "3")
            .unwrap();
        manager
            .add_filter(ElementType::File, "name", Operator::Lt, "4")
            .unwrap();
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_first_reindexes_survivor() {
        let mut manager = manager_with(&["a", "b"]);
        let removed = manager.remove_filter(0).unwrap();
        assert_eq!(removed.value, "a");
        let remaining = manager.get_filters();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].value, "b");
        assert_eq!(remaining[0].id, 0);
    }

    #[test]
    fn remove_out_of_bounds_is_not_found() {
        let mut manager = manager_with(&["a"]);
        let err = manager.remove_filter(1).unwrap_err();
        assert!(matches!(err, FilterError::NotFound(_)));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn remove_filters_in_any_order_keeps_ids_contiguous() {
        let mut manager = manager_with(&["a", "b", "c", "d", "e"]);
        let removed = manager.remove_filters(&[1, 3]).unwrap();
        assert_eq!(removed.len(), 2);
        let values: Vec<_> = manager.get_filters().into_iter().map(|f| f.value).collect();
        assert_eq!(values, vec!["a", "c", "e"]);
        assert_contiguous(&manager);
    }

    #[test]
    fn remove_filters_with_missing_id_leaves_set_untouched() {
        let mut manager = manager_with(&["a", "b"]);
        let err = manager.remove_filters(&[0, 7]).unwrap_err();
        assert!(matches!(err, FilterError::NotFound(_)));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_filters_repeated_id_is_not_found_after_first_removal() {
        let mut manager = manager_with(&["a", "b"]);
        let err = manager.remove_filters(&[1, 1]).unwrap_err();
        assert!(matches!(err, FilterError::NotFound(_)));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_filters_detects_corrupted_ids() {
        let mut manager = manager_with(&["a", "b"]);
        manager.filters[1].id = 0;
        let err = manager.remove_filters(&[0]).unwrap_err();
        assert!(matches!(err, FilterError::Conflict(_)));
    }

    #[test]
    fn get_filters_is_an_independent_copy() {
        let manager = manager_with(&["a"]);
        let mut copy = manager.get_filters();
        copy[0].value = "changed".to_string();
        copy.clear();
        assert_eq!(manager.get_filter(0).unwrap().value, "a");
    }

    #[test]
    fn get_filter_out_of_bounds() {
        let manager = FilterManager::new();
        assert!(matches!(
            manager.get_filter(0).unwrap_err(),
            FilterError::NotFound(_)
        ));
    }

    #[test]
    fn library_filters_skips_file_filters() {
        let mut manager = FilterManager::new();
        manager
            .add_filter(ElementType::File, "path", Operator::StartsWith, "/usr")
            .unwrap();
        manager
            .add_filter(ElementType::Library, "version", Operator::Eq, "1.0")
            .unwrap();
        let library = manager.library_filters();
        assert_eq!(library.len(), 1);
        assert_eq!(library[0].field_name, "version");
    }

    #[test]
    fn ids_stay_contiguous_over_mixed_operations() {
        let mut manager = FilterManager::new();
        let values = ["a", "b", "c", "d", "e", "f", "g"];
        for (step, value) in values.iter().enumerate() {
            manager
                .add_filter(ElementType::Library, "name", Operator::Eq, value)
                .unwrap();
            if step % 3 == 2 {
                manager.remove_filter(step % manager.len()).unwrap();
                assert_contiguous(&manager);
            }
        }
        manager.remove_filters(&[0, manager.len() - 1]).unwrap();
        assert_contiguous(&manager);
    }
}
