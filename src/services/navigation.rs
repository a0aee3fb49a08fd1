//! Month navigation
//!
//! Moves the month in view backward or forward by one calendar month and
//! asks the data layer to load it.

use tracing::debug;

use super::data_layer::{DataLayer, LoadOptions};
use crate::error::BudgetsResult;
use crate::models::Month;

/// Drives month changes against a data layer
pub struct MonthNavigation<'a, D: DataLayer + ?Sized> {
    data: &'a mut D,
}

impl<'a, D: DataLayer + ?Sized> MonthNavigation<'a, D> {
    pub fn new(data: &'a mut D) -> Self {
        Self { data }
    }

    /// The month currently in view
    pub fn current(&self) -> Month {
        self.data.month_in_view()
    }

    /// Load a given month
    pub fn change_month_in_view(&mut self, month: Month) -> BudgetsResult<Month> {
        debug!(%month, "changing month in view");
        self.data.load_data(LoadOptions::month(month))?;
        Ok(self.data.month_in_view())
    }

    /// Load the previous month
    pub fn go_back(&mut self) -> BudgetsResult<Month> {
        let previous = self.current().prev();
        self.change_month_in_view(previous)
    }

    /// Load the next month
    pub fn go_forward(&mut self) -> BudgetsResult<Month> {
        let next = self.current().next();
        self.change_month_in_view(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubDataLayer;

    #[test]
    fn test_go_back_across_year() {
        let mut data = StubDataLayer::new(Month::parse("2024-01").unwrap());
        let month = MonthNavigation::new(&mut data).go_back().unwrap();
        assert_eq!(month.to_string(), "2023-12");
        assert_eq!(data.calls.load_data, 1);
    }

    #[test]
    fn test_go_forward_across_year() {
        let mut data = StubDataLayer::new(Month::parse("2023-12").unwrap());
        let mut nav = MonthNavigation::new(&mut data);
        assert_eq!(nav.go_forward().unwrap().to_string(), "2024-01");
        assert_eq!(nav.go_forward().unwrap().to_string(), "2024-02");
    }

    #[test]
    fn test_failed_load_keeps_month() {
        let mut data = StubDataLayer::new(Month::parse("2024-05").unwrap());
        data.fail_all = true;
        assert!(MonthNavigation::new(&mut data).go_back().is_err());
        assert_eq!(data.month_in_view().to_string(), "2024-05");
    }
}
