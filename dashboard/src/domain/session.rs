//! Session controller owning the working set and filter state.
//!
//! A session lives for one dashboard run. Loads are ticketed: starting a load
//! hands out a [`LoadTicket`], and only the result carrying the most recent
//! ticket is applied. A load that is abandoned, or that finishes after a
//! newer one started, leaves the session untouched.

use staff_attributes::{Department, Rating};
use tracing::{debug, warn};

use super::ports::UserDirectoryError;
use super::{FilterState, UserRecord, filter_users};

/// Progress of the working-set load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A load is in flight; the working set is empty.
    Loading,
    /// The working set holds the last successful load.
    Ready,
    /// The last load failed; the working set is empty.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Session-scoped store for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    users: Vec<UserRecord>,
    filters: FilterState,
    state: LoadState,
    generation: u64,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl DashboardSession {
    /// Start a session in the loading state with the given filters.
    pub fn new(filters: FilterState) -> Self {
        Self {
            users: Vec::new(),
            filters,
            state: LoadState::Loading,
            generation: 0,
        }
    }

    /// Begin a load, invalidating any ticket handed out before.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.users.clear();
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Apply a load result if `ticket` is still current.
    ///
    /// Returns whether the result was applied.
    ///
    /// ```
    /// use dashboard::domain::{DashboardSession, LoadState};
    ///
    /// let mut session = DashboardSession::default();
    /// let stale = session.begin_load();
    /// let current = session.begin_load();
    ///
    /// assert!(!session.finish_load(stale, Ok(Vec::new())));
    /// assert_eq!(session.state(), &LoadState::Loading);
    /// assert!(session.finish_load(current, Ok(Vec::new())));
    /// assert_eq!(session.state(), &LoadState::Ready);
    /// ```
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<UserRecord>, UserDirectoryError>,
    ) -> bool {
        if ticket.0 != self.generation || self.state != LoadState::Loading {
            debug!(ticket = ticket.0, current = self.generation, "discarding stale load result");
            return false;
        }
        match result {
            Ok(users) => {
                self.users = users;
                self.state = LoadState::Ready;
            }
            Err(error) => {
                warn!(detail = error.message(), error = %error, "user load failed");
                self.users.clear();
                self.state = LoadState::Failed {
                    reason: error.to_string(),
                };
            }
        }
        true
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The full working set in load order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filters.set_query(query);
    }

    /// Toggle one department; returns whether it is now selected.
    pub fn toggle_department(&mut self, department: Department) -> bool {
        self.filters.toggle_department(department)
    }

    /// Toggle one rating; returns whether it is now selected.
    pub fn toggle_rating(&mut self, rating: Rating) -> bool {
        self.filters.toggle_rating(rating)
    }

    /// Reset all filters.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Records passing the current filters, in load order.
    pub fn visible(&self) -> Vec<&UserRecord> {
        let visible = filter_users(&self.users, &self.filters);
        debug!(
            visible = visible.len(),
            total = self.users.len(),
            "filters applied"
        );
        visible
    }

    /// Look up one record in the working set.
    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::test_support::{ann_and_bob, rating_of};

    #[fixture]
    fn ready() -> DashboardSession {
        let mut session = DashboardSession::default();
        let ticket = session.begin_load();
        assert!(session.finish_load(ticket, Ok(ann_and_bob())));
        session
    }

    #[test]
    fn new_sessions_start_loading_with_no_users() {
        let session = DashboardSession::default();
        assert_eq!(session.state(), &LoadState::Loading);
        assert!(session.users().is_empty());
        assert!(session.visible().is_empty());
    }

    #[rstest]
    fn successful_load_populates_the_working_set(ready: DashboardSession) {
        assert_eq!(ready.state(), &LoadState::Ready);
        assert_eq!(ready.users().len(), 2);
        assert_eq!(ready.visible().len(), 2);
    }

    #[test]
    fn failed_load_records_reason_and_leaves_set_empty() {
        let mut session = DashboardSession::default();
        let ticket = session.begin_load();
        let applied = session.finish_load(
            ticket,
            Err(UserDirectoryError::transport("connection refused")),
        );

        assert!(applied);
        assert_eq!(
            session.state(),
            &LoadState::Failed {
                reason: "user directory transport failed: connection refused".to_owned()
            }
        );
        assert!(session.users().is_empty());
    }

    #[test]
    fn reload_after_failure_can_succeed() {
        let mut session = DashboardSession::default();
        let first = session.begin_load();
        session.finish_load(first, Err(UserDirectoryError::timeout("30s elapsed")));

        let second = session.begin_load();
        assert_eq!(session.state(), &LoadState::Loading);
        assert!(session.finish_load(second, Ok(ann_and_bob())));
        assert_eq!(session.state(), &LoadState::Ready);
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut session = DashboardSession::default();
        let abandoned = session.begin_load();
        let current = session.begin_load();

        assert!(!session.finish_load(abandoned, Ok(ann_and_bob())));
        assert!(session.users().is_empty());
        assert_eq!(session.state(), &LoadState::Loading);

        assert!(session.finish_load(current, Ok(Vec::new())));
        assert_eq!(session.state(), &LoadState::Ready);
    }

    #[rstest]
    fn results_are_applied_only_once(mut ready: DashboardSession) {
        let ticket = LoadTicket(ready.generation);
        assert!(!ready.finish_load(ticket, Ok(Vec::new())));
        assert_eq!(ready.users().len(), 2);
    }

    #[rstest]
    fn filters_drive_the_visible_subset(mut ready: DashboardSession) {
        ready.toggle_rating(rating_of(5));
        let visible: Vec<u64> = ready.visible().iter().map(|user| user.id()).collect();
        assert_eq!(visible, vec![2]);

        ready.clear_filters();
        ready.set_search("an");
        let visible: Vec<u64> = ready.visible().iter().map(|user| user.id()).collect();
        assert_eq!(visible, vec![1]);
    }

    #[rstest]
    fn toggles_report_selection(mut ready: DashboardSession) {
        assert!(ready.toggle_department(Department::Hr));
        assert!(ready.filters().is_department_selected(Department::Hr));
        assert!(!ready.toggle_department(Department::Hr));
        assert!(ready.filters().is_empty());
    }

    #[rstest]
    fn find_looks_up_by_id(ready: DashboardSession) {
        assert_eq!(ready.find(2).map(UserRecord::first_name), Some("Bob"));
        assert!(ready.find(99).is_none());
    }

    #[test]
    fn initial_filters_survive_loading() {
        let mut filters = FilterState::new();
        filters.select_rating(rating_of(3));
        let mut session = DashboardSession::new(filters.clone());
        let ticket = session.begin_load();
        session.finish_load(ticket, Ok(ann_and_bob()));

        assert_eq!(session.filters(), &filters);
        let visible: Vec<u64> = session.visible().iter().map(|user| user.id()).collect();
        assert_eq!(visible, vec![1]);
    }
}
