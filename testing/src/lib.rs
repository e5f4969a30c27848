//! # todo-sync Testing
//!
//! Testing utilities and helpers for the todo-sync architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use todo_sync_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(AppState::default())
//!     .when_action(TodoAction::SelectUser { user_id: Some(UserId::new(5)) })
//!     .then_state(|state| {
//!         assert_eq!(state.filter.selected_user, Some(UserId::new(5)));
//!     })
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;
use todo_sync_core::environment::Clock;

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_sync_testing::mocks::FixedClock;
    /// use todo_sync_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }
}

/// Create a clock suitable for deterministic tests
///
/// Returns a [`mocks::FixedClock`] pinned to the Unix epoch, boxed as the
/// `Arc<dyn Clock>` shape environments expect.
#[must_use]
pub fn test_clock() -> Arc<dyn Clock> {
    Arc::new(mocks::FixedClock::new(DateTime::<Utc>::UNIX_EPOCH))
}

#[cfg(test)]
mod tests {
    use super::mocks::FixedClock;
    use super::test_clock;
    use chrono::{DateTime, Utc};
    use todo_sync_core::environment::Clock;

    #[test]
    fn fixed_clock_is_deterministic() {
        let clock = FixedClock::new(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_clock_is_pinned_to_epoch() {
        let clock = test_clock();
        assert_eq!(clock.now(), DateTime::<Utc>::UNIX_EPOCH);
    }
}
