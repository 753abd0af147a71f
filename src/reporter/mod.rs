//! Base behaviour shared by every reporter: the `since` / `till` window,
//! the normalizing timeframe and the maximum allowed span in days.
//!
//! Concrete reporters own a [`RangeState`] and implement [`Reporter`] to get
//! the accessors and the range validation for free.

pub mod basic;

pub use basic::BasicReporter;

use crate::errors::{AppError, AppResult, StateField};
use crate::models::timeframe::Timeframe;
use crate::utils::date;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Raw reporter state. Timestamps are kept exactly as they were set;
/// normalization only happens on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeState {
    pub since: Option<NaiveDateTime>,
    pub till: Option<NaiveDateTime>,
    pub timeframe: Option<Timeframe>,
    /// Max size of the date range in days.
    pub date_range_limit: Option<i64>,
}

impl RangeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the range limit can be checked.
    pub fn is_complete(&self) -> bool {
        self.date_range_limit.is_some() && self.since.is_some() && self.till.is_some()
    }
}

pub trait Reporter: Sized {
    fn range(&self) -> &RangeState;
    fn range_mut(&mut self) -> &mut RangeState;

    /// Unlike the time fields, an unset limit simply reads as `None`.
    fn date_range_limit(&self) -> Option<i64> {
        self.range().date_range_limit
    }

    fn set_date_range_limit(&mut self, limit: i64) -> &mut Self {
        debug!(limit, "date range limit set");
        self.range_mut().date_range_limit = Some(limit);
        self
    }

    /// Start of the range, normalized to the current timeframe.
    fn since(&self) -> AppResult<NaiveDateTime> {
        let since = self
            .range()
            .since
            .ok_or(AppError::MissingState(StateField::Since))?;

        Ok(match self.timeframe()? {
            Timeframe::Hour => date::start_of_hour(since),
            Timeframe::Day => date::start_of_day(since),
            Timeframe::Blank => since,
        })
    }

    fn set_since(&mut self, since: NaiveDateTime) -> &mut Self {
        debug!(%since, "range start set");
        self.range_mut().since = Some(since);
        self
    }

    /// End of the range, pushed to the end of the current timeframe unit.
    fn till(&self) -> AppResult<NaiveDateTime> {
        let till = self
            .range()
            .till
            .ok_or(AppError::MissingState(StateField::Till))?;

        Ok(match self.timeframe()? {
            Timeframe::Hour => date::end_of_hour(till),
            Timeframe::Day => date::end_of_day(till),
            Timeframe::Blank => till,
        })
    }

    fn set_till(&mut self, till: NaiveDateTime) -> &mut Self {
        debug!(%till, "range end set");
        self.range_mut().till = Some(till);
        self
    }

    fn timeframe(&self) -> AppResult<Timeframe> {
        self.range()
            .timeframe
            .ok_or(AppError::MissingState(StateField::Timeframe))
    }

    fn set_timeframe(&mut self, timeframe: Timeframe) -> &mut Self {
        debug!(%timeframe, "timeframe set");
        self.range_mut().timeframe = Some(timeframe);
        self
    }

    /// Same as [`Reporter::set_timeframe`] for a textual value (`blank`, `day`, `hour`).
    fn set_timeframe_str(&mut self, timeframe: &str) -> AppResult<&mut Self> {
        let tf = timeframe.parse::<Timeframe>()?;
        Ok(self.set_timeframe(tf))
    }

    /// Validated and normalized `(since, till)` pair.
    fn date_range(&self) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
        self.validate_date_range()?;

        Ok((self.since()?, self.till()?))
    }

    /// Checks the span against the limit. Skipped unless limit, since and
    /// till are all set.
    fn validate_date_range(&self) -> AppResult<()> {
        let state = self.range();
        let (Some(limit), Some(_), Some(_)) = (state.date_range_limit, state.since, state.till)
        else {
            return Ok(());
        };

        let span = date::diff_in_days(self.since()?, self.till()?);
        debug!(span, limit, "validating date range");

        if span > limit {
            warn!(span, limit, "date range exceeds limit");
            return Err(AppError::DateRangeExceeded(limit));
        }

        Ok(())
    }
}
