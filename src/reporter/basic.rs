// src/reporter/basic.rs

use crate::fluent::{Fluent, FluentMethods, FluentValue};
use crate::reporter::{RangeState, Reporter};

/// Smallest concrete reporter: the shared range state plus a few fluent
/// report options (`title`, `columns`, `filters`).
#[derive(Debug, Clone, PartialEq)]
pub struct BasicReporter {
    range: RangeState,
    options: FluentMethods,
}

impl BasicReporter {
    pub fn new() -> Self {
        Self {
            range: RangeState::new(),
            options: FluentMethods::new()
                .with("title", FluentValue::Null)
                .with("columns", FluentValue::List(Vec::new()))
                .with("filters", FluentValue::List(Vec::new())),
        }
    }
}

impl Default for BasicReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for BasicReporter {
    fn range(&self) -> &RangeState {
        &self.range
    }

    fn range_mut(&mut self) -> &mut RangeState {
        &mut self.range
    }
}

impl Fluent for BasicReporter {
    fn fluent_methods(&self) -> &FluentMethods {
        &self.options
    }

    fn fluent_methods_mut(&mut self) -> &mut FluentMethods {
        &mut self.options
    }
}
