//! Fluent accessors: one getter/setter per registered property name,
//! dispatched through a single name → value map.
//!
//! ```
//! use rreporter::fluent::{Fluent, FluentMethods, FluentValue};
//!
//! struct Options {
//!     methods: FluentMethods,
//! }
//!
//! impl Fluent for Options {
//!     fn fluent_methods(&self) -> &FluentMethods {
//!         &self.methods
//!     }
//!     fn fluent_methods_mut(&mut self) -> &mut FluentMethods {
//!         &mut self.methods
//!     }
//! }
//!
//! let mut opts = Options {
//!     methods: FluentMethods::new()
//!         .with("title", FluentValue::Null)
//!         .with("columns", FluentValue::List(vec![])),
//! };
//!
//! opts.set("title", "Daily")?.set("columns", "clicks")?;
//! assert_eq!(opts.get("title")?, FluentValue::from("Daily"));
//! assert_eq!(opts.get("columns")?, FluentValue::from(vec!["clicks"]));
//! # Ok::<(), rreporter::errors::AppError>(())
//! ```

mod value;

pub use value::FluentValue;

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use tracing::trace;

/// Registered property names and their current values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FluentMethods {
    values: BTreeMap<String, FluentValue>,
}

/// Outcome of [`FluentMethods::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Get(FluentValue),
    Set,
}

impl FluentMethods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with its initial value. Builder style.
    pub fn with(mut self, name: impl Into<String>, initial: impl Into<FluentValue>) -> Self {
        self.values.insert(name.into(), initial.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&FluentValue> {
        self.values.get(name)
    }

    /// Resolve a call to `name`.
    ///
    /// No argument reads the current value. Otherwise the first argument is
    /// stored (list slots coerce it to a list) and the rest are ignored.
    pub fn dispatch(&mut self, name: &str, args: Vec<FluentValue>) -> AppResult<Dispatch> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| AppError::UnknownMethod(name.to_string()))?;

        let Some(arg) = args.into_iter().next() else {
            return Ok(Dispatch::Get(slot.clone()));
        };

        *slot = if slot.is_list() {
            FluentValue::List(arg.into_list())
        } else {
            arg
        };
        trace!(method = name, value = ?slot, "fluent value set");

        Ok(Dispatch::Set)
    }
}

/// Result of [`Fluent::call`]: a read value, or the owner for chaining.
#[derive(Debug)]
pub enum Called<'a, T> {
    Value(FluentValue),
    Chain(&'a mut T),
}

impl<'a, T> Called<'a, T> {
    pub fn value(self) -> Option<FluentValue> {
        match self {
            Called::Value(v) => Some(v),
            Called::Chain(_) => None,
        }
    }

    pub fn chain(self) -> Option<&'a mut T> {
        match self {
            Called::Chain(owner) => Some(owner),
            Called::Value(_) => None,
        }
    }
}

/// Implemented by types that expose their [`FluentMethods`].
pub trait Fluent: Sized {
    fn fluent_methods(&self) -> &FluentMethods;
    fn fluent_methods_mut(&mut self) -> &mut FluentMethods;

    /// Dynamic entry point: getter with no args, setter with one.
    fn call(&mut self, method: &str, args: Vec<FluentValue>) -> AppResult<Called<'_, Self>> {
        match self.fluent_methods_mut().dispatch(method, args)? {
            Dispatch::Get(v) => Ok(Called::Value(v)),
            Dispatch::Set => Ok(Called::Chain(self)),
        }
    }

    fn get(&self, method: &str) -> AppResult<FluentValue> {
        self.fluent_methods()
            .get(method)
            .cloned()
            .ok_or_else(|| AppError::UnknownMethod(method.to_string()))
    }

    fn set(&mut self, method: &str, value: impl Into<FluentValue>) -> AppResult<&mut Self> {
        self.fluent_methods_mut()
            .dispatch(method, vec![value.into()])?;
        Ok(self)
    }
}
