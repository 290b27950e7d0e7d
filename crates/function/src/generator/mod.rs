// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use srfcompat_type::{Result, Value, diagnostic::function, return_error};

use crate::{
	call::{CallContext, ReturnType},
	materialize::{MaterializeFlags, MaterializeInitializer},
};

mod key_value;
mod series;

pub use key_value::KeyValueSet;
pub use series::GenerateSeries;

pub struct GeneratorContext<'a> {
	pub call: &'a mut CallContext,
	pub initializer: &'a dyn MaterializeInitializer,
}

impl<'a> GeneratorContext<'a> {
	pub fn new(call: &'a mut CallContext, initializer: &'a dyn MaterializeInitializer) -> Self {
		Self {
			call,
			initializer,
		}
	}

	/// Switches the call to materialize mode, see [`MaterializeInitializer::initialize`].
	pub fn materialize(&mut self, flags: MaterializeFlags) -> Result<()> {
		self.initializer.initialize(self.call, flags)
	}

	/// Appends one row to the materialized result.
	pub fn emit(&mut self, values: Vec<Value>) -> Result<()> {
		let stored = match self.call.result_info.as_mut() {
			Some(info) => info.put_values(values)?,
			None => false,
		};
		if !stored {
			return_error!(function::missing_materialized_result(&self.call.function));
		}
		Ok(())
	}

	pub fn arg(&self, index: usize) -> Option<&Value> {
		self.call.arg(index)
	}
}

/// A function producing a set of rows.
pub trait GeneratorFunction: Send + Sync {
	fn name(&self) -> &str;

	fn return_type(&self) -> ReturnType;

	fn generate(&self, ctx: GeneratorContext<'_>) -> Result<()>;
}

#[derive(Default)]
pub struct FunctionRegistry {
	functions: HashMap<String, Arc<dyn GeneratorFunction>>,
}

impl FunctionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn GeneratorFunction>> {
		self.functions.get(name).cloned()
	}

	pub fn register<F: GeneratorFunction + 'static>(&mut self, function: F) {
		self.functions.insert(function.name().to_string(), Arc::new(function));
	}

	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}
