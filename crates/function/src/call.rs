// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::BitOr,
};

use srfcompat_type::{ColumnDef, Result, RowShape, Type, Value};

use crate::store::RowStore;

/// Result type a function was declared with.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnType {
	/// returns int, returns text, ...
	Scalar(Type),
	/// returns void
	Void,
	/// returns table(a int, b text), or OUT columns
	Table(Vec<ColumnDef>),
	/// returns setof some_composite_type
	Named(String),
	/// returns setof record, the shape comes from the caller
	Record,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnMode {
	#[default]
	ValuePerCall,
	Materialize,
}

impl Display for ReturnMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ReturnMode::ValuePerCall => f.write_str("VALUE_PER_CALL"),
			ReturnMode::Materialize => f.write_str("MATERIALIZE"),
		}
	}
}

/// Result modes the caller is able to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedModes(u32);

impl AllowedModes {
	pub const VALUE_PER_CALL: AllowedModes = AllowedModes(0x01);
	pub const MATERIALIZE: AllowedModes = AllowedModes(0x02);
	pub const MATERIALIZE_RANDOM: AllowedModes = AllowedModes(0x04);
	pub const MATERIALIZE_PREFERRED: AllowedModes = AllowedModes(0x08);

	pub const fn empty() -> Self {
		AllowedModes(0)
	}

	pub const fn bits(&self) -> u32 {
		self.0
	}

	pub const fn contains(&self, other: AllowedModes) -> bool {
		self.0 & other.0 == other.0
	}
}

impl Default for AllowedModes {
	fn default() -> Self {
		AllowedModes::VALUE_PER_CALL | AllowedModes::MATERIALIZE
	}
}

impl BitOr for AllowedModes {
	type Output = AllowedModes;

	fn bitor(self, rhs: Self) -> Self::Output {
		AllowedModes(self.0 | rhs.0)
	}
}

/// Result set handshake between the caller and a set-returning function.
///
/// The caller fills in `allowed_modes` and optionally `expected_shape`; the
/// function answers through `return_mode`, `set_result` and `set_shape`.
#[derive(Debug, Default)]
pub struct ReturnSetInfo {
	pub allowed_modes: AllowedModes,
	pub expected_shape: Option<RowShape>,
	pub return_mode: ReturnMode,
	pub set_result: Option<RowStore>,
	pub set_shape: Option<RowShape>,
}

impl ReturnSetInfo {
	pub fn new(allowed_modes: AllowedModes) -> Self {
		Self {
			allowed_modes,
			..Default::default()
		}
	}

	pub fn with_expected_shape(mut self, shape: RowShape) -> Self {
		self.expected_shape = Some(shape);
		self
	}

	/// True once a materialized result has been attached.
	pub fn is_materialized(&self) -> bool {
		self.return_mode == ReturnMode::Materialize && self.set_result.is_some()
	}

	/// Appends one row to the attached store, checked against `set_shape`.
	///
	/// Returns `false` when nothing has been materialized yet.
	pub fn put_values(&mut self, values: Vec<Value>) -> Result<bool> {
		match (&mut self.set_result, &self.set_shape) {
			(Some(store), Some(shape)) => {
				store.put_values(shape, values)?;
				Ok(true)
			}
			_ => Ok(false),
		}
	}
}

/// One in-flight function invocation.
#[derive(Debug)]
pub struct CallContext {
	pub function: String,
	pub args: Vec<Value>,
	pub return_type: ReturnType,
	pub result_info: Option<ReturnSetInfo>,
}

impl CallContext {
	pub fn new(function: impl Into<String>, return_type: ReturnType) -> Self {
		Self {
			function: function.into(),
			args: Vec::new(),
			return_type,
			result_info: None,
		}
	}

	pub fn with_args(mut self, args: Vec<Value>) -> Self {
		self.args = args;
		self
	}

	pub fn with_result_info(mut self, result_info: ReturnSetInfo) -> Self {
		self.result_info = Some(result_info);
		self
	}

	pub fn arg(&self, index: usize) -> Option<&Value> {
		self.args.get(index)
	}
}
