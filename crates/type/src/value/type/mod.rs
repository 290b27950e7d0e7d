// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// Column and scalar types understood by the host
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8 | Type::Float8)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	/// Approximate in-memory width of one value, used for row-store budgeting.
	pub fn size(&self) -> usize {
		match self {
			Type::Bool => 1,
			Type::Int4 => 4,
			Type::Int8 | Type::Float8 => 8,
			Type::Utf8 => 16,
			Type::Undefined => 0,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("BOOL"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}
