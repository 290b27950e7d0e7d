// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, Index},
};

use serde::{Deserialize, Serialize};

use crate::{GetType, Result, Type, Value, diagnostic::store, return_error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	pub ty: Type,
}

impl ColumnDef {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}

	/// Column typed after the Rust type `T`, e.g. `ColumnDef::of::<i64>("value")`.
	pub fn of<T: GetType>(name: impl Into<String>) -> Self {
		Self::new(name, T::get_type())
	}
}

/// Column layout of a composite result row.
///
/// `typmod` is assigned when the shape is registered ("blessed") with the
/// host's record-type cache; anonymous shapes leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowShape {
	pub columns: Vec<ColumnDef>,
	pub typmod: Option<u32>,
}

impl RowShape {
	pub fn new(columns: Vec<ColumnDef>) -> Self {
		Self {
			columns,
			typmod: None,
		}
	}

	pub fn column(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.columns.push(ColumnDef::new(name, ty));
		self
	}

	pub fn blessed(&self) -> bool {
		self.typmod.is_some()
	}

	/// Equal column names and types, regardless of blessing.
	pub fn same_layout(&self, other: &RowShape) -> bool {
		self.columns == other.columns
	}

	/// Checks that `values` fits this shape. `Undefined` fits every column.
	pub fn validate(&self, values: &[Value]) -> Result<()> {
		if values.len() != self.columns.len() {
			return_error!(store::row_arity_mismatch(self.columns.len(), values.len()));
		}

		for (column, value) in self.columns.iter().zip(values) {
			let actual = value.get_type();
			if actual != Type::Undefined && actual != column.ty {
				return_error!(store::value_type_mismatch(&column.name, column.ty, actual));
			}
		}

		Ok(())
	}
}

impl Deref for RowShape {
	type Target = [ColumnDef];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for RowShape {
	type Output = ColumnDef;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Display for RowShape {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("{")?;
		for (idx, column) in self.columns.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}: {}", column.name, column.ty)?;
		}
		f.write_str("}")
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Vec<Value>);

impl Row {
	pub fn size(&self) -> usize {
		self.0.iter().map(Value::size).sum()
	}
}

impl Deref for Row {
	type Target = [Value];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Row(values)
	}
}
