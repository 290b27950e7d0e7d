// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use srfcompat_type::{ColumnDef, RowShape, Type};

pub fn columns(defs: &[(&str, Type)]) -> Vec<ColumnDef> {
	defs.iter().map(|(name, ty)| ColumnDef::new(*name, *ty)).collect()
}

/// `TABLE(a int, b text)`
pub fn pair_columns() -> Vec<ColumnDef> {
	columns(&[("a", Type::Int4), ("b", Type::Utf8)])
}

pub fn pair_shape() -> RowShape {
	RowShape::new(pair_columns())
}

/// Versions on either side of the native initializer boundary.
pub const LEGACY_VERSIONS: &[&str] = &["11.22", "12.19", "13.15", "14.12"];
pub const MODERN_VERSIONS: &[&str] = &["15.0", "15.7", "16.3", "17.0"];
