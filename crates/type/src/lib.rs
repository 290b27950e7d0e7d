// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod shape;
pub mod value;

pub use error::{Error, Result, diagnostic};
pub use shape::{ColumnDef, Row, RowShape};
pub use value::{
	Value,
	r#type::{GetType, Type},
};
