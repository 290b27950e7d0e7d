// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row-store for materialized set-returning function results.
//!
//! The store is a plain in-memory buffer with a single read position. It
//! accounts its approximate size against the working-memory budget it was
//! created with, but never spills: draining and bounding the store is left to
//! whoever consumes the call's result.

use srfcompat_type::{Result, Row, RowShape, Value, diagnostic::store, return_error};
use tracing::warn;

#[derive(Debug)]
pub struct RowStore {
	rows: Vec<Row>,
	random_access: bool,
	inter_xact: bool,
	max_bytes: usize,
	used_bytes: usize,
	read_pos: usize,
	eof_reached: bool,
	over_budget: bool,
}

impl RowStore {
	/// Creates an empty heap-backed store limited to `work_mem_kb` KiB.
	pub fn begin_heap(random_access: bool, inter_xact: bool, work_mem_kb: usize) -> Self {
		Self {
			rows: Vec::new(),
			random_access,
			inter_xact,
			max_bytes: work_mem_kb.saturating_mul(1024),
			used_bytes: 0,
			read_pos: 0,
			eof_reached: false,
			over_budget: false,
		}
	}

	/// Appends a row without checking it; callers outside the crate go through [`RowStore::put_values`].
	pub(crate) fn put_row(&mut self, row: Row) {
		self.used_bytes = self.used_bytes.saturating_add(row.size());
		self.rows.push(row);

		if !self.over_budget && self.used_bytes > self.max_bytes {
			self.over_budget = true;
			warn!(
				used_bytes = self.used_bytes,
				max_bytes = self.max_bytes,
				rows = self.rows.len(),
				"row store exceeded its working memory budget"
			);
		}
	}

	/// Appends `values` as one row after checking them against `shape`.
	pub fn put_values(&mut self, shape: &RowShape, values: Vec<Value>) -> Result<()> {
		shape.validate(&values)?;
		self.put_row(Row(values));
		Ok(())
	}

	/// Returns the row at the read position and advances it.
	pub fn next_row(&mut self) -> Option<&Row> {
		match self.rows.get(self.read_pos) {
			Some(row) => {
				self.read_pos += 1;
				Some(row)
			}
			None => {
				self.eof_reached = true;
				None
			}
		}
	}

	/// Reads backward from the last row returned.
	///
	/// Once a forward read has hit the end, the first backward read returns
	/// the final row. Otherwise it returns the row before the last one read,
	/// so the last row returned is never handed out twice in a row.
	pub fn prev_row(&mut self) -> Result<Option<&Row>> {
		if !self.random_access {
			return_error!(store::backward_scan_not_supported());
		}

		if self.eof_reached {
			self.eof_reached = false;
			return Ok(self.read_pos.checked_sub(1).and_then(|idx| self.rows.get(idx)));
		}

		if self.read_pos == 0 {
			return Ok(None);
		}
		self.read_pos -= 1;
		if self.read_pos == 0 {
			return Ok(None);
		}
		Ok(self.rows.get(self.read_pos - 1))
	}

	pub fn rescan(&mut self) {
		self.read_pos = 0;
		self.eof_reached = false;
	}

	/// Takes every stored row, leaving the store empty.
	pub fn drain(&mut self) -> Vec<Row> {
		self.used_bytes = 0;
		self.read_pos = 0;
		self.eof_reached = false;
		std::mem::take(&mut self.rows)
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn random_access(&self) -> bool {
		self.random_access
	}

	pub fn inter_xact(&self) -> bool {
		self.inter_xact
	}

	pub fn max_bytes(&self) -> usize {
		self.max_bytes
	}

	pub fn used_bytes(&self) -> usize {
		self.used_bytes
	}

	/// True once the store has held more than its budget at any point.
	pub fn over_budget(&self) -> bool {
		self.over_budget
	}
}
