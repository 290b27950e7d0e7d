// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use parking_lot::Mutex;
use srfcompat_type::RowShape;
use tracing::trace;

/// Registry of anonymous record shapes handed out to callers.
///
/// Blessing a shape gives it a `typmod` so rows built from it can be
/// interpreted later. Identical layouts share one `typmod`.
#[derive(Debug, Default)]
pub struct RecordCache {
	shapes: Mutex<Vec<RowShape>>,
}

impl RecordCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bless(&self, shape: &mut RowShape) {
		let mut shapes = self.shapes.lock();

		let typmod = match shapes.iter().position(|known| known.same_layout(shape)) {
			Some(idx) => idx,
			None => {
				let mut registered = shape.clone();
				registered.typmod = Some(shapes.len() as u32);
				shapes.push(registered);
				shapes.len() - 1
			}
		};

		trace!(typmod, shape = %shape, "blessed record shape");
		shape.typmod = Some(typmod as u32);
	}

	pub fn lookup(&self, typmod: u32) -> Option<RowShape> {
		self.shapes.lock().get(typmod as usize).cloned()
	}

	pub fn len(&self) -> usize {
		self.shapes.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.shapes.lock().is_empty()
	}
}
