// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

pub mod function;
pub mod materialize;
pub mod store;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Diagnostic {
	/// Multi-line, human readable rendering used by `Display`.
	pub fn render(&self) -> String {
		let mut out = String::new();
		let _ = write!(out, "Error {}: {}", self.code, self.message);
		if let Some(label) = &self.label {
			let _ = write!(out, "\n  --> {}", label);
		}
		if let Some(help) = &self.help {
			let _ = write!(out, "\n  help: {}", help);
		}
		for note in &self.notes {
			let _ = write!(out, "\n  note: {}", note);
		}
		out
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}
