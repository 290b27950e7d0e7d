// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::r#type::Type};

pub fn backward_scan_not_supported() -> Diagnostic {
	Diagnostic {
		code: "SRF_004".to_string(),
		message: "row store was not created for random access".to_string(),
		label: None,
		help: Some("Request MATERIALIZE_RANDOM when backward reads are needed".to_string()),
		notes: vec![],
	}
}

pub fn row_arity_mismatch(expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "SRF_005".to_string(),
		message: format!("row has {} values but the row shape has {} columns", actual, expected),
		label: None,
		help: Some(format!("Provide exactly {} values per row", expected)),
		notes: vec![],
	}
}

pub fn value_type_mismatch(column: &str, expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "SRF_006".to_string(),
		message: format!("column {} expects {}, got {}", column, expected, actual),
		label: Some(format!("value for column {}", column)),
		help: None,
		notes: vec![],
	}
}
