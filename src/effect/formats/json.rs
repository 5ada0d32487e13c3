//! JSON rendering of the resolved descriptors

use super::registry::{FormatError, Formatter};
use crate::effect::pipeline::Compilation;

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, compilation: &Compilation) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(&compilation.effect)
        } else {
            serde_json::to_string(&compilation.effect)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Resolved effect descriptors as JSON"
    }
}
