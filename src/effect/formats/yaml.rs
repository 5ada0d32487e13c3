//! YAML rendering of the resolved descriptors

use super::registry::{FormatError, Formatter};
use crate::effect::pipeline::Compilation;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, compilation: &Compilation) -> Result<String, FormatError> {
        serde_yaml::to_string(&compilation.effect)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Resolved effect descriptors as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::pipeline::Compiler;

    #[test]
    fn test_yaml_names_the_effect() {
        let compilation = Compiler::new()
            .compile_artifacts(r#"effect "stone" { technique { lodlevel 2 pass { } } }"#)
            .expect("compiles");

        let yaml = YamlFormatter.serialize(&compilation).expect("serializes");
        assert!(yaml.starts_with("name: stone\n"));
        assert!(yaml.contains("lod_level: 2"));
    }
}
