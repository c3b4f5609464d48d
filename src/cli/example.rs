//! Render catalog examples as JSON

use super::{CliError, catalog};

/// Options for the example command
#[derive(Debug, Clone, Default)]
pub struct ExampleOptions {
    /// Catalog name, bare or `category/name`
    pub name: String,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Builds the named example and renders it.
pub fn execute_example(options: &ExampleOptions) -> Result<String, CliError> {
    let entry = catalog::find(&options.name)?;
    tracing::debug!(entry = %entry.qualified_name(), pretty = options.pretty, "rendering example");
    Ok(entry.example().render(options.pretty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_example() {
        let options = ExampleOptions {
            name: "exists".to_string(),
            pretty: false,
        };
        assert_eq!(
            execute_example(&options).unwrap(),
            r#"{"exists":{"field":"email"}}"#
        );
    }

    #[test]
    fn unknown_example() {
        let options = ExampleOptions {
            name: "nope".to_string(),
            pretty: true,
        };
        assert_eq!(
            execute_example(&options),
            Err(CliError::UnknownClause("nope".to_string()))
        );
    }
}
