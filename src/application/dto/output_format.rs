/// Output format enumeration for the extracted model
///
/// Both the CLI and the formatter factory need to understand it, so it
/// lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON of the tooling form (default)
    #[default]
    Json,
    /// MessagePack blob, readable again with `--model`
    Binary,
    /// Human-readable dependency tree per configuration
    Tree,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "binary" | "bin" | "msgpack" => Ok(OutputFormat::Binary),
            "tree" | "text" => Ok(OutputFormat::Tree),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'binary' or 'tree'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Binary => write!(f, "binary"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}
