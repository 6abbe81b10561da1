use console::style;
use coordshift_core::CoordshiftError;
use std::fmt;

/// Error with remediation hints, printed instead of a bare message
#[derive(Clone)]
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }

    /// Machine-readable form for --json
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": "error",
            "message": self.message,
            "context": self.context,
            "suggestions": self.suggestions,
        })
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a missing AMap key
pub fn amap_key_missing() -> CliError {
    CliError::new("AMap key not configured")
        .with_context("Reverse geocoding calls the AMap web service, which requires a key.")
        .with_suggestion("Pass it directly: coordshift regeo <LNG> <LAT> --amap-key <KEY>")
        .with_suggestion("Or export AMAP_KEY (or COORDSHIFT_AMAP_KEY)")
        .with_suggestion("Or add amap_key = \"...\" to coordshift.toml")
        .with_help("Run: coordshift regeo --help")
}

/// Create error for an unreadable input file
pub fn input_not_found(path: &str) -> CliError {
    CliError::new("Input file not found")
        .with_context(format!("The specified input file does not exist.\n\nPath: {}", path))
        .with_suggestion("Check the file path and try again")
        .with_suggestion("Use \"-\" to read from stdin")
}

/// Create error for batch input with unparseable lines
pub fn invalid_batch_lines(failures: &[(usize, String)]) -> CliError {
    let listed: Vec<String> =
        failures.iter().map(|(line, reason)| format!("line {}: {}", line, reason)).collect();

    CliError::new(format!("{} invalid line(s) in batch input", failures.len()))
        .with_context(listed.join("\n"))
        .with_suggestion("Write one \"lng,lat\" pair per line, longitude first")
        .with_suggestion("Prefix a line with # to skip it")
}

/// Translate library errors into errors with hints
pub fn from_coordshift(error: &CoordshiftError) -> CliError {
    match error {
        CoordshiftError::ConfigMissing { key } if key == "amap_key" => amap_key_missing(),
        CoordshiftError::UnsupportedFrame { .. } | CoordshiftError::InvalidFrame { .. } => {
            CliError::new(error.to_string())
                .with_suggestion("Use --from/--to with wgs84 or gcj02")
        }
        CoordshiftError::ConfigInvalid { .. } => CliError::new(error.to_string())
            .with_suggestion("Check coordshift.toml for syntax errors")
            .with_help("Run: coordshift config"),
        CoordshiftError::GeocoderUnavailable { reason, remediation } => {
            CliError::new("Reverse geocoding failed")
                .with_context(reason.clone())
                .with_suggestion(remediation.clone())
        }
        CoordshiftError::GeocoderRejected { status, info } => {
            CliError::new("AMap rejected the request")
                .with_context(format!("Status: {}\nInfo: {}", status, info))
                .with_suggestion("Check that the AMap key is valid and has the web-service quota")
        }
        _ => CliError::new(error.to_string()),
    }
}

/// Print a command failure to stderr
pub fn report(error: anyhow::Error, json: bool) {
    let cli_error = if let Some(cli_error) = error.downcast_ref::<CliError>() {
        cli_error.clone()
    } else if let Some(lib_error) = error.downcast_ref::<CoordshiftError>() {
        let mut cli_error = from_coordshift(lib_error);
        // Keep the outer context (e.g. which file failed to load)
        if cli_error.context.is_none() && error.chain().count() > 1 {
            cli_error.context = Some(error.to_string());
        }
        cli_error
    } else {
        let chain: Vec<String> = error.chain().skip(1).map(|e| e.to_string()).collect();
        let cli_error = CliError::new(error.to_string());
        if chain.is_empty() {
            cli_error
        } else {
            cli_error.with_context(chain.join("\n"))
        }
    };

    if json {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&cli_error.to_json()).unwrap_or_else(|_| cli_error.message.clone())
        );
    } else {
        cli_error.display();
    }
}
