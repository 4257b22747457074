//! Fixed shapes for the three configuration documents.
//!
//! Every struct here denies unknown fields, so a typo anywhere in a document
//! fails the whole document. Optional fields are filled from their defaults
//! during deserialization; bounds that serde cannot express are checked
//! afterwards by [`Schema::check`]. A nested block that is present must be
//! a mapping: YAML `null` (`claude:` with no body) is a type error, not an
//! empty block.

use crate::error::{ConfigError, Result};
use crate::types::{
    default_cli_path, DocumentKind, InvocationMode, IntegrationsSettings, PathTable,
    QualitySettings, TerminalSettings, MAX_ACTIVATION_DELAY_MS,
};
use serde::de::{self, DeserializeOwned, Deserializer, Unexpected};
use serde::Deserialize;
use serde_yaml::Value;

/// A document shape that can be validated from an untyped YAML value.
pub trait Schema: DeserializeOwned + Default + Send {
    const KIND: DocumentKind;

    /// Checks beyond what deserialization enforces. Returns the violation
    /// reason on failure.
    fn check(&self) -> std::result::Result<(), String>;
}

/// Turn an untyped parsed document into `T`, or a `ConfigError::Schema`
/// naming the first violation.
pub fn validate<T: Schema>(raw: Value) -> Result<T> {
    let doc: T =
        serde_yaml::from_value(raw).map_err(|e| ConfigError::schema(T::KIND, e.to_string()))?;
    doc.check()
        .map_err(|reason| ConfigError::schema(T::KIND, reason))?;
    Ok(doc)
}

/// Deserialize a nested block, rejecting anything that is not a mapping.
fn section<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_mapping() {
        return Err(de::Error::invalid_type(unexpected(&value), &"a mapping"));
    }
    T::deserialize(value).map_err(de::Error::custom)
}

/// Like [`section`] for blocks that may be omitted. An explicit null is
/// still rejected; only a missing key yields `None`.
fn optional_section<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    section(deserializer).map(Some)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Other("null"),
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Sequence(_) => Unexpected::Seq,
        Value::Mapping(_) => Unexpected::Map,
        Value::Tagged(_) => Unexpected::Other("tagged value"),
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsDocument {
    #[serde(deserialize_with = "section")]
    pub paths: PathTable,
}

impl Schema for PathsDocument {
    const KIND: DocumentKind = DocumentKind::Paths;

    fn check(&self) -> std::result::Result<(), String> {
        for (role, value) in self.paths.iter() {
            if value.is_empty() {
                return Err(format!("paths.{role} must be a non-empty string"));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Integrations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationsDocument {
    #[serde(deserialize_with = "section")]
    pub claude: ClaudeSection,
}

/// The `claude:` block as written on disk. `terminal` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClaudeSection {
    #[serde(default)]
    pub invocation_mode: InvocationMode,
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
    #[serde(default, deserialize_with = "optional_section")]
    pub terminal: Option<TerminalSettings>,
}

impl Default for ClaudeSection {
    fn default() -> Self {
        Self {
            invocation_mode: InvocationMode::default(),
            cli_path: default_cli_path(),
            terminal: Some(TerminalSettings::default()),
        }
    }
}

impl ClaudeSection {
    /// Resolve into settings, filling a missing terminal block.
    pub fn into_settings(self) -> IntegrationsSettings {
        IntegrationsSettings {
            invocation_mode: self.invocation_mode,
            cli_path: self.cli_path,
            terminal: self.terminal.unwrap_or_default(),
        }
    }
}

impl Schema for IntegrationsDocument {
    const KIND: DocumentKind = DocumentKind::Integrations;

    fn check(&self) -> std::result::Result<(), String> {
        if self.claude.cli_path.is_empty() {
            return Err("claude.cliPath must be a non-empty string".to_string());
        }
        if let Some(terminal) = &self.claude.terminal {
            if terminal.activation_delay > MAX_ACTIVATION_DELAY_MS {
                return Err(format!(
                    "claude.terminal.activationDelay must be between 0 and {MAX_ACTIVATION_DELAY_MS}, got {}",
                    terminal.activation_delay
                ));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QualityDocument {
    #[serde(deserialize_with = "section")]
    pub validation: QualitySettings,
}

impl Schema for QualityDocument {
    const KIND: DocumentKind = DocumentKind::Quality;

    fn check(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
