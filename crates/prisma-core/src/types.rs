use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Paths,
    Integrations,
    Quality,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Paths,
        DocumentKind::Integrations,
        DocumentKind::Quality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Paths => "paths",
            DocumentKind::Integrations => "integrations",
            DocumentKind::Quality => "quality",
        }
    }

    /// File name of this kind's document inside the configuration directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Paths => crate::paths::PATHS_FILE,
            DocumentKind::Integrations => crate::paths::INTEGRATIONS_FILE,
            DocumentKind::Quality => crate::paths::QUALITY_FILE,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Agents,
    Prompts,
    Commands,
    Templates,
    Specs,
    Steering,
    Settings,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Agents,
        Role::Prompts,
        Role::Commands,
        Role::Templates,
        Role::Specs,
        Role::Steering,
        Role::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Agents => "agents",
            Role::Prompts => "prompts",
            Role::Commands => "commands",
            Role::Templates => "templates",
            Role::Specs => "specs",
            Role::Steering => "steering",
            Role::Settings => "settings",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRole(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PathTable
// ---------------------------------------------------------------------------

/// Workspace-relative directories, one per [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathTable {
    pub agents: String,
    pub prompts: String,
    pub commands: String,
    pub templates: String,
    pub specs: String,
    pub steering: String,
    pub settings: String,
}

impl Default for PathTable {
    fn default() -> Self {
        Self {
            agents: ".claude/agents/prisma".to_string(),
            prompts: ".claude/system-prompts".to_string(),
            commands: ".claude/commands/prisma".to_string(),
            templates: ".claude/templates".to_string(),
            specs: ".prisma/projeto/especificacoes".to_string(),
            steering: ".claude/steering".to_string(),
            settings: ".claude/settings".to_string(),
        }
    }
}

impl PathTable {
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Agents => &self.agents,
            Role::Prompts => &self.prompts,
            Role::Commands => &self.commands,
            Role::Templates => &self.templates,
            Role::Specs => &self.specs,
            Role::Steering => &self.steering,
            Role::Settings => &self.settings,
        }
    }

    pub fn set(&mut self, role: Role, value: impl Into<String>) {
        let slot = match role {
            Role::Agents => &mut self.agents,
            Role::Prompts => &mut self.prompts,
            Role::Commands => &mut self.commands,
            Role::Templates => &mut self.templates,
            Role::Specs => &mut self.specs,
            Role::Steering => &mut self.steering,
            Role::Settings => &mut self.settings,
        };
        *slot = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

// ---------------------------------------------------------------------------
// IntegrationsSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    #[default]
    Cli,
    /// The assistant is driven through the host editor's extension API.
    Extension,
}

impl InvocationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InvocationMode::Cli => "cli",
            InvocationMode::Extension => "extension",
        }
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MAX_ACTIVATION_DELAY_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TerminalSettings {
    /// Milliseconds to wait after opening a terminal before sending input.
    #[serde(default = "default_activation_delay")]
    pub activation_delay: u32,
}

fn default_activation_delay() -> u32 {
    800
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            activation_delay: default_activation_delay(),
        }
    }
}

/// Resolved integration settings. Unlike the on-disk document, the terminal
/// block is always present here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationsSettings {
    pub invocation_mode: InvocationMode,
    pub cli_path: String,
    pub terminal: TerminalSettings,
}

pub(crate) fn default_cli_path() -> String {
    "claude".to_string()
}

impl Default for IntegrationsSettings {
    fn default() -> Self {
        Self {
            invocation_mode: InvocationMode::default(),
            cli_path: default_cli_path(),
            terminal: TerminalSettings::default(),
        }
    }
}

impl IntegrationsSettings {
    /// Locate the configured CLI executable on `PATH`.
    pub fn resolve_cli(&self) -> Option<PathBuf> {
        which::which(&self.cli_path).ok()
    }
}

// ---------------------------------------------------------------------------
// QualitySettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub fn as_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QualitySettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub strict_mode: bool,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default = "default_true")]
    pub show_notifications: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            strict_mode: false,
            log_level: LogLevel::default(),
            show_notifications: true,
        }
    }
}

// ---------------------------------------------------------------------------
// MergedConfiguration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergedConfiguration {
    pub paths: PathTable,
    pub integrations: IntegrationsSettings,
    pub quality: QualitySettings,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        let err = "scripts".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("unknown role 'scripts'"));
    }

    #[test]
    fn document_kinds_have_distinct_files() {
        let files: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(files, ["caminhos.yaml", "integracoes.yaml", "qualidade.yaml"]);
    }

    #[test]
    fn path_table_get_and_set() {
        let mut table = PathTable::default();
        assert_eq!(table.get(Role::Agents), ".claude/agents/prisma");
        assert_eq!(table.get(Role::Specs), ".prisma/projeto/especificacoes");

        table.set(Role::Steering, ".custom/steering");
        assert_eq!(table.steering, ".custom/steering");
        assert_eq!(table.iter().count(), 7);
        assert!(table
            .iter()
            .any(|(role, value)| role == Role::Steering && value == ".custom/steering"));
    }

    #[test]
    fn log_level_maps_to_tracing() {
        assert_eq!(LogLevel::Error.as_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::default().as_level(), tracing::Level::WARN);
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }

    #[test]
    fn merged_defaults() {
        let merged = MergedConfiguration::default();
        assert_eq!(merged.integrations.invocation_mode, InvocationMode::Cli);
        assert_eq!(merged.integrations.cli_path, "claude");
        assert_eq!(merged.integrations.terminal.activation_delay, 800);
        assert!(merged.quality.enabled);
        assert!(!merged.quality.strict_mode);
        assert_eq!(merged.quality.log_level, LogLevel::Warn);
        assert!(merged.quality.show_notifications);
    }

    #[test]
    fn merged_serializes_camel_case() {
        let json = serde_json::to_value(MergedConfiguration::default()).unwrap();
        assert_eq!(json["integrations"]["invocationMode"], "cli");
        assert_eq!(json["integrations"]["terminal"]["activationDelay"], 800);
        assert_eq!(json["quality"]["showNotifications"], true);
    }
}
