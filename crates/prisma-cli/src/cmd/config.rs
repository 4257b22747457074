use crate::output::{print_field, print_json, print_section};
use anyhow::Context;
use clap::Subcommand;
use prisma_core::schema::{IntegrationsDocument, PathsDocument, QualityDocument, Schema};
use prisma_core::{loader, path_guard, paths, ConfigAggregator, FsStorage, MergedConfiguration, Role};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the merged configuration
    Show,

    /// Print the configured path for one role
    Path {
        /// Role name: agents, prompts, commands, templates, specs, steering, settings
        role: Role,
        /// Join the path onto the workspace root
        #[arg(long)]
        absolute: bool,
    },

    /// Check each configuration document and report why it would be ignored
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Path { role, absolute } => path(root, role, absolute),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn load(aggregator: &ConfigAggregator, root: &Path) -> anyhow::Result<Arc<MergedConfiguration>> {
    aggregator
        .load_all(root)
        .context("failed to provision default configuration")?
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no configuration document in {} could be loaded",
                paths::config_dir(root).display()
            )
        })
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = load(&ConfigAggregator::new(), root)?;
    let cli_binary = config.integrations.resolve_cli();

    if json {
        let value = serde_json::json!({
            "root": root,
            "config": &*config,
            "cliResolved": cli_binary,
        });
        return print_json(&value);
    }

    print_merged(&config);
    match cli_binary {
        Some(found) => print_field("resolved", found.display()),
        None => print_field("resolved", "(not found on PATH)"),
    }
    Ok(())
}

fn print_merged(config: &MergedConfiguration) {
    print_section("Paths", config.paths.iter().map(|(role, value)| (role.as_str(), value)));

    let integrations = &config.integrations;
    print_section(
        "Integrations",
        [
            ("invocationMode", integrations.invocation_mode.to_string()),
            ("cliPath", integrations.cli_path.clone()),
            (
                "activationDelay",
                format!("{}ms", integrations.terminal.activation_delay),
            ),
        ],
    );

    let quality = &config.quality;
    print_section(
        "Quality",
        [
            ("enabled", quality.enabled.to_string()),
            ("strictMode", quality.strict_mode.to_string()),
            ("logLevel", quality.log_level.to_string()),
            ("showNotifications", quality.show_notifications.to_string()),
        ],
    );
}

// ---------------------------------------------------------------------------
// path
// ---------------------------------------------------------------------------

fn path(root: &Path, role: Role, absolute: bool) -> anyhow::Result<()> {
    let aggregator = ConfigAggregator::new();
    load(&aggregator, root)?;
    if absolute {
        println!("{}", aggregator.resolve_path(root, role).display());
    } else {
        println!("{}", aggregator.get_path(role));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentReport {
    kind: String,
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rejected_paths: Vec<RejectedPath>,
}

#[derive(Serialize)]
struct RejectedPath {
    role: Role,
    value: String,
}

fn check<T: Schema>(config_dir: &Path) -> (DocumentReport, Option<T>) {
    let file = paths::document_path(config_dir, T::KIND);
    let result = loader::try_load::<T, _>(&FsStorage, &file);
    let report = DocumentReport {
        kind: T::KIND.to_string(),
        file: file.display().to_string(),
        valid: result.is_ok(),
        reason: result.as_ref().err().map(|e| e.to_string()),
        rejected_paths: Vec::new(),
    };
    (report, result.ok())
}

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config_dir = paths::config_dir(root);

    let (mut paths_report, paths_doc) = check::<PathsDocument>(&config_dir);
    if let Some(doc) = paths_doc {
        paths_report.rejected_paths = doc
            .paths
            .iter()
            .filter(|(_, value)| !path_guard::is_admissible(value, root))
            .map(|(role, value)| RejectedPath {
                role,
                value: value.to_string(),
            })
            .collect();
    }
    let (integrations_report, _) = check::<IntegrationsDocument>(&config_dir);
    let (quality_report, _) = check::<QualityDocument>(&config_dir);
    let reports = [paths_report, integrations_report, quality_report];

    if json {
        print_json(&serde_json::json!({ "documents": reports }))?;
    } else {
        for report in &reports {
            match &report.reason {
                None => println!("[ok]    {}", report.file),
                Some(reason) => println!("[error] {}: {reason}", report.file),
            }
            for rejected in &report.rejected_paths {
                println!(
                    "[warn]  {}: path '{}' leaves the workspace; the default will be used",
                    rejected.role, rejected.value
                );
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        anyhow::bail!("{invalid} configuration document(s) will be ignored");
    }
    Ok(())
}
