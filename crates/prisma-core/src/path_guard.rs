//! Lexical admissibility checks for workspace-relative paths.
//!
//! Nothing here touches the filesystem. Both `/` and `\` count as separators
//! regardless of host platform, so a Windows-style path in a YAML document is
//! judged the same way on every machine that reads it.

use regex::Regex;
use std::path::{Component, Path};
use std::sync::OnceLock;

static DRIVE_RE: OnceLock<Regex> = OnceLock::new();

fn drive_re() -> &'static Regex {
    DRIVE_RE.get_or_init(|| Regex::new(r"^[A-Za-z]:").unwrap())
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// True when `candidate` starts with a root marker: a leading separator
/// (POSIX root or UNC prefix) or a drive letter followed by a colon.
pub fn is_absolute(candidate: &str) -> bool {
    candidate.starts_with(is_separator) || drive_re().is_match(candidate)
}

/// Collapse redundant separators and `.` segments. `..` segments are kept
/// as-is so callers can see them; the root marker, if any, is preserved.
/// A path with no remaining segments normalizes to `.`.
pub fn normalize(candidate: &str) -> String {
    let (prefix, rest) = split_root(candidate);
    let segments: Vec<&str> = rest
        .split(is_separator)
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    if segments.is_empty() {
        return if prefix.is_empty() {
            ".".to_string()
        } else {
            prefix
        };
    }
    format!("{prefix}{}", segments.join("/"))
}

fn split_root(candidate: &str) -> (String, &str) {
    let mut prefix = String::new();
    let mut rest = candidate;
    if drive_re().is_match(rest) {
        prefix.push_str(&rest[..2]);
        rest = &rest[2..];
    }
    if rest.starts_with(is_separator) {
        prefix.push('/');
        rest = rest.trim_start_matches(is_separator);
    }
    (prefix, rest)
}

/// Decide whether `candidate` stays inside `workspace_root`.
///
/// Rejects absolute paths and any path with a `..` segment, wherever it
/// appears. The empty path and `.` name the workspace root and are accepted.
pub fn is_admissible(candidate: &str, workspace_root: &Path) -> bool {
    let normalized = normalize(candidate);

    if is_absolute(&normalized) {
        return false;
    }
    if normalized.split('/').any(|segment| segment == "..") {
        return false;
    }

    let resolved = workspace_root.join(&normalized);
    let Ok(relative) = resolved.strip_prefix(workspace_root) else {
        return false;
    };
    // Empty relative path is the workspace root itself.
    !relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}

/// Return `candidate` when admissible, otherwise `fallback`.
pub fn sanitize(candidate: &str, workspace_root: &Path, fallback: &str) -> String {
    if is_admissible(candidate, workspace_root) {
        candidate.to_string()
    } else {
        fallback.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
