//! Locating the external `pdftotext` binary.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const PDFTOTEXT: &str = "pdftotext";

fn env_override(name: &str) -> Option<PathBuf> {
    let var = match name {
        PDFTOTEXT => "SPEEDREAD_PDFTOTEXT",
        _ => return None,
    };

    env::var_os(var).map(PathBuf::from).filter(|p| p.exists())
}

fn sibling_binary(name: &str) -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?;
    [dir.join(name), dir.join("bin").join(name)]
        .into_iter()
        .find(|p| p.exists())
}

fn data_dir_binary(name: &str) -> Option<PathBuf> {
    let candidate = crate::config::data_dir().join("bin").join(name);
    candidate.exists().then_some(candidate)
}

fn path_binary(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}

/// Search order: environment override, next to the executable, the data
/// directory, then `PATH`.
pub fn resolve_binary(name: &str) -> Result<PathBuf> {
    env_override(name)
        .or_else(|| sibling_binary(name))
        .or_else(|| data_dir_binary(name))
        .or_else(|| path_binary(name))
        .ok_or_else(|| anyhow::anyhow!("Missing {}. Install poppler-utils to read paginated PDFs.", name))
}

pub fn resolve_command(name: &str) -> Result<std::process::Command> {
    let path = resolve_binary(name)
        .with_context(|| format!("Unable to locate bundled or system {}", name))?;
    Ok(std::process::Command::new(path))
}
