//! Plan application: file writes and external commands
//!
//! Directives run strictly in plan order. The first fatal failure aborts
//! the run; files already written stay on disk (no rollback).

use crate::plan::directive::{CommandDirective, Directive, FileDirective, FileMode};
use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Failures surfaced while applying a plan.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("`{argv}` exited with status {code:?}")]
    CommandFailed { argv: String, code: Option<i32> },

    #[error("anchor `{anchor}` not found in {path}")]
    AnchorNotFound { path: String, anchor: String },
}

/// Apply every directive in order against the project root.
pub async fn apply_plan(root: &Path, plan: &[Directive]) -> Result<()> {
    for directive in plan {
        match directive {
            Directive::File(file) => apply_file(root, file).await?,
            Directive::Command(command) => run_command(root, command).await?,
        }
    }
    Ok(())
}

/// Apply a single file directive.
pub async fn apply_file(root: &Path, directive: &FileDirective) -> Result<()> {
    let target = root.join(&directive.path);

    match &directive.mode {
        FileMode::Overwrite => {
            ensure_parent(&target).await?;
            fs::write(&target, &directive.content)
                .await
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
        }
        FileMode::Append => {
            ensure_parent(&target).await?;
            let mut file = fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&target)
                .await
                .with_context(|| format!("Failed to open file: {}", target.display()))?;
            file.write_all(directive.content.as_bytes())
                .await
                .with_context(|| format!("Failed to append to file: {}", target.display()))?;
        }
        FileMode::InsertAfter { anchor } => {
            let source = fs::read_to_string(&target)
                .await
                .with_context(|| format!("Failed to read file: {}", target.display()))?;
            let updated =
                insert_after_line(&source, anchor, &directive.content).ok_or_else(|| {
                    ApplyError::AnchorNotFound {
                        path: directive.path.clone(),
                        anchor: anchor.clone(),
                    }
                })?;
            fs::write(&target, updated)
                .await
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
        }
        FileMode::Substitute { pattern } => {
            let source = fs::read_to_string(&target)
                .await
                .with_context(|| format!("Failed to read file: {}", target.display()))?;
            let updated = substitute_lines(&source, pattern, &directive.content)?;
            fs::write(&target, updated)
                .await
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
        }
        FileMode::Remove => match fs::metadata(&target).await {
            Ok(meta) if meta.is_dir() => {
                fs::remove_dir_all(&target)
                    .await
                    .with_context(|| format!("Failed to remove directory: {}", target.display()))?;
            }
            Ok(_) => {
                fs::remove_file(&target)
                    .await
                    .with_context(|| format!("Failed to remove file: {}", target.display()))?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to inspect path: {}", target.display()));
            }
        },
    }

    Ok(())
}

/// Run a single external command with the project root as cwd, streaming
/// its output straight to the operator's terminal.
pub async fn run_command(root: &Path, command: &CommandDirective) -> Result<()> {
    let (program, args) = command
        .argv
        .split_first()
        .context("empty command directive")?;

    println!();
    println!("{} {}", "Running:".dimmed(), command.display().yellow());

    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .await
        .with_context(|| format!("failed to spawn `{}`", command.display()))?;

    if status.success() {
        return Ok(());
    }

    if command.may_fail {
        eprintln!(
            "{} `{}` exited with status {:?}; continuing",
            "Warning:".yellow(),
            command.display(),
            status.code()
        );
        return Ok(());
    }

    Err(ApplyError::CommandFailed {
        argv: command.display(),
        code: status.code(),
    }
    .into())
}

async fn ensure_parent(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Insert `addition` on its own line after the first line containing
/// `anchor`; `None` when the anchor is absent.
fn insert_after_line(source: &str, anchor: &str, addition: &str) -> Option<String> {
    if !source.lines().any(|line| line.contains(anchor)) {
        return None;
    }

    let mut out = String::with_capacity(source.len() + addition.len() + 1);
    let mut inserted = false;
    for line in source.lines() {
        out.push_str(line);
        out.push('\n');
        if !inserted && line.contains(anchor) {
            out.push_str(addition);
            if !addition.ends_with('\n') {
                out.push('\n');
            }
            inserted = true;
        }
    }
    Some(out)
}

/// Replace every line matching `pattern` with `replacement`, literally.
fn substitute_lines(source: &str, pattern: &str, replacement: &str) -> Result<String> {
    let re = Regex::new(&format!("(?m)^{pattern}$"))
        .with_context(|| format!("invalid substitution pattern: {pattern}"))?;
    Ok(re.replace_all(source, regex::NoExpand(replacement)).into_owned())
}
