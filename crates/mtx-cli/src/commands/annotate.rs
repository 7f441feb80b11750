use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use mtx_annotate::{Injected, inject};
use mtx_core::{AnnotationPayload, Document};
use serde::Serialize;

use crate::cli::root_commands::AnnotateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct AnnotateResponse {
    file: String,
    element: String,
    tag: String,
    line_number: usize,
    had_prior_annotation: bool,
    changed: bool,
    written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    backup: Option<String>,
}

/// Handle `mtx annotate`.
pub fn handle(args: &AnnotateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = ctx
        .load_document()
        .with_context(|| format!("failed to load {}", ctx.matrix_path().display()))?;
    let payload = build_payload(&document, &args.use_case, &args.function, &today())?;

    let path = ctx.resolve(&args.file);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let injected = match inject(&text, &args.element, &payload) {
        Ok(injected) => injected,
        Err(error) => bail!("cannot annotate {}: {error}", args.file),
    };

    let write = !args.dry_run && injected.changed;
    let backup = if write && ctx.config.annotate.backup {
        Some(write_backup(&path)?)
    } else {
        None
    };
    if write {
        fs::write(&path, &injected.new_text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(file = %path.display(), line = injected.line_number, "annotation written");
    }

    let response = response(args, &injected, write, backup.as_deref());
    match flags.format {
        OutputFormat::Table => {
            let verb = match (injected.had_prior_annotation, injected.changed) {
                (_, false) => "already up to date",
                (true, true) => "replaced",
                (false, true) => "added",
            };
            let mode = if args.dry_run { " (dry run)" } else { "" };
            println!(
                "{}:{} <{}> annotation {verb}{mode}",
                args.file, injected.line_number, injected.tag
            );
            Ok(())
        }
        format => output::output(&response, format),
    }
}

/// Build the payload for one function record of one use case.
fn build_payload(
    document: &Document,
    use_case_id: &str,
    function: &str,
    verified: &str,
) -> anyhow::Result<AnnotationPayload> {
    let use_case = document
        .use_case(use_case_id)
        .with_context(|| format!("use case {use_case_id} is not in the matrix"))?;
    let record = use_case
        .function(function)
        .with_context(|| format!("{use_case_id} has no function named {function}"))?;
    Ok(AnnotationPayload::from_record(use_case, record, verified)?)
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn write_backup(path: &Path) -> anyhow::Result<String> {
    let mut backup = PathBuf::from(path);
    let name = format!(
        "{}.bak",
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    );
    backup.set_file_name(name);
    fs::copy(path, &backup)
        .with_context(|| format!("failed to back up {} to {}", path.display(), backup.display()))?;
    Ok(backup.display().to_string())
}

fn response(
    args: &AnnotateArgs,
    injected: &Injected,
    written: bool,
    backup: Option<&str>,
) -> AnnotateResponse {
    AnnotateResponse {
        file: args.file.clone(),
        element: args.element.clone(),
        tag: injected.tag.clone(),
        line_number: injected.line_number,
        had_prior_annotation: injected.had_prior_annotation,
        changed: injected.changed,
        written,
        backup: backup.map(str::to_string),
    }
}
