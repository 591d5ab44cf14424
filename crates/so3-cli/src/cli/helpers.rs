use super::CliError;
use anyhow::Context;
use serde::Serialize;
use so3_core::request::{TransformRequest, TransformResponse, parse_request, render_response};
use std::fs;
use std::path::Path;

pub(super) fn read_request(path: &Path) -> Result<TransformRequest, CliError> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read transform request '{}'", path.display()))?;
    let request = parse_request(&source)
        .with_context(|| format!("failed to parse transform request '{}'", path.display()))?;
    Ok(request)
}

pub(super) fn write_output(
    path: Option<&Path>,
    response: &TransformResponse,
) -> Result<(), CliError> {
    let rendered = render_response(response).context("failed to serialize transform response")?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory '{}'", parent.display())
                })?;
            }
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write response '{}'", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

pub(super) fn emit_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize report")?;
    println!("{rendered}");
    Ok(())
}
