use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every written artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<InputRecord>,
}

/// An input file the artifact was computed from.
#[derive(Debug, Serialize)]
pub struct InputRecord {
    pub path: String,
    /// Size at the time the sidecar was written; `None` if the file is gone.
    pub bytes: Option<u64>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        let input = input.as_ref();
        self.inputs.push(InputRecord {
            path: input.display().to_string(),
            bytes: fs::metadata(input).ok().map(|m| m.len()),
        });
        self
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the
/// code revision, library version, callsite, params, inputs and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let path = sidecar_path(artifact);
    let n_inputs = payload.inputs.len();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating provenance dir {}", dir.display()))?;
    }

    let doc = json!({
        "code_rev": code_rev(),
        "planar_hull_version": planar_hull::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [artifact.display().to_string()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), inputs = n_inputs, "provenance sidecar");
    Ok(path)
}

/// `out/hull.json` -> `out/hull.provenance.json`; an extensionless artifact
/// gets the suffix appended.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit the binary was built from.
///
/// Order: `GIT_COMMIT` at build time, `GIT_COMMIT` at run time, `git rev-parse HEAD`,
/// then `"unknown"`.
pub fn code_rev() -> String {
    let build_time = option_env!("GIT_COMMIT").map(str::to_owned);
    let run_time = std::env::var("GIT_COMMIT").ok();
    [build_time, run_time]
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}
