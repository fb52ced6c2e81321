use anyhow::Context;
use camino::Utf8PathBuf;
use sattuner_domain::catalog;
use std::fs;

/// File written under the per-file loader configuration directory.
pub const MANAGED_LOADER_FILE: &str = "starlink.conf";

const HEADER: &str = "# Satellite uplink boot tunables, managed by sattuner";

/// Writes boot-time kernel tunables to whichever loader mechanism the host
/// supports.
///
/// Hosts with a per-file loader configuration directory get a dedicated
/// file, fully overwritten on every run. Older hosts share a single loader
/// file; there the managed lines are replaced in place so repeated runs
/// converge and unrelated lines survive verbatim.
#[derive(Clone, Debug)]
pub struct LoaderTuningWriter {
    loader_dir: Utf8PathBuf,
    classic_path: Utf8PathBuf,
}

impl LoaderTuningWriter {
    pub fn new(loader_dir: impl Into<Utf8PathBuf>, classic_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            loader_dir: loader_dir.into(),
            classic_path: classic_path.into(),
        }
    }

    pub fn apply(&self) -> anyhow::Result<Vec<String>> {
        let mut changes = Vec::new();

        if self.loader_dir.is_dir() {
            let target = self.loader_dir.join(MANAGED_LOADER_FILE);
            fs::write(&target, render_managed_block())
                .with_context(|| format!("write {target}"))?;
            changes.push(format!("wrote dedicated loader file {target}"));
        } else {
            let current = fs::read_to_string(&self.classic_path).unwrap_or_default();
            fs::write(&self.classic_path, merge_classic(&current))
                .with_context(|| format!("write {}", self.classic_path))?;
            changes.push(format!("updated shared loader file {}", self.classic_path));
        }

        changes.push(
            "a full system restart is required for boot-time tunables to take effect".to_string(),
        );
        Ok(changes)
    }
}

fn render_managed_block() -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (key, value) in catalog::LOADER_TUNABLES {
        out.push_str(&format!("{key}=\"{value}\"\n"));
    }
    out
}

/// True when the line assigns one of the managed tunables. The key is the
/// exact `=`-left-hand token; a tunable that merely shares a prefix with a
/// managed one is left alone.
fn is_managed_line(line: &str) -> bool {
    let Some((key, _)) = line.split_once('=') else {
        return false;
    };
    let key = key.trim();
    catalog::LOADER_TUNABLES
        .iter()
        .any(|(managed, _)| key == *managed)
}

fn merge_classic(current: &str) -> String {
    let mut out = String::new();
    for line in current.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == HEADER || is_managed_line(line) {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&render_managed_block());
    out
}
