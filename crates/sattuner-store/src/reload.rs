use std::process::Command;

/// Pushes persisted settings into the running system. Both operations are
/// best-effort from the caller's point of view: a failed reload leaves the
/// persisted configuration intact and is reported, not retried.
pub trait Reloader {
    /// Apply runtime tunables without a restart.
    fn apply_runtime_tunables(&self, tunables: &[(&str, &str)]) -> anyhow::Result<()>;

    /// Re-run interface configuration for the WAN link.
    fn reconfigure_wan(&self) -> anyhow::Result<()>;
}

/// Reloads through host utilities: one `sysctl key=value ...` invocation
/// for the tunables and an optional shell command for the WAN interface.
#[derive(Clone, Debug)]
pub struct ExecReloader {
    pub sysctl_cmd: String,
    pub wan_reload_cmd: Option<String>,
}

impl Reloader for ExecReloader {
    fn apply_runtime_tunables(&self, tunables: &[(&str, &str)]) -> anyhow::Result<()> {
        if tunables.is_empty() {
            return Ok(());
        }
        let assignments: Vec<String> = tunables
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        let output = Command::new(&self.sysctl_cmd)
            .args(&assignments)
            .output()
            .map_err(|err| anyhow::anyhow!("spawn {}: {err}", self.sysctl_cmd))?;
        if !output.status.success() {
            anyhow::bail!(
                "{} exited with {}: {}",
                self.sysctl_cmd,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }

    fn reconfigure_wan(&self) -> anyhow::Result<()> {
        let Some(cmd) = self.wan_reload_cmd.as_deref() else {
            // No reconfigure hook on this host; the persisted settings apply
            // at the next interface cycle.
            return Ok(());
        };
        let output = Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .output()
            .map_err(|err| anyhow::anyhow!("spawn wan reload: {err}"))?;
        if !output.status.success() {
            anyhow::bail!(
                "wan reload exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// Does nothing; for tests and hosts where reloads are handled out of band.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReloader;

impl Reloader for NoopReloader {
    fn apply_runtime_tunables(&self, _tunables: &[(&str, &str)]) -> anyhow::Result<()> {
        Ok(())
    }

    fn reconfigure_wan(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
