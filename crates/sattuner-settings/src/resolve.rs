use crate::model::SattunerConfigV1;
use camino::Utf8PathBuf;

const DEFAULT_STORE_ROOT: &str = "/conf";
const DEFAULT_LOADER_DIR: &str = "/boot/loader.conf.d";
const DEFAULT_CLASSIC_LOADER_PATH: &str = "/boot/loader.conf.local";
const DEFAULT_SYSCTL_CMD: &str = "sysctl";

/// CLI flag overrides; these win over file values.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub store_root: Option<Utf8PathBuf>,
    pub loader_dir: Option<Utf8PathBuf>,
    pub classic_loader_path: Option<Utf8PathBuf>,
}

/// Fully resolved settings consumed by the use cases.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSettings {
    pub store_root: Utf8PathBuf,
    pub loader_dir: Utf8PathBuf,
    pub classic_loader_path: Utf8PathBuf,
    pub sysctl_cmd: String,
    pub wan_reload_cmd: Option<String>,
}

pub fn resolve_settings(cfg: SattunerConfigV1, overrides: Overrides) -> ResolvedSettings {
    ResolvedSettings {
        store_root: overrides
            .store_root
            .or(cfg.store_root.map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_ROOT)),
        loader_dir: overrides
            .loader_dir
            .or(cfg.loader_dir.map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_LOADER_DIR)),
        classic_loader_path: overrides
            .classic_loader_path
            .or(cfg.classic_loader_path.map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CLASSIC_LOADER_PATH)),
        sysctl_cmd: cfg
            .sysctl_cmd
            .unwrap_or_else(|| DEFAULT_SYSCTL_CMD.to_string()),
        wan_reload_cmd: cfg.wan_reload_cmd,
    }
}
