use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_secrets;

/// Write a JSON crash report for a panic into the crash report directory.
///
/// Runs inside the panic hook, so nothing here may panic: every failure
/// yields `None`. Message and backtrace pass through `sanitize_secrets`
/// first, so a key that ended up in a panic message is not written out.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;
    let location = info
        .location()
        .map(|loc| (loc.file(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();

    let report = build_report(&payload_message(info.payload()), location, &backtrace);
    write_report(&dir, &report)
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

fn build_report(message: &str, location: Option<(&str, u32, u32)>, backtrace: &str) -> Value {
    json!({
        "app": "gemchat",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "platform": format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        "message": sanitize_secrets(message),
        "location": location.map(|(file, line, column)| json!({
            "file": file,
            "line": line,
            "column": column,
        })),
        "backtrace": sanitize_secrets(backtrace),
    })
}

/// Owner-only permissions on Unix.
fn write_report(dir: &Path, report: &Value) -> Option<PathBuf> {
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f");
    let path = dir.join(format!("gemchat-crash-{stamp}.json"));

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_vec_pretty(report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
