//! Launch the host's default viewer for a written worksheet.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Program and leading arguments for the platform opener.
fn opener() -> (&'static str, Vec<&'static str>) {
    if cfg!(target_os = "windows") {
        ("rundll32.exe", vec!["url.dll,FileProtocolHandler"])
    } else if cfg!(target_os = "macos") {
        ("open", Vec::new())
    } else {
        ("xdg-open", Vec::new())
    }
}

/// Spawn the default viewer on `path` without waiting for it to exit.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let (program, args) = opener();
    spawn_opener(program, &args, path)
}

/// Spawn `program args.. path` detached from our stdio. A missing or
/// unlaunchable program becomes [`Error::Viewer`] naming the program.
pub fn spawn_opener(program: &str, args: &[&str], path: &Path) -> Result<()> {
    debug!(program, path = %path.display(), "opening worksheet");
    Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|err| Error::Viewer(format!("{program}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_matches_platform() {
        let (program, _) = opener();
        if cfg!(target_os = "linux") {
            assert_eq!(program, "xdg-open");
        }
        assert!(!program.is_empty());
    }

    #[test]
    fn missing_opener_is_a_viewer_error() {
        let program = "arith-drill-no-such-viewer";
        let err = spawn_opener(program, &[], Path::new("sheet.html")).unwrap_err();
        assert!(matches!(err, Error::Viewer(_)));
        assert!(err.to_string().contains(program), "{err}");
    }
}
