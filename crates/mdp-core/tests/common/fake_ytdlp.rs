//! Fake yt-dlp executable for integration tests.
//!
//! Materializes a small shell script that honors the slice of the real
//! tool's CLI the proxy uses (`-f`, `-o`, trailing URL) so the fetch
//! orchestration can be exercised end to end without network access.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes `script` as an executable file named `yt-dlp` under `dir` and
/// returns its path.
pub fn install(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("yt-dlp");
    fs::write(&path, script).expect("write fake yt-dlp");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake yt-dlp");
    path
}

/// Script that downloads a fixed MP4 into the output dir and reports it
/// through `requested_downloads`, like a successful real run.
pub const SUCCESS_SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -o) shift; tmpl="$1" ;;
  esac
  shift
done
dir=$(dirname "$tmpl")
out="$dir/Example_Clip_abc123.mp4"
printf 'example-bytes' > "$out"
printf '{"id":"abc123","title":"Example Clip","requested_downloads":[{"filepath":"%s"}]}' "$out"
"#;

/// Script that fails the way the real tool does on an unsupported URL.
pub const FAILURE_SCRIPT: &str = r#"#!/bin/sh
echo "ERROR: Unsupported URL: https://example.com/broken" >&2
exit 1
"#;

/// Script that reports a path that was never written, leaving one other
/// file in the output dir (the directory-scan fallback case).
pub const STALE_PATH_SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -o) shift; tmpl="$1" ;;
  esac
  shift
done
dir=$(dirname "$tmpl")
printf 'leftover-bytes' > "$dir/leftover.m4a"
printf '{"id":"abc123","title":"Example Clip","requested_downloads":[{"filepath":"%s/ghost.mp4"}]}' "$dir"
"#;

/// Script that claims success but produces no file at all.
pub const NO_FILE_SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -o) shift; tmpl="$1" ;;
  esac
  shift
done
dir=$(dirname "$tmpl")
printf '{"id":"abc123","title":"Example Clip","requested_downloads":[{"filepath":"%s/ghost.mp4"}]}' "$dir"
"#;

/// Script that records the requested `-f` expression as the downloaded
/// file's content, so tests can assert what format reached the tool.
pub const ECHO_FORMAT_SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -f) shift; fmt="$1" ;;
    -o) shift; tmpl="$1" ;;
  esac
  shift
done
dir=$(dirname "$tmpl")
out="$dir/single.mp4"
printf '%s' "$fmt" > "$out"
printf '{"id":"abc123","title":"Single","requested_downloads":[{"filepath":"%s"}]}' "$out"
"#;
