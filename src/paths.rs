// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::error::LaunchError;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Relative location of the client script, anchored at the directory that
/// contains the launcher's real executable.
pub const SCRIPT_SUFFIX: &str = "src/main.py";

/// Resolves the absolute path of the client script.
///
/// The script is expected to sit next to the launcher's executable, so the
/// lookup follows the running binary rather than any compiled-in location:
/// moving the installation moves the resolved path with it. Symlinks to the
/// executable are resolved first so that a symlinked launcher (e.g. one
/// placed in `~/.local/bin`) still finds the script in the install tree.
pub fn resolve_script_path() -> Result<PathBuf, LaunchError> {
  let exe_path = env::current_exe().map_err(LaunchError::ResolveExecutable)?;
  script_path_for(&exe_path)
}

/// Resolution for an explicit executable path. Split out from
/// [`resolve_script_path`] so the directory walk is testable without
/// relocating the test binary.
fn script_path_for(exe_path: &Path) -> Result<PathBuf, LaunchError> {
  let real_exe = fs::canonicalize(exe_path).map_err(|source| LaunchError::ResolvePath {
    path: exe_path.to_path_buf(),
    source,
  })?;

  let exe_dir = real_exe
    .parent()
    .ok_or_else(|| LaunchError::NoParentDir(real_exe.clone()))?;

  let script = exe_dir.join(SCRIPT_SUFFIX);

  // The interpreter would report a missing script with its own exit code,
  // which the launcher must not confuse with a script-chosen one. Catch the
  // broken installation here instead.
  if !script.is_file() {
    return Err(LaunchError::ScriptMissing(script));
  }

  Ok(script)
}
