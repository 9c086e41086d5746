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
use crate::paths;
use std::path::Path;

/// Program-search wrapper used to locate the interpreter on `PATH`.
pub const ENV_WRAPPER: &str = "/usr/bin/env";

/// Interpreter name passed to the wrapper. Fixed, not configurable.
pub const INTERPRETER: &str = "python3";

/// The fully assembled exec-style argument vector for the child process.
///
/// Layout is always `[/usr/bin/env, python3, <script path>, forwarded...]`.
/// All entries are uniformly owned; the terminating NULL of the underlying
/// execvp call is supplied by `std::process::Command`, not stored here.
#[derive(Debug, Clone)]
pub struct LaunchCommand {
  argv: Vec<String>,
}

impl LaunchCommand {
  /// The program to execute, i.e. the wrapper itself.
  pub fn program(&self) -> &str {
    &self.argv[0]
  }

  /// Everything after the program: interpreter, script path, forwarded args.
  pub fn args(&self) -> &[String] {
    &self.argv[1..]
  }

  /// The complete vector, wrapper included.
  pub fn argv(&self) -> &[String] {
    &self.argv
  }
}

/// Builds the child's argument vector.
///
/// `forwarded` is the launcher's own argv minus the program name; entries are
/// copied verbatim, never parsed. Fails only if the script path cannot be
/// resolved.
pub fn build_args(forwarded: &[String]) -> Result<LaunchCommand, LaunchError> {
  let script = paths::resolve_script_path()?;
  Ok(assemble(&script, forwarded))
}

fn assemble(script: &Path, forwarded: &[String]) -> LaunchCommand {
  let mut argv = Vec::with_capacity(3 + forwarded.len());
  argv.push(ENV_WRAPPER.to_string());
  argv.push(INTERPRETER.to_string());
  argv.push(script.to_string_lossy().into_owned());
  argv.extend(forwarded.iter().cloned());
  LaunchCommand { argv }
}
