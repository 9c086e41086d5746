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
use crate::args::LaunchCommand;
use crate::error::EXIT_FAILURE;
use crate::error::LaunchError;
use std::process::Command;
use std::process::ExitCode;
use std::process::ExitStatus;

/// Runs the interpreter with the assembled argument vector and blocks until
/// it exits. No timeout, no signal forwarding: the launcher's only job after
/// the spawn is to wait and relay the exit status.
///
/// A normal child exit is passed through unchanged; abnormal termination
/// (signal) maps to [`EXIT_FAILURE`].
pub fn run(cmd: &LaunchCommand) -> Result<ExitCode, LaunchError> {
  tracing::debug!(argv = ?cmd.argv(), "spawning interpreter");

  let status = Command::new(cmd.program())
    .args(cmd.args())
    .status()
    .map_err(|source| LaunchError::Spawn {
      command: cmd.program().to_string(),
      source,
    })?;

  Ok(ExitCode::from(exit_code_from(status)))
}

fn exit_code_from(status: ExitStatus) -> u8 {
  match status.code() {
    Some(code) => u8::try_from(code).unwrap_or(EXIT_FAILURE),
    None => {
      report_abnormal_exit(status);
      EXIT_FAILURE
    }
  }
}

#[cfg(unix)]
fn report_abnormal_exit(status: ExitStatus) {
  use std::os::unix::process::ExitStatusExt;
  eprintln!(
    "zappy_ai: interpreter terminated by signal {}",
    status.signal().unwrap_or(0)
  );
}

#[cfg(not(unix))]
fn report_abnormal_exit(_status: ExitStatus) {
  eprintln!("zappy_ai: interpreter terminated abnormally");
}
