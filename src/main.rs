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
use std::env;
use std::process::ExitCode;
use zappy_ai::args::build_args;
use zappy_ai::error::EXIT_FAILURE;
use zappy_ai::error::LaunchError;
use zappy_ai::logging::setup_tracing;
use zappy_ai::runner::run;

fn main() -> ExitCode {
  // A broken log setup must not keep the client from starting.
  let _log_guard = match setup_tracing() {
    Ok(guard) => guard,
    Err(err) => {
      eprintln!("zappy_ai: failed to set up logging: {err:#}");
      None
    }
  };

  // Everything after the program name is forwarded to the script verbatim;
  // the launcher recognizes no flags of its own.
  let forwarded: Vec<String> = env::args().skip(1).collect();

  match launch(&forwarded) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("zappy_ai: {:#}", anyhow::Error::new(err));
      ExitCode::from(EXIT_FAILURE)
    }
  }
}

fn launch(forwarded: &[String]) -> Result<ExitCode, LaunchError> {
  let cmd = build_args(forwarded)?;
  tracing::info!(script = %cmd.argv()[2], "launching client");
  run(&cmd)
}
