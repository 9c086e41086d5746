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
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for every launcher-side failure. The only other codes the
/// launcher ever returns are the client script's own.
pub const EXIT_FAILURE: u8 = 84;

/// Everything that can go wrong between startup and handing control to the
/// interpreter. All variants are unrecoverable: the launcher reports them on
/// stderr and exits with [`EXIT_FAILURE`].
#[derive(Error, Debug)]
pub enum LaunchError {
  #[error("current_exe: failed to determine launcher executable path")]
  ResolveExecutable(#[source] std::io::Error),

  #[error("canonicalize: failed to resolve real path of {path}")]
  ResolvePath {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("executable path {0} has no parent directory")]
  NoParentDir(PathBuf),

  #[error("client script not found at {0}")]
  ScriptMissing(PathBuf),

  #[error("spawn: failed to run interpreter via {command}")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },
}
