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

//! # zappy-ai
//!
//! Native launcher for the Zappy AI python client. The binary resolves the
//! client script (`src/main.py`) relative to its own executable, hands the
//! interpreter an exec-style argument vector via `/usr/bin/env python3`, and
//! relays the script's exit status as its own. Any launcher-side failure
//! exits with code 84 after reporting the OS error on stderr.
//!
//! ## Core Modules
//!
//! * [`paths`]: Resolves the client script's absolute path from the running
//!   executable's real location.
//! * [`args`]: Assembles the child's argument vector, forwarding the
//!   launcher's own arguments verbatim.
//! * [`runner`]: Spawns the interpreter, waits for it, and maps its
//!   termination status to an exit code.
//! * [`error`]: Defines [`error::LaunchError`] and the failure exit code.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod args;
pub mod error;
pub mod logging;
pub mod paths;
pub mod runner;
