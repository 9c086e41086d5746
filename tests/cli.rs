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
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Copies the built launcher into `root` next to a `src/main.py` fixture.
/// The launcher resolves the script relative to its own location, so every
/// test gets an isolated install tree.
fn install_launcher(root: &Path, script_body: &str) -> PathBuf {
  let exe = root.join("zappy_ai");
  fs::copy(cargo::cargo_bin!("zappy_ai"), &exe).unwrap();
  fs::create_dir_all(root.join("src")).unwrap();
  fs::write(root.join("src/main.py"), script_body).unwrap();
  exe
}

const ECHO_ARGS_SCRIPT: &str = r#"
import sys
print("argv:" + "|".join(sys.argv[1:]))
"#;

const EXIT_WITH_FIRST_ARG_SCRIPT: &str = r#"
import sys
sys.exit(int(sys.argv[1]))
"#;

#[test]
fn forwards_arguments_verbatim() {
  let temp = tempdir().unwrap();
  let exe = install_launcher(temp.path(), ECHO_ARGS_SCRIPT);

  let mut cmd = Command::new(exe);
  cmd.arg("127.0.0.1").arg("-p").arg("4242").arg("--team=ai");

  // Flag-looking arguments must reach the script untouched.
  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains("argv:127.0.0.1|-p|4242|--team=ai"));
}

#[test]
fn zero_arguments_reach_script_as_empty_argv_tail() {
  let temp = tempdir().unwrap();
  let exe = install_launcher(temp.path(), ECHO_ARGS_SCRIPT);

  Command::new(exe)
    .assert()
    .success()
    .stdout(predicate::str::contains("argv:\n"));
}

#[test]
fn propagates_exact_exit_code() {
  let temp = tempdir().unwrap();
  let exe = install_launcher(temp.path(), EXIT_WITH_FIRST_ARG_SCRIPT);

  Command::new(&exe).arg("0").assert().success();
  Command::new(&exe).arg("7").assert().code(7);
  Command::new(&exe).arg("84").assert().code(84);
}

#[test]
fn missing_script_exits_84_with_diagnostic() {
  let temp = tempdir().unwrap();
  let exe = temp.path().join("zappy_ai");
  fs::copy(cargo::cargo_bin!("zappy_ai"), &exe).unwrap();

  Command::new(exe)
    .assert()
    .code(84)
    .stderr(predicate::str::contains("client script not found"));
}

#[test]
fn resolution_tracks_the_executable_location() {
  let temp = tempdir().unwrap();
  let first = temp.path().join("first");
  let second = temp.path().join("second");
  fs::create_dir_all(&first).unwrap();
  fs::create_dir_all(&second).unwrap();

  let exe = install_launcher(&first, "print(\"from first\")\n");
  fs::create_dir_all(second.join("src")).unwrap();
  fs::write(second.join("src/main.py"), "print(\"from second\")\n").unwrap();

  Command::new(&exe)
    .assert()
    .success()
    .stdout(predicate::str::contains("from first"));

  // Moving the binary moves the resolved script with it.
  let moved = second.join("zappy_ai");
  fs::rename(&exe, &moved).unwrap();

  Command::new(&moved)
    .assert()
    .success()
    .stdout(predicate::str::contains("from second"));
}

#[cfg(unix)]
#[test]
fn symlinked_launcher_resolves_against_real_location() {
  let temp = tempdir().unwrap();
  let install = temp.path().join("install");
  fs::create_dir_all(&install).unwrap();
  let exe = install_launcher(&install, "print(\"via symlink\")\n");

  let link = temp.path().join("zappy_ai_link");
  std::os::unix::fs::symlink(&exe, &link).unwrap();

  Command::new(&link)
    .assert()
    .success()
    .stdout(predicate::str::contains("via symlink"));
}
