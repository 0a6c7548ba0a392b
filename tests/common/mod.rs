use assert_cmd::Command;

pub fn taskroll_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskroll").unwrap();
    cmd.env_remove("TASKROLL_ROOT");
    cmd
}
