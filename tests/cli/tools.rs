//! Exact output line per tool.

use crate::support::*;

const EXPECTED: &[(&str, &str)] = &[
    ("github", "echo 'FOO=bar' >> $GITHUB_ENV\n"),
    (
        "azure-devops",
        "echo '##vso[task.setvariable variable=FOO;issecret=true;]bar'\n",
    ),
    ("bamboo", "(FOO)=(.[bar])\n"),
    ("bitbucket", "export (FOO)=\"(.[bar])\"\n"),
    (
        "circleci",
        "echo '\"'\"'export (FOO)=\"(.[bar])\"'\"'\"' >> $BASH_ENV\n",
    ),
    (
        "teamcity",
        "echo '\"'\"'##teamcity[setParameter name=\"(FOO)\" value=\"(.[bar])\"]'\"'\"'\"\n",
    ),
    ("linux", "declare -x FOO='bar'\n"),
];

#[test]
fn test_every_tool_writes_documented_line() {
    for (tool, line) in EXPECTED {
        let t = Test::with_response(FOO_BAR);

        let output = t.runb(tool);
        assert_success(&output);

        assert_eq!(&t.vars_file(), line, "tool {}", tool);
    }
}

#[cfg(unix)]
#[test]
fn test_linux_output_is_sourceable() {
    let t = Test::with_response(FOO_BAR);
    assert_success(&t.runb("linux"));

    let output = std::process::Command::new("bash")
        .current_dir(t.dir.path())
        .args(["-c", "source ./.runb.vars && printf '%s' \"$FOO\""])
        .output();

    // bash is not guaranteed on every runner
    if let Ok(output) = output {
        if output.status.success() {
            assert_eq!(stdout(&output), "bar");
        }
    }
}
