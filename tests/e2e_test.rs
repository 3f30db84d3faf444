/// End-to-end tests for the CLI
use std::path::PathBuf;

fn fixtures_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn snapshot_path(name: &str) -> String {
    fixtures_path(name)
        .join("build-snapshot.yml")
        .to_string_lossy()
        .into_owned()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::snapshot_path;
    use assert_cmd::cargo::cargo_bin_cmd;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library")])
            .assert()
            .code(0);
    }

    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("gradle-model").arg("--help").assert().code(0);
    }

    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("gradle-model").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("gradle-model")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_conflicting_sources() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-m", "model.bin"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - snapshot does not exist
    #[test]
    fn test_exit_code_missing_snapshot() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", "/nonexistent/path/build-snapshot.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_exit_code_missing_project_dir() {
        cargo_bin_cmd!("gradle-model")
            .args(["--project-dir", "/nonexistent/gradle/project"])
            .assert()
            .code(3);
    }

    /// Failed configurations are data unless the caller asks otherwise
    #[test]
    fn test_exit_code_failures_are_tolerated_by_default() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("broken-classpath")])
            .assert()
            .code(0);
    }

    /// Exit code 1: resolution failures with --fail-on-resolution-error
    #[test]
    fn test_exit_code_fail_on_resolution_error() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("broken-classpath"), "--fail-on-resolution-error"])
            .assert()
            .code(1)
            .stderr(predicates::str::contains("compileClasspath"));
    }
}

mod output_tests {
    use super::snapshot_path;
    use assert_cmd::cargo::cargo_bin_cmd;
    use gradle_model::prelude::*;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_json_output_to_stdout() {
        let output = cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-q"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let project = &json["gradle_project"];
        assert_eq!(project["name"], "app");
        assert_eq!(project["group"], "com.example");

        let classpath = &project["name_to_configuration"]["runtimeClasspath"];
        assert_eq!(classpath["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(classpath["direct_resolved"][0]["version"], "1.2");
        assert_eq!(classpath["extends_from"][0], "implementation");
    }

    #[test]
    fn test_tree_output() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-f", "tree", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Project ':' (com.example:app:1.0.0)"))
            .stdout(predicate::str::contains("runtimeClasspath - Runtime classpath of source set 'main'."))
            .stdout(predicate::str::contains("\\--- org.example:lib:1.0 -> 1.2"))
            .stdout(predicate::str::contains("org.example:other:2.0"));
    }

    #[test]
    fn test_tree_output_shows_failures() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("broken-classpath"), "--format", "tree", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "FAILED: org.gradle.api.artifacts.ResolveException: Could not resolve org.example:missing:9.9",
            ));
    }

    #[test]
    fn test_progress_goes_to_stderr() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library")])
            .assert()
            .success()
            .stderr(predicate::str::contains("Extracting dependency model for project 'app'"))
            .stderr(predicate::str::contains("Writing model as JSON"));
    }

    #[test]
    fn test_binary_output_can_be_loaded_back() {
        let temp_dir = TempDir::new().unwrap();
        let blob = temp_dir.path().join("model.bin");

        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-f", "binary", "-q", "-o"])
            .arg(&blob)
            .assert()
            .success();

        let model = codec::decode(&fs::read(&blob).unwrap()).unwrap();
        let lib = model
            .gradle_project()
            .find_dependency("runtimeClasspath", "org.example", "lib")
            .unwrap();
        assert_eq!(lib.version(), "1.2");

        let json_out = temp_dir.path().join("model.json");
        cargo_bin_cmd!("gradle-model")
            .args(["-q", "-m"])
            .arg(&blob)
            .arg("-o")
            .arg(&json_out)
            .assert()
            .success();

        let reloaded = codec::from_json(&fs::read_to_string(&json_out).unwrap()).unwrap();
        assert_eq!(reloaded, model);
    }

    #[test]
    fn test_exclude_skips_resolution() {
        let output = cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-e", "runtime*", "-q"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let model = codec::from_json(&String::from_utf8(output.stdout).unwrap()).unwrap();
        let classpath = model.gradle_project().configuration("runtimeClasspath").unwrap();
        assert_eq!(classpath.resolved().count(), 0);
        assert_eq!(classpath.requested().len(), 1);
    }

    #[test]
    fn test_output_to_missing_directory_fails() {
        cargo_bin_cmd!("gradle-model")
            .args(["-s", &snapshot_path("java-library"), "-o", "/nonexistent/dir/model.json"])
            .assert()
            .code(3);
    }
}
