use assert_cmd::Command;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};
use tempfile::TempDir;

#[derive(Debug)]
pub struct SummaryRun {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
    pub duration: Duration,
    pub log_path: PathBuf,
}

/// A scratch project directory laid out like a cargo workspace:
/// `target/criterion` for inputs and `benches/archive` for outputs.
pub struct SummaryWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub log_dir: PathBuf,
}

impl SummaryWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        let log_dir = root.join("logs");
        fs::create_dir_all(&log_dir).expect("log dir");
        Self {
            temp_dir,
            root,
            log_dir,
        }
    }

    pub fn criterion_dir(&self) -> PathBuf {
        self.root.join("target").join("criterion")
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.root.join("benches").join("archive")
    }

    /// Write `<criterion>/<benchmark>/<parameter>/new/estimates.json`.
    pub fn write_estimate(&self, benchmark: &str, parameter: &str, mean_ns: f64) {
        self.write_raw(
            benchmark,
            parameter,
            &format!(
                r#"{{"mean":{{"confidence_interval":{{"confidence_level":0.95,"lower_bound":{mean_ns},"upper_bound":{mean_ns}}},"point_estimate":{mean_ns},"standard_error":0.0}}}}"#
            ),
        );
    }

    pub fn write_raw(&self, benchmark: &str, parameter: &str, body: &str) {
        let dir = self.criterion_dir().join(benchmark).join(parameter).join("new");
        fs::create_dir_all(&dir).expect("estimate dir");
        fs::write(dir.join("estimates.json"), body).expect("write estimates");
    }

    pub fn archives(&self) -> Vec<String> {
        list_file_names(&self.archive_dir())
    }
}

pub fn list_file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

pub fn run_summary<I, S>(workspace: &SummaryWorkspace, args: I, label: &str) -> SummaryRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_summary_with_env(
        workspace,
        args,
        std::iter::empty::<(String, String)>(),
        label,
    )
}

pub fn run_summary_with_env<I, S, E, K, V>(
    workspace: &SummaryWorkspace,
    args: I,
    env_vars: E,
    label: &str,
) -> SummaryRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bench-summary"));
    cmd.current_dir(&workspace.root);
    cmd.args(args);
    cmd.env_remove("BENCH_SUMMARY_CRITERION_DIR");
    cmd.env_remove("BENCH_SUMMARY_ARCHIVE_DIR");
    cmd.env_remove("BENCH_SUMMARY_NO_ARCHIVE");
    cmd.envs(env_vars);
    cmd.env("RUST_LOG", "bench_summary=debug");
    cmd.env("RUST_BACKTRACE", "1");

    let start = Instant::now();
    let output = cmd.output().expect("run bench-summary");
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let log_path = workspace.log_dir.join(format!("{label}.log"));
    let timestamp = SystemTime::now();
    let log_body = format!(
        "label: {label}\nstarted: {:?}\nduration: {:?}\nstatus: {}\nargs: {:?}\ncwd: {}\n\nstdout:\n{}\n\nstderr:\n{}\n",
        timestamp,
        duration,
        output.status,
        cmd.get_args().collect::<Vec<_>>(),
        workspace.root.display(),
        stdout,
        stderr
    );
    fs::write(&log_path, log_body).expect("write log");

    SummaryRun {
        stdout,
        stderr,
        status: output.status,
        duration,
        log_path,
    }
}
