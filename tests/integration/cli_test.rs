use std::process::Command;

fn pgrid() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pgrid"))
}

#[test]
fn test_count_seeded_is_deterministic() {
    let run = || {
        let output = pgrid()
            .args(["count", "--rows", "50", "--cols", "40", "--length", "3"])
            .args(["--workers", "4", "--seed", "42"])
            .output()
            .expect("Failed to execute pgrid");
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .find(|l| l.starts_with("Palindromes:"))
            .map(str::to_string)
            .expect("summary line missing")
    };

    assert_eq!(run(), run());
}

#[test]
fn test_count_verbose_and_print_grid() {
    let output = pgrid()
        .args(["count", "--rows", "4", "--cols", "6", "--length", "3"])
        .args(["-j", "3", "--seed", "1", "--print-grid", "--verbose"])
        .output()
        .expect("Failed to execute pgrid");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid_lines: Vec<&str> = stdout.lines().take(4).collect();
    assert!(
        grid_lines
            .iter()
            .all(|l| l.len() == 6 && l.bytes().all(|b| b.is_ascii_lowercase())),
        "unexpected grid output: {stdout}"
    );
    assert!(stdout.contains("Workers: 3"));
    assert!(stdout.contains("worker  2"));
    assert!(stdout.contains("horizontal:"));
}

#[test]
fn test_count_rejects_zero_workers() {
    let output = pgrid()
        .args(["count", "--rows", "5", "--cols", "5", "--workers", "0"])
        .output()
        .expect("Failed to execute pgrid");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("worker count must be at least 1"));
}

#[test]
fn test_count_rejects_zero_rows() {
    let output = pgrid()
        .args(["count", "--rows", "0", "--cols", "5"])
        .output()
        .expect("Failed to execute pgrid");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid grid dimensions"));
}

#[test]
fn test_sweep_output_shape() {
    let output = pgrid()
        .args(["sweep", "--small", "6", "--rows", "30", "--cols", "30"])
        .args(["--min-len", "3", "--max-len", "4", "--max-workers", "2"])
        .args(["--seed", "7"])
        .output()
        .expect("Failed to execute pgrid");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Running a small 6x6 test"));
    assert!(stdout.contains("Running full 30x30 test"));
    assert!(stdout.contains("Using 1 threads:"));
    assert!(stdout.contains("Using 2 threads:"));

    let records: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("palindromes of length"))
        .collect();
    // 2 small + 2 workers x 2 lengths
    assert_eq!(records.len(), 6);

    // Same grid and length give the same count for 1 and 2 workers
    let count = |line: &str| line.split_whitespace().next().unwrap().to_string();
    assert_eq!(count(records[2]), count(records[4]));
    assert_eq!(count(records[3]), count(records[5]));
}
