use colored::*;
use sable::{fen, perft::perft};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::PathBuf, time::Instant};
use thiserror::Error;

const EXIT_FAILURE: i32 = 1;

//======================================================================================================================
// Error handling
//======================================================================================================================

/// Errors that are related to the test harness.
#[derive(Error, Debug)]
enum TestHarnessError {
    #[error("Resource path not found: {0:?}")]
    ResourcePathNotFound(PathBuf),

    #[error("Cannot read the test data file ({0:?})")]
    CannotReadTestDataFile(PathBuf),

    #[error("Cannot parse the test data file: {0}")]
    CannotParseTestDataFile(#[from] serde_json::Error),
}

/// Global errors for this module.
#[derive(Error, Debug)]
enum PerftTestError {
    #[error("Test harness error: {}", .0)]
    TestHarnessError(#[from] TestHarnessError),

    #[error("Unable to parse the fen string: \"{0}\"")]
    UnableToParseFen(String),

    #[error("---- {} ----\nWrong node count at depth {}: expected {}, got {}", .test_name, .depth, .expected, .actual)]
    TestFailed { test_name: String, depth: u8, expected: u64, actual: u64 },
}

//======================================================================================================================
// Test data structures
//======================================================================================================================

/// A test case: a position and its known node counts, the first entry being the count at depth
/// one.
#[derive(Debug, Deserialize)]
struct Test {
    description: String,
    fen: String,
    counts: Vec<u64>,
}

/// Read the tests data from the file.
fn read_tests_data() -> Result<Vec<Test>, PerftTestError> {
    let tests_file_path = get_resource_path("assets/tests/perft_tests.json")?;
    let file = File::open(&tests_file_path).map_err(|_| TestHarnessError::CannotReadTestDataFile(tests_file_path))?;
    let reader = BufReader::new(file);
    let tests: Vec<Test> = serde_json::from_reader(reader).map_err(TestHarnessError::CannotParseTestDataFile)?;
    Ok(tests)
}

//======================================================================================================================
// Test harness
//======================================================================================================================

/// Run a single test case: walk the depths in order so a failure reports the shallowest depth
/// where the counts diverge.
fn run_test(test: &Test) -> Result<(), PerftTestError> {
    let position = fen::parse(&test.fen).or(Err(PerftTestError::UnableToParseFen(test.fen.clone())))?;

    for (index, &expected) in test.counts.iter().enumerate() {
        let depth = (index + 1) as u8;
        let actual = perft(&position, depth);
        if actual != expected {
            return Err(PerftTestError::TestFailed {
                test_name: test.description.clone(),
                depth,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Run all the tests.
fn run_tests() -> Result<(), PerftTestError> {
    let tests = read_tests_data()?;

    println!("\nrunning {} tests", tests.len());

    let start = Instant::now();
    let mut passed = 0;
    let mut failed = 0;
    let mut failures: Vec<PerftTestError> = Vec::new();
    for test in tests {
        print!("test {} ...", test.description);
        let result_string = match run_test(&test) {
            Ok(_) => {
                passed += 1;
                "ok".green()
            }

            Err(error) => {
                failed += 1;
                failures.push(error);
                "FAILED".red()
            }
        };
        println!(" {}", result_string);
    }
    let seconds = start.elapsed().as_secs_f32();

    for failure in failures {
        println!("\n{}", failure)
    }

    println!(
        "\ntest result: {}. {} passed; {} failed; finished in {:.2}s\n",
        if failed == 0 { "ok".green() } else { "FAILED".red() },
        passed,
        failed,
        seconds
    );

    if failed != 0 {
        std::process::exit(EXIT_FAILURE);
    }

    Ok(())
}

//======================================================================================================================
// Main function and helpers
//======================================================================================================================

/// Get the path to a resource file, anchored on the package root so the binary can be run from
/// any directory.
fn get_resource_path(relative_path: &str) -> Result<PathBuf, TestHarnessError> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(relative_path);

    if !path.exists() {
        return Err(TestHarnessError::ResourcePathNotFound(path));
    }

    Ok(path)
}

/// The main function for the test harness. It will run the tests and print any unexpected errors.
fn main() -> Result<(), PerftTestError> {
    if let Err(error) = run_tests() {
        eprintln!("{}", error);
        std::process::exit(EXIT_FAILURE)
    }
    Ok(())
}
