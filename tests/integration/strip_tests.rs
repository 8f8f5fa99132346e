//! Integration tests for annotation stripping
//!
//! These tests run the removal rules against the Java fixtures.

use lombok_strip::strip::{strip, Profile, RuleSet};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(rel: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(rel))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", rel, e))
}

/// True when every line of `needle` appears in `haystack` in the same order
fn is_line_subsequence(needle: &str, haystack: &str) -> bool {
    let mut lines = haystack.lines();
    needle.lines().all(|wanted| lines.any(|line| line == wanted))
}

#[test]
fn test_fixtures_match_expected() {
    for (input, expected) in [
        ("java/model/User.java", "expected/User.java"),
        ("java/model/Boatman.java", "expected/Boatman.java"),
        ("java/service/UserService.java", "expected/UserService.java"),
    ] {
        assert_eq!(
            strip(&read_fixture(input)),
            read_fixture(expected),
            "Unexpected output for {}",
            input
        );
    }
}

#[test]
fn test_clean_and_inline_fixtures_unchanged() {
    for input in ["java/service/Clean.java", "java/model/Inline.java"] {
        let source = read_fixture(input);
        assert_eq!(strip(&source), source, "{} should be untouched", input);
    }
}

#[test]
fn test_idempotent_on_fixtures() {
    for input in [
        "java/model/User.java",
        "java/model/Boatman.java",
        "java/model/Inline.java",
        "java/service/UserService.java",
        "java/service/Clean.java",
    ] {
        let once = strip(&read_fixture(input));
        assert_eq!(strip(&once), once, "Second pass changed {}", input);
    }
}

#[test]
fn test_output_preserves_remaining_lines_in_order() {
    let source = read_fixture("java/model/User.java");
    let stripped = strip(&source);

    // Output is a subsequence of the input, so only whole lines went away
    assert!(is_line_subsequence(&stripped, &source));
    assert!(stripped.contains("    private LocalDateTime createdAt = LocalDateTime.now();\n"));
    assert!(!stripped.contains("lombok"));
    assert!(!stripped.contains("@Builder"));
}

#[test]
fn test_mixed_scenario() {
    let input = "import lombok.Data;\nimport lombok.Builder;\n@Data\n@Builder\npublic class User {\n    private String name;\n}\n";
    assert_eq!(strip(input), "public class User {\n    private String name;\n}\n");
}

#[test]
fn test_minimal_profile_on_fixture() {
    let minimal = RuleSet::new(Profile::Minimal).unwrap();
    let stripped = minimal.strip(&read_fixture("java/model/Boatman.java"));

    assert!(!stripped.contains("import lombok.*;"));
    assert!(!stripped.contains("@Data\n"));
    assert!(stripped.contains("@EqualsAndHashCode(callSuper = false)\n"));
    assert!(stripped.contains("    @Builder.Default\n"));

    let service = minimal.strip(&read_fixture("java/service/UserService.java"));
    assert!(service.contains("import lombok.extern.slf4j.Slf4j;"));
    assert!(!service.contains("import lombok.RequiredArgsConstructor;"));
}

#[test]
fn test_crlf_file() {
    let input = "import lombok.Data;\r\n\r\n@Data\r\npublic class A {\r\n}\r\n";
    assert_eq!(strip(input), "\r\npublic class A {\r\n}\r\n");
}

#[test]
fn test_counted_totals_match_removed_lines() {
    let rules = RuleSet::new(Profile::Full).unwrap();
    let source = read_fixture("java/model/User.java");
    let (stripped, counts) = rules.strip_counted(&source);

    let removed: usize = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(removed, source.lines().count() - stripped.lines().count());
    assert_eq!(removed, 9);
}
