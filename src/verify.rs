// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! Case verification
//!
//! A case passes when every expected string appears among the generated
//! combinations. The check is deliberately one-directional: generated
//! strings beyond the expected set do not fail a case. Comparison is by set
//! membership, so duplicate generated strings (concatenation collisions
//! between multi-character symbols) collapse.

use std::collections::HashSet;

use log::debug;

use crate::case::CaseRecord;
use crate::combine;

/// The outcome of verifying one case
#[derive(Clone, Debug)]
pub struct VerificationResult {
    /// 1-based position of the case within its fixture
    pub index: usize,

    /// Whether every expected string was generated
    pub passed: bool,

    /// The expected strings that were not generated, in expectation order
    pub missing: Vec<String>,
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Case {} : {}",
            self.index,
            if self.passed { "OK" } else { "FAIL" }
        )
    }
}

/// Verify a single case
pub fn verify_one(index: usize, case: &CaseRecord) -> VerificationResult {
    let generated: HashSet<String> = combine::generate(&case.groups).into_iter().collect();

    let missing: Vec<String> = case
        .expected
        .iter()
        .filter(|expected| !generated.contains(expected.as_str()))
        .cloned()
        .collect();

    debug!(
        "verify_one(index = {}) generated {} distinct, missing {:?}",
        index,
        generated.len(),
        missing
    );

    VerificationResult {
        index,
        passed: missing.is_empty(),
        missing,
    }
}

/// Verify every case, in order
///
/// Cases are independent; a failing case never prevents later cases from
/// being verified. Indices in the results are 1-based.
pub fn verify(cases: &[CaseRecord]) -> Vec<VerificationResult> {
    cases
        .iter()
        .enumerate()
        .map(|(index, case)| verify_one(index + 1, case))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn case(line: &str) -> CaseRecord {
        line.parse().unwrap()
    }

    #[test]
    fn verify_exact_match_passes() {
        let result = verify_one(1, &case("ab|12,a1|a2|b1|b2"));
        assert!(result.passed);
        assert!(result.missing.is_empty());
        assert_eq!(format!("{}", result), "Case 1 : OK");
    }

    #[test]
    fn verify_missing_expected_fails() {
        // c9 is unreachable from the groups
        let result = verify_one(2, &case("ab|12,a1|a2|b1|b2|c9"));
        assert!(!result.passed);
        assert_eq!(result.missing, &["c9"]);
        assert_eq!(format!("{}", result), "Case 2 : FAIL");
    }

    #[test]
    fn verify_superset_of_expected_passes() {
        // generated a1 a2 b1 b2, only two expected; extras never fail a case
        let result = verify_one(1, &case("ab|12,a1|b2"));
        assert!(result.passed);
    }

    #[test]
    fn verify_collision_still_covers_expected() {
        let record = CaseRecord {
            groups: vec![
                vec!["a".to_owned(), "ab".to_owned()],
                vec!["b".to_owned(), "".to_owned()],
            ],
            expected: vec!["ab".to_owned(), "a".to_owned(), "abb".to_owned()],
            line: 0,
        };
        // four picks collapse to three distinct strings, all expected
        let result = verify_one(1, &record);
        assert!(result.passed);
    }

    #[test]
    fn verify_orders_and_numbers_cases() {
        let cases = vec![case("ab,a|b"), case("ab,a|b|z"), case("x|12,x1|x2")];
        let results = verify(&cases);
        assert_eq!(results.len(), 3);
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert!(results[2].passed);
        assert_eq!(
            results.iter().map(|r| r.index).collect::<Vec<_>>(),
            &[1, 2, 3]
        );
    }
}
