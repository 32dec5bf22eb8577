// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! Cartesian product of symbol groups
//!
//! A [`Group`][] holds the candidate symbols for one position of a
//! combination. [`generate`][] picks exactly one symbol from each group, in
//! every possible way, and joins each pick into a single string.

use log::trace;

/// One symbol of a combination
///
/// Typically a single character, but nothing here assumes that; the fixture
/// syntax in [`case`][crate::case] is what restricts symbols to one character.
pub type Symbol = String;

/// The ordered candidate symbols for one position of a combination
pub type Group = Vec<Symbol>;

/// Generate every combination of one symbol per group
///
/// Output strings are the separator-free concatenation of the chosen symbols
/// in group order. The output sequence is ordered: the last group varies
/// fastest and the first group slowest, so e.g. groups `ab` and `12` produce
/// `a1 a2 b1 b2`. The order is deterministic and part of the contract.
///
/// Two edge cases fall out of the product definition and are relied upon by
/// callers rather than treated as errors:
///
/// - any empty group makes the whole product empty, so the result is an
///   empty vector;
/// - zero groups yield exactly one combination, the empty string.
///
/// The size of the output is the product of the group sizes, which grows
/// exponentially with the number of groups. Callers keep group counts small;
/// this function does not enforce a bound.
pub fn generate(groups: &[Group]) -> Vec<String> {
    // Fold one group at a time into the accumulated prefixes, instead of
    // recursing per group. Starts from the single empty combination, which
    // is also the zero-groups answer.
    let mut combinations = vec![String::new()];

    for group in groups {
        let mut extended = Vec::with_capacity(combinations.len() * group.len());
        for prefix in &combinations {
            for symbol in group {
                let mut combination = String::with_capacity(prefix.len() + symbol.len());
                combination.push_str(prefix);
                combination.push_str(symbol);
                extended.push(combination);
            }
        }
        combinations = extended;
    }

    trace!(
        "generate() {} groups produced {} combinations",
        groups.len(),
        combinations.len()
    );

    combinations
}
