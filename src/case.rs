// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! Fixture cases
//!
//! A fixture is a plain text file with one case per non-blank line:
//!
//! ```text
//! <groups>,<expected>
//! ```
//!
//! `<groups>` is a `|`-delimited list of groups where every character of a
//! group is one symbol; `<expected>` is a `|`-delimited list of combination
//! strings the case expects to be generated. For example `ab|12,a1|a2|b1|b2`
//! pairs the groups `ab` and `12` with four expected combinations.
//!
//! A line that does not split into exactly two fields around a comma is a
//! syntax error, which [`parse_fixture`][] treats as fatal for the whole
//! fixture.

use std::str::FromStr;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::combine::Group;
use crate::driver::{ErrorKind, Result};

/// One verification case parsed from a fixture line
///
/// Immutable once parsed.
#[derive(Clone, Debug)]
pub struct CaseRecord {
    /// The input groups, in position order
    pub groups: Vec<Group>,

    /// The joined combination strings this case expects to be generated
    pub expected: Vec<String>,

    /// 1-based fixture line this case came from; `0` for cases parsed
    /// outside a fixture
    pub line: usize,
}

impl CaseRecord {
    /// Parse one fixture line, recording its 1-based line number
    pub fn parse(s: &str, line: usize) -> Result<CaseRecord, String> {
        lazy_static! {
            static ref REGEX: Regex = Regex::new(r"^([^,]*),([^,]*)$").unwrap();
        }
        let captures = REGEX.captures(s).ok_or(format!(
            "malformed case `{}`; expected `<groups>,<expected>`",
            s
        ))?;

        // assuming unwrap is safe because neither group is optional
        let groups = captures
            .get(1)
            .unwrap()
            .as_str()
            .split('|')
            .map(|group| group.chars().map(|symbol| symbol.to_string()).collect())
            .collect();
        let expected = captures
            .get(2)
            .unwrap()
            .as_str()
            .split('|')
            .map(str::to_owned)
            .collect();

        trace!(
            "CaseRecord::from_str() groups = {:?} expected = {:?}",
            groups,
            expected
        );

        Ok(CaseRecord {
            groups,
            expected,
            line,
        })
    }
}

impl FromStr for CaseRecord {
    type Err = String;
    fn from_str(s: &str) -> Result<CaseRecord, Self::Err> {
        CaseRecord::parse(s, 0)
    }
}

/// Parse every case of a fixture
///
/// Lines that are blank after trimming are skipped. Any malformed line makes
/// the whole fixture fail with [`ErrorKind::FixtureSyntax`][], naming the
/// fixture and line; no cases are returned in that event.
pub fn parse_fixture(name: &str, content: &str) -> Result<Vec<CaseRecord>> {
    let mut cases = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let case =
            CaseRecord::parse(line, index + 1).map_err(|message| ErrorKind::FixtureSyntax {
                filename: name.to_owned(),
                line: index + 1,
                message,
            })?;
        cases.push(case);
    }

    Ok(cases)
}
