// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! Checker flags

use log::trace;

use crate::case::CaseRecord;
use crate::driver::Result;

/// Checker flags
#[derive(Clone, Debug)]
pub struct Flags {
    /// Raw `--case` arguments, validated but kept verbatim so the driver can
    /// assemble them into the synthetic `<cli>` fixture
    pub inline_cases: Vec<String>,
}

impl Flags {
    pub fn new() -> Flags {
        Flags {
            inline_cases: Vec::new(),
        }
    }

    pub fn process_clap_matches(&mut self, matches: &clap::ArgMatches) -> Result<()> {
        for case_arg in matches.values_of_os("case").into_iter().flatten() {
            let case_arg = case_arg
                .to_str()
                .ok_or_else(|| format!("non utf-8 argument for --case flag: {:?}", case_arg))?;
            // validate now so a bad inline case is reported as a usage error
            case_arg
                .parse::<CaseRecord>()
                .map_err(|e| format!("invalid argument for --case flag: {}", e))?;
            trace!("Flags::process_clap_matches() inline case = {:?}", case_arg);
            self.inline_cases.push(case_arg.to_owned());
        }

        Ok(())
    }
}

impl std::default::Default for Flags {
    fn default() -> Flags {
        Flags::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::driver::Driver;

    #[test]
    fn flags_inline_case_parsing() {
        let mut driver = Driver::new();
        driver.parse_args_from_str(&["--case=ab|12,a1|a2|b1|b2"]).unwrap();
        assert_eq!(driver.flags.inline_cases, &["ab|12,a1|a2|b1|b2"]);
    }

    #[test]
    fn flags_inline_case_malformed() {
        use crate::driver::ErrorKind;
        let mut driver = Driver::new();
        let error = driver.parse_args_from_str(&["--case=no-comma"]).unwrap_err();
        match error.kind() {
            ErrorKind::Generic(message) => {
                assert!(message.contains("invalid argument for --case flag"))
            },
            _ => panic!("wrong error kind: {:?}", error),
        }
    }

    #[test]
    fn flags_clearing() {
        let mut driver = Driver::new();
        driver.parse_args_from_str(&["--case=ab,a|b"]).unwrap();
        assert_eq!(driver.flags.inline_cases, &["ab,a|b"]);

        driver.clear_flags();
        assert!(driver.flags.inline_cases.is_empty());

        driver.parse_args_from_str(&["--case=x|12,x1|x2"]).unwrap();
        assert_eq!(driver.flags.inline_cases, &["x|12,x1|x2"]);
    }

    #[test]
    fn flags_inline_case_repeatable() {
        let mut driver = Driver::new();
        driver
            .parse_args_from_str(&["--case=ab,a|b", "--case=x|12,x1|x2"])
            .unwrap();
        assert_eq!(driver.flags.inline_cases.len(), 2);
    }
}
