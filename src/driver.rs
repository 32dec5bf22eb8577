// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! Checker entry point
//!
//! The [`Driver`][Driver] registers fixtures, parses them, runs verification
//! over every case, and reports the per-case statuses.

use log::{debug, info};

pub mod error;
pub mod flags;

pub use self::error::{Error, ErrorKind, Result};
pub use self::flags::Flags;

use crate::case::{self, CaseRecord};
use crate::verify::{self, VerificationResult};

/// Permanent data for one registered fixture
///
/// `cases` and `results` are filled in by [`Driver::run_all`][]; an
/// unparsed fixture holds only its name and raw content.
#[derive(Clone, Debug)]
pub struct Fixture {
    /// Display name; a file path, or an angle-bracketed pseudo name such as
    /// `<stdin>` or `<cli>`
    pub name: String,

    /// Raw fixture text
    pub content: String,

    /// Cases parsed from `content`
    pub cases: Vec<CaseRecord>,

    /// Verification outcome per case, in case order
    pub results: Vec<VerificationResult>,
}

/// Main interface for invoking combcheck
#[derive(Clone, Debug)]
pub struct Driver {
    /// Fixtures to verify, in registration order
    ///
    /// Registration order is the reporting order, and case numbering
    /// restarts in each fixture.
    pub fixtures: Vec<Fixture>,

    /// The command line arguments
    pub flags: Flags,
}

impl Driver {
    pub fn new() -> Self {
        Driver::default()
    }

    /// Read command-line arguments from process environment
    pub fn parse_args_from_env(&mut self) -> Result<()> {
        let app = generate_clap(true);
        self.process_clap_matches(app.get_matches_safe()?)
    }

    /// Read command-line arguments from string
    ///
    /// Do not include the binary name as first argument
    pub fn parse_args_from_str(
        &mut self,
        input: impl IntoIterator<Item = impl Into<std::ffi::OsString> + Clone>,
    ) -> Result<()> {
        let app = generate_clap(false).setting(clap::AppSettings::NoBinaryName);
        self.process_clap_matches(app.get_matches_from_safe(input)?)
    }

    fn process_clap_matches(&mut self, matches: clap::ArgMatches) -> Result<()> {
        debug!("Driver::process_clap_matches() matches = {:?}", &matches);
        self.flags.process_clap_matches(&matches)?;

        if let Some(files) = matches.values_of("FILES") {
            for file in files {
                self.add_input_file(file)?;
            }
        }

        if !self.flags.inline_cases.is_empty() {
            let content = self.flags.inline_cases.join("\n");
            self.add_input_str("<cli>", &content);
        }

        Ok(())
    }

    pub fn clear_flags(&mut self) {
        self.flags = Flags::default();
    }

    /// Adds the contents of the given path to the list of fixtures
    ///
    /// The path `-` reads standard input instead, under the name `<stdin>`.
    pub fn add_input_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let stdin_path: &std::path::Path = "-".as_ref();
        let path = path.as_ref();
        info!("Driver::add_input_file() path = {:?}", path);

        let name;
        let content;

        if path == stdin_path {
            info!("Driver::add_input_file() reading from stdin");
            use std::io::Read;

            name = "<stdin>".to_owned();
            let mut buffer = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buffer)
                .map_err(|e| ErrorKind::InputFileError {
                    filename: name.clone(),
                    error: e,
                })?;
            content = buffer;
        } else {
            name = path.to_string_lossy().into_owned();
            info!("Driver::add_input_file() reading from file");
            content = std::fs::read_to_string(path).map_err(|e| ErrorKind::InputFileError {
                filename: name.clone(),
                error: e,
            })?;
        }

        self.fixtures.push(Fixture {
            name,
            content,
            cases: Vec::new(),
            results: Vec::new(),
        });

        Ok(())
    }

    /// Adds the given string to the list of fixtures
    ///
    /// `name` must be wrapped in angle brackets (<>) to help distinguish from
    /// file paths
    pub fn add_input_str(&mut self, name: &str, content: &str) {
        assert!(
            name.starts_with("<") && name.ends_with(">"),
            "fixture name must be enclosed in <> brackets"
        );
        info!(
            "Driver::add_input_str() name = {:?} content = {:?}",
            name, content
        );

        self.fixtures.push(Fixture {
            name: name.to_owned(),
            content: content.to_owned(),
            cases: Vec::new(),
            results: Vec::new(),
        });
    }

    /// Parse and verify every registered fixture
    ///
    /// Every fixture must parse before any case is verified: a syntax error
    /// anywhere aborts the run with no partial results. Verification
    /// failures are not errors; they are recorded per case and surfaced by
    /// [`report_results`][Driver::report_results] and
    /// [`success`][Driver::success].
    pub fn run_all(&mut self) -> Result<()> {
        for fixture in &mut self.fixtures {
            info!("Driver::run_all() parsing fixture = {:?}", &fixture.name);
            fixture.cases = case::parse_fixture(&fixture.name, &fixture.content)?;
        }

        for fixture in &mut self.fixtures {
            info!(
                "Driver::run_all() verifying fixture = {:?} ({} cases)",
                &fixture.name,
                fixture.cases.len()
            );
            fixture.results = verify::verify(&fixture.cases);
        }

        Ok(())
    }

    /// Write per-case statuses to stdout
    ///
    /// One `Case N : OK` or `Case N : FAIL` line per case, fixtures in
    /// registration order.
    pub fn report_results(&self) {
        for fixture in &self.fixtures {
            for result in &fixture.results {
                println!("{}", result);
            }
        }
    }

    /// Return whether all verified cases passed
    ///
    /// This will return `true` even if no fixtures have been run yet.
    pub fn success(&self) -> bool {
        self.count_failures() == 0
    }

    /// Return the number of failed cases across all fixtures
    pub fn count_failures(&self) -> usize {
        self.fixtures
            .iter()
            .map(|fixture| &fixture.results)
            .flatten()
            .filter(|result| !result.passed)
            .count()
    }
}

impl std::default::Default for Driver {
    fn default() -> Self {
        Driver {
            fixtures: Vec::new(),
            flags: Flags::new(),
        }
    }
}

fn generate_clap<'a, 'b>(from_env: bool) -> clap::App<'a, 'b> {
    let mut files = clap::Arg::with_name("FILES").multiple(true);
    if from_env {
        files = files.required_unless("case");
    }

    clap::App::new("combcheck")
        .about("combination case checker")
        .arg(files)
        .arg(
            clap::Arg::with_name("case")
                .long("case")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true),
        )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn driver_run_all_verifies_in_order() {
        let mut driver = Driver::new();
        driver.add_input_str("<case>", "ab|12,a1|a2|b1|b2\nab|12,a1|a2|b1|b2|c9\n");
        driver.run_all().unwrap();

        let results = &driver.fixtures[0].results;
        assert_eq!(results.len(), 2);
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(driver.count_failures(), 1);
        assert!(!driver.success());
    }

    #[test]
    fn driver_success_before_run() {
        let driver = Driver::new();
        assert!(driver.success());
    }

    #[test]
    fn driver_syntax_error_aborts_whole_run() {
        let mut driver = Driver::new();
        driver.add_input_str("<good>", "ab,a|b\n");
        driver.add_input_str("<bad>", "ab,a|b\nbogus line\n");
        let error = driver.run_all().unwrap_err();

        match error.kind() {
            ErrorKind::FixtureSyntax { filename, line, .. } => {
                assert_eq!(filename, "<bad>");
                assert_eq!(*line, 2);
            },
            _ => panic!("wrong error kind: {:?}", error),
        }
        // no partial results, not even for the well-formed fixture
        assert!(driver.fixtures.iter().all(|f| f.results.is_empty()));
    }

    #[test]
    fn driver_case_numbering_restarts_per_fixture() {
        let mut driver = Driver::new();
        driver.add_input_str("<one>", "ab,a|b\nx,x\n");
        driver.add_input_str("<two>", "pq,p|q\n");
        driver.run_all().unwrap();

        assert_eq!(driver.fixtures[0].results[1].index, 2);
        assert_eq!(driver.fixtures[1].results[0].index, 1);
    }

    #[test]
    fn driver_inline_cases_become_cli_fixture() {
        let mut driver = Driver::new();
        driver
            .parse_args_from_str(&["--case=ab,a|b", "--case=ab,a|b|z"])
            .unwrap();
        driver.run_all().unwrap();

        assert_eq!(driver.fixtures.len(), 1);
        assert_eq!(driver.fixtures[0].name, "<cli>");
        assert_eq!(driver.fixtures[0].results.len(), 2);
        assert!(driver.fixtures[0].results[0].passed);
        assert!(!driver.fixtures[0].results[1].passed);
    }

    #[test]
    #[should_panic(expected = "fixture name must be enclosed in <> brackets")]
    fn driver_add_input_str_requires_brackets() {
        let mut driver = Driver::new();
        driver.add_input_str("plain", "ab,a|b\n");
    }
}
