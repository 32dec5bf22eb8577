// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! A command line interface for the checker driver
//!
//! The following exit status codes are used:
//! - `0` means every case passed, or no cases were run
//! - `1` means at least one case failed verification
//! - `2` means a fixture could not be read or parsed, or the command line
//!   arguments were malformed
//! - `3` means an internal exception occurred

fn check() -> combcheck::Result<bool> {
    let mut driver = combcheck::Driver::new();
    driver.parse_args_from_env()?;
    driver.run_all()?;
    driver.report_results();

    Ok(driver.success())
}

fn run() -> bool {
    env_logger::init();
    check().unwrap_or_else(|e| e.print_and_exit())
}

fn ice_hook(p: &std::panic::PanicInfo) {
    eprintln!("error: an internal exception has occurred");

    let message = match p.payload() {
        x if x.is::<String>() => x.downcast_ref::<String>().unwrap().as_str(),
        x if x.is::<&str>() => x.downcast_ref::<&str>().unwrap(),
        _ => "exception type could not be determined",
    };
    eprintln!("error: {}", message);
    eprintln!("");
    eprintln!("{:?}", backtrace::Backtrace::new());
    eprintln!("");
    eprintln!("please file a bug report");
}

fn main() {
    std::panic::set_hook(Box::new(ice_hook));
    let result = std::panic::catch_unwind(run);
    match result {
        Ok(success) => std::process::exit(if success { 0 } else { 1 }),
        Err(_) => std::process::exit(3),
    }
}
