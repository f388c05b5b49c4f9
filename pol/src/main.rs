mod cli;
mod driver;
mod editor;
mod report;

use std::process::ExitCode;

use crate::driver::Driver;

fn main() -> ExitCode {
    Driver::new().run()
}
