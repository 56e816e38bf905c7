//! nukistats main entrypoint.

use nukistats::run;
use nukistats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
