//! rPlanCharge main entrypoint.

use rplancharge::run;
use rplancharge::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
