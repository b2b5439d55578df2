// Prints toolchain + library versions to confirm a working install.

use red_tracker::diag::EnvironmentReport;

fn main() {
    for line in EnvironmentReport::current().lines() {
        println!("{line}");
    }
}
