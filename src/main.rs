//! rCampaign main entrypoint.

use rcampaign::run;

fn main() {
    if let Err(e) = run() {
        rcampaign::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
