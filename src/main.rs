//! fastwin main entrypoint.

use fastwin::run;
use fastwin::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
