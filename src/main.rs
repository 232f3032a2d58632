use std::process::exit;

use alu_rs::args::Args;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = alu_rs::run(args) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
