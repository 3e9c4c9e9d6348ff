use anyhow::Context;
use clap::Parser;
use supercap_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    let result = commands::run(args).context("supercap-analyzer failed");

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
