use clap::Parser;

use dvbscan::Cli;

fn main() {
    let cli = Cli::parse();
    std::process::exit(dvbscan::run(cli));
}
