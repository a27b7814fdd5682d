use std::env;
use std::io;
use std::process;

use mapbench::cli;

fn main() {
    let args = match cli::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli::execute(&args, &mut out) {
        eprintln!("failed to write report: {}", err);
        process::exit(1);
    }
}
