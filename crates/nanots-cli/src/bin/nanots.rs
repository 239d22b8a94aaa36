use clap::Parser;
use nanots_cli::args::CliArgs;
use nanots_cli::driver;

fn main() {
    let args = CliArgs::parse();
    driver::init_tracing(args.verbose);
    let code = driver::run(args.command, args.json);
    std::process::exit(code);
}
