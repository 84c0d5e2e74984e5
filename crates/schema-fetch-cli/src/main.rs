use schema_fetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = match Cli::try_parse_normalized(std::env::args_os()) {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(err) = cli.check_required() {
        eprintln!("schema-fetch: {:#}", err);
        std::process::exit(1);
    }

    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run() {
        eprintln!("schema-fetch: {:#}", err);
        std::process::exit(1);
    }
}
