use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use cofactor_cli::commands::{self, Traversal};
use cofactor_cli::config::{load_config, CliConfig};

fn matrix_arg() -> Arg {
    Arg::new("matrix")
        .help("Matrix literal such as \"[[1, 2], [3, 4]]\", or '-' to read one line from stdin")
        .required(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .value_hint(ValueHint::Other)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("COFACTOR_LOG", "error,cofactor=info"))
        .init();

    let matches = Command::new("cofactor")
        .version(clap::crate_version!())
        .about("Dense matrix arithmetic, cofactor determinants and adjugate inverses")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .help("Fail on unparsable tokens instead of skipping them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reject_ragged")
                .long("reject-ragged")
                .global(true)
                .help("Fail when rows have different lengths instead of zero-padding")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate ((A * B) - (B / A^T) * sum(A)) + (B^T * A / sum(B))")
                .arg(matrix_arg())
                .arg(
                    Arg::new("other")
                        .long("other")
                        .short('b')
                        .help("Literal for B. Defaults to a random matrix shaped like A.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random B. Overrides the seed in the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("det")
                .about("Determinant by cofactor expansion")
                .arg(matrix_arg()),
        )
        .subcommand(
            Command::new("inverse")
                .about("Inverse via the adjugate")
                .arg(matrix_arg()),
        )
        .subcommand(
            Command::new("transpose")
                .about("Transpose")
                .arg(matrix_arg()),
        )
        .subcommand(
            Command::new("iter")
                .about("Walk the matrix row by row or column by column")
                .arg(matrix_arg())
                .arg(
                    Arg::new("by")
                        .long("by")
                        .help("Traversal order")
                        .value_parser(["rows", "cols"])
                        .default_value("rows"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Shape, sum and determinant summary")
                .arg(matrix_arg()),
        )
        .get_matches();

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            log::error!("Command failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn run(matches: &ArgMatches) -> Result<String> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow::anyhow!("Subcommand is required"))?;

    let config = match sub_m.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[cofactor] Using config: {:?}", path);
            load_config(path)?
        }
        None => CliConfig::default(),
    };
    let seed = if name == "eval" {
        sub_m.get_one::<u64>("seed").copied()
    } else {
        None
    };
    let config = config.with_overrides(
        sub_m.get_flag("strict"),
        sub_m.get_flag("reject_ragged"),
        seed,
    );
    log::debug!("effective config: {:?}", config);

    let source: &String = sub_m
        .get_one("matrix")
        .ok_or_else(|| anyhow::anyhow!("A matrix argument is required"))?;
    let a = commands::read_matrix(source, &config.parse)?;

    match name {
        "eval" => {
            let other = match sub_m.get_one::<String>("other") {
                Some(text) => Some(commands::read_matrix(text, &config.parse)?),
                None => None,
            };
            commands::eval(&a, other, &config)
        }
        "det" => commands::determinant(&a),
        "inverse" => commands::inverse(&a, &config),
        "transpose" => Ok(commands::transpose(&a)),
        "iter" => {
            let order = match sub_m.get_one::<String>("by").map(String::as_str) {
                Some("cols") => Traversal::Cols,
                _ => Traversal::Rows,
            };
            commands::traverse(&a, order)
        }
        "info" => Ok(commands::info(&a)),
        other => anyhow::bail!("Unknown subcommand: {}", other),
    }
}
