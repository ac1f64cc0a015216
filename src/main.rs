extern crate clap;
extern crate env_logger;
extern crate gol_bench;

use clap::{App, Arg, ArgMatches};
use gol_bench::bench::{self, config, BenchConfig, ConfigError};
use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    exit(match inner_main() {
        Ok(_) => 0,
        Err(err) => {
            println!("{}", err);
            1
        }
    })
}

fn inner_main() -> Result<(), Box<dyn Error>> {
    let k_min = config::DEFAULT_K_MIN.to_string();
    let k_max = config::DEFAULT_K_MAX.to_string();
    let time_budget = config::DEFAULT_TIME_BUDGET_SECS.to_string();
    let max_iterations = config::DEFAULT_MAX_ITERATIONS.to_string();
    let matches = App::new("Game of Life step benchmark")
        .version(version().as_ref())
        .about("Times one Game of Life generation on square toroidal grids of size 2^k")
        .arg(
            Arg::with_name("k-min")
                .long("k-min")
                .default_value(&k_min)
                .help("Exponent of the smallest grid side"),
        )
        .arg(
            Arg::with_name("k-max")
                .long("k-max")
                .default_value(&k_max)
                .help("Exponent of the largest grid side"),
        )
        .arg(
            Arg::with_name("time-budget")
                .short("t")
                .long("time-budget")
                .default_value(&time_budget)
                .help("Seconds of stepping to accumulate per grid size"),
        )
        .arg(
            Arg::with_name("max-iterations")
                .short("i")
                .long("max-iterations")
                .default_value(&max_iterations)
                .help("Maximum number of steps timed per grid size"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .takes_value(true)
                .help("Seed for the random grids; random when omitted"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .default_value(config::DEFAULT_OUTPUT)
                .help("CSV file the N,seconds table is written to"),
        )
        .get_matches();

    let config = BenchConfig {
        k_min: get_number("k-min", None, &matches)?,
        k_max: get_number("k-max", None, &matches)?,
        time_budget_secs: get_number("time-budget", Some(0.0), &matches)?,
        max_iterations: get_number("max-iterations", Some(0), &matches)?,
        seed: match matches.value_of("seed") {
            Some(_) => Some(get_number("seed", None, &matches)?),
            None => None,
        },
        output: PathBuf::from(matches.value_of("output").unwrap_or(config::DEFAULT_OUTPUT)),
    };

    let table = bench::run(config)?;
    print!("{}", table);
    Ok(())
}

fn version() -> String {
    let (maj, min, pat) = (
        option_env!("CARGO_PKG_VERSION_MAJOR"),
        option_env!("CARGO_PKG_VERSION_MINOR"),
        option_env!("CARGO_PKG_VERSION_PATCH"),
    );
    match (maj, min, pat) {
        (Some(maj), Some(min), Some(pat)) => format!("{}.{}.{}", maj, min, pat),
        _ => "".to_owned(),
    }
}

fn get_number<A>(name: &str, maybe_min: Option<A>, matches: &ArgMatches<'_>) -> Result<A, ConfigError>
where
    A: FromStr + PartialOrd + Display + Copy,
{
    let parse_err = |message: String| ConfigError::Parse {
        name: name.to_owned(),
        message,
    };
    let value = matches
        .value_of(name)
        .ok_or_else(|| parse_err("missing value".to_owned()))?;
    let number = value
        .parse::<A>()
        .map_err(|_| parse_err(format!("{:?} is not a number", value)))?;
    match maybe_min {
        Some(min) if number <= min => Err(parse_err(format!(
            "should be a positive number greater than {}",
            min
        ))),
        _ => Ok(number),
    }
}
