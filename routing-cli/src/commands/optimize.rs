#[cfg(test)]
#[path = "../../tests/unit/commands/optimize_test.rs"]
mod optimize_test;

use super::*;

use routing_cli::core::prelude::*;
use routing_cli::extensions::import::import_points;
use routing_cli::extensions::optimize::config::*;
use serde::Serialize;
use std::io::BufReader;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "INPUT";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const CONFIG_ARG_NAME: &str = "config";
const MAX_ITERATIONS_ARG_NAME: &str = "max-iterations";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_optimize_app() -> Command {
    Command::new("optimize")
        .about("Optimizes visiting order of geographic stops")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["json", "csv"])
                .index(1),
        )
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the file with points to use").required(true).index(2))
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies optimization algorithm")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false)
                .default_value("two-opt")
                .value_parser(["two-opt", "genetic", "compare"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_ITERATIONS_ARG_NAME)
                .help("Specifies maximum number of 2-opt iterations")
                .short('n')
                .long(MAX_ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed for repeatable genetic algorithm runs")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_optimize(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("format is not specified")?;
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input file is not specified")?;
    let algorithm = matches.get_one::<String>(ALGORITHM_ARG_NAME).map(String::as_str).unwrap_or("two-opt");

    let config = get_config(matches)?;
    let points = import_points(input_format, BufReader::new(open_file(input_path, "input")?))
        .map_err(|err| format!("cannot import points: '{err}'"))?;
    validate_points(points.as_slice())?;

    let optimizer = create_optimizer_from_config(&config);
    let genetic = get_genetic_config(&config);

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let out_buffer = out_writer_func(out_result);

    match algorithm {
        "two-opt" => write_result(out_buffer, &optimizer.optimize(points.as_slice())),
        "genetic" => write_result(out_buffer, &optimizer.optimize_with_ga(points.as_slice(), &genetic)),
        "compare" => write_result(out_buffer, &optimizer.compare(points.as_slice(), &genetic)),
        _ => Err(format!("unknown algorithm: '{algorithm}'").into()),
    }
}

/// Reads config from file, if specified, and applies command line overrides on top of it.
fn get_config(matches: &ArgMatches) -> GenericResult<Config> {
    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    if let Some(max_iterations) = parse_int_value::<usize>(matches, MAX_ITERATIONS_ARG_NAME, "max iterations")? {
        config.local_search = Some(LocalSearchConfig { max_iterations: Some(max_iterations) });
    }

    if let Some(max_time) = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")? {
        config.termination = Some(TerminationConfig { max_time: Some(max_time) });
    }

    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")? {
        config.random = Some(RandomConfig { seed: Some(seed) });
    }

    if matches.get_flag(LOG_ARG_NAME) {
        let log_best = config
            .telemetry
            .as_ref()
            .and_then(|telemetry| telemetry.logging.as_ref())
            .and_then(|logging| logging.log_best);
        config.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_best }) });
    }

    Ok(config)
}

fn write_result<T: Serialize>(mut writer: BufWriter<Box<dyn Write>>, result: &T) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, result).map_err(|err| format!("cannot write result: '{err}'"))?;
    writer.flush().map_err(GenericError::from)
}
