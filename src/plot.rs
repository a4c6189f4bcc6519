use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the loop trace.
pub fn parse_cli() -> PathBuf {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name for the csv file with the control-loop trace")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .required(true)
        .default_value("output.csv");
    let cli_args = App::new("Looptrace_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the temperature and duty time series of a control loop")
        .arg(arg_csvin)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    return csvin;
}
