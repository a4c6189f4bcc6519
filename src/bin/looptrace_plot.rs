use log::{debug, info};
use looptrace::error::TraceError;
use looptrace::plot::parse_cli;
use looptrace::view;
use looptrace::LoopTrace;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let csvin = parse_cli();
    println!("read control-loop trace from {}", csvin.display());
    if let Err(e) = run(csvin) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(csvin: PathBuf) -> Result<(), TraceError> {
    let trace = LoopTrace::from_csv(csvin)?;
    info!("loaded {} samples", trace.len());
    debug!("loaded trace:\n{}", trace);
    let spec = trace.to_chart()?;
    view::show(&spec)
}
