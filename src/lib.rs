use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

pub mod chart;
pub mod error;
pub mod plot;
pub mod view;

use chart::{AxisSide, ChartSpec, SeriesSpec, DUTY_COLOR, TEMPERATURE_COLOR};
use error::TraceError;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// The main struct for the control-loop trace time series
#[derive(Debug, Clone)]
pub struct LoopTrace {
    pub time: Vec<f64>,
    pub duty: Vec<f64>,
    pub temp: Vec<f64>,
}

impl LoopTrace {
    pub fn new(capacity: usize) -> LoopTrace {
        let time: Vec<f64> = Vec::with_capacity(capacity);
        let duty: Vec<f64> = Vec::with_capacity(capacity);
        let temp: Vec<f64> = Vec::with_capacity(capacity);
        LoopTrace { time, duty, temp }
    }

    /// Init a LoopTrace from a headerless csv of
    /// `time_seconds,duty,temperature` rows.
    /// Column order is positional; the file carries no header or units
    /// metadata. Every line must split on ',' into exactly 3 numeric
    /// fields and the first offending line aborts the load.
    /// Blank lines are not rows and are skipped; fields may carry
    /// surrounding whitespace.
    pub fn from_csv(fin: PathBuf) -> Result<LoopTrace, TraceError> {
        let file = File::open(&fin).map_err(|e| TraceError::NotFound {
            path: fin.clone(),
            source: e,
        })?;
        let buf = BufReader::new(file);
        let mut trace = LoopTrace::new(10000);
        for (i, l) in buf.lines().enumerate() {
            let line = l.map_err(|e| TraceError::NotFound {
                path: fin.clone(),
                source: e,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 3 {
                return Err(TraceError::RowArity {
                    line: i + 1,
                    found: fields.len(),
                });
            }
            let mut row = [0f64; 3];
            for (value, field) in row.iter_mut().zip(fields.iter()) {
                *value = field.trim().parse().map_err(|_| TraceError::RowNumber {
                    line: i + 1,
                    token: field.trim().to_string(),
                })?;
            }
            trace.time.push(row[0]);
            trace.duty.push(row[1]);
            trace.temp.push(row[2]);
        }
        Ok(trace)
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Elapsed time rescaled from seconds to minutes.
    /// A display-only view; the stored seconds stay untouched.
    pub fn time_minutes(&self) -> Vec<f64> {
        self.time.iter().map(|t| t / 60.).collect()
    }

    /// Builds the dual-axis chart description: temperature on the left
    /// scale, duty on the right, both against the time axis in minutes.
    pub fn to_chart(&self) -> Result<ChartSpec, TraceError> {
        if self.is_empty() {
            return Err(TraceError::EmptyTrace);
        }
        let temperature = SeriesSpec {
            values: self.temp.clone(),
            side: AxisSide::Left,
            color: TEMPERATURE_COLOR,
            label: String::from("temperature [C]"),
        };
        let duty = SeriesSpec {
            values: self.duty.clone(),
            side: AxisSide::Right,
            color: DUTY_COLOR,
            label: String::from("duty"),
        };
        Ok(ChartSpec {
            x: self.time_minutes(),
            x_label: String::from("time [min]"),
            series: vec![temperature, duty],
        })
    }
}

impl std::fmt::Display for LoopTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "time_s,duty,temperature\n")?;
        for ((t, u), y) in self.time.iter().zip(self.duty.iter()).zip(self.temp.iter()) {
            write!(f, "{},{},{}\n", t, u, y)?
        }
        Ok(())
    }
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}
