use plotters::prelude::*;

use crate::error::TraceError;
use crate::min_and_max;

/// Pixel size shared by the bitmap buffer and the window showing it.
pub const CHART_WIDTH: u32 = 1280;
pub const CHART_HEIGHT: u32 = 720;

/// Warm color for the measured temperature, bound to the left axis.
pub const TEMPERATURE_COLOR: RGBColor = RGBColor(214, 39, 40);
/// Cool color for the duty output, bound to the right axis.
pub const DUTY_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Which of the two independently scaled y axes a series belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// One plotted series. The color covers the line and the axis labels and
/// ticks alike, so a viewer can match a line to its scale without a legend.
#[derive(Clone, Debug)]
pub struct SeriesSpec {
    pub values: Vec<f64>,
    pub side: AxisSide,
    pub color: RGBColor,
    pub label: String,
}

/// Declarative description of the dual-axis chart: the shared x series and
/// the y series bound to the left and right scales.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub x: Vec<f64>,
    pub x_label: String,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    /// Series bound to the given axis side, in declaration order.
    pub fn side(&self, side: AxisSide) -> impl Iterator<Item = &SeriesSpec> + '_ {
        self.series.iter().filter(move |s| s.side == side)
    }
}

/// Draws the chart into a width x height RGB8 buffer.
/// Left-side series use the primary coordinate system, right-side series a
/// secondary one sharing the x range; label areas are reserved on both
/// sides so neither axis title is clipped.
pub fn draw_rgb(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, TraceError> {
    if spec.x.is_empty() {
        return Err(TraceError::EmptyTrace);
    }
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let (xmin, xmax) = pad_range(min_and_max(&spec.x[..]), 20.);
        let (lmin, lmax) = pad_range(side_bounds(spec, AxisSide::Left), 10.);
        let (rmin, rmax) = pad_range(side_bounds(spec, AxisSide::Right), 10.);
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .right_y_label_area_size(80)
            .build_cartesian_2d(xmin..xmax, lmin..lmax)?
            .set_secondary_coord(xmin..xmax, rmin..rmax);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .disable_y_axis()
            .set_all_tick_mark_size(2)
            .x_labels(10)
            .label_style(("sans-serif", 20))
            .x_desc(spec.x_label.as_str())
            .axis_desc_style(("sans-serif", 24))
            .draw()?;
        // second mesh pass for the left axis only, so its labels and ticks
        // take the series color while the x axis stays neutral
        if let Some(left) = spec.side(AxisSide::Left).next() {
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .disable_x_axis()
                .set_all_tick_mark_size(2)
                .axis_style(&left.color)
                .label_style(("sans-serif", 20).into_font().color(&left.color))
                .y_desc(left.label.as_str())
                .axis_desc_style(("sans-serif", 24).into_font().color(&left.color))
                .draw()?;
        }
        if let Some(right) = spec.side(AxisSide::Right).next() {
            chart
                .configure_secondary_axes()
                .axis_style(&right.color)
                .label_style(("sans-serif", 20).into_font().color(&right.color))
                .y_desc(right.label.as_str())
                .axis_desc_style(("sans-serif", 24).into_font().color(&right.color))
                .draw()?;
        }
        for s in &spec.series {
            let points = spec.x.iter().copied().zip(s.values.iter().copied());
            match s.side {
                AxisSide::Left => {
                    chart.draw_series(LineSeries::new(points, s.color.stroke_width(2)))?;
                }
                AxisSide::Right => {
                    chart.draw_secondary_series(LineSeries::new(points, s.color.stroke_width(2)))?;
                }
            }
        }
        root.present()?;
    }
    Ok(buffer)
}

/// Min and max over every series bound to one side.
fn side_bounds(spec: &ChartSpec, side: AxisSide) -> (f64, f64) {
    let mut bounds: Option<(f64, f64)> = None;
    for v in spec.side(side).flat_map(|s| s.values.iter().copied()) {
        bounds = match bounds {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        };
    }
    bounds.unwrap_or((0., 1.))
}

/// Pads the range by span/shrink on each end; a flat range gets a fallback
/// span so the coordinate system stays non-degenerate.
fn pad_range((min, max): (f64, f64), shrink: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    let pad = span / shrink;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> ChartSpec {
        ChartSpec {
            x: vec![0., 1., 2.],
            x_label: String::from("time [min]"),
            series: vec![
                SeriesSpec {
                    values: vec![20., 25., 30.],
                    side: AxisSide::Left,
                    color: TEMPERATURE_COLOR,
                    label: String::from("temperature [C]"),
                },
                SeriesSpec {
                    values: vec![0., 0.5, 1.],
                    side: AxisSide::Right,
                    color: DUTY_COLOR,
                    label: String::from("duty"),
                },
            ],
        }
    }

    #[test]
    fn side_bounds_cover_each_axis() {
        let spec = sample_spec();
        assert_eq!(side_bounds(&spec, AxisSide::Left), (20., 30.));
        assert_eq!(side_bounds(&spec, AxisSide::Right), (0., 1.));
    }

    #[test]
    fn pad_range_keeps_flat_series_non_degenerate() {
        let (lo, hi) = pad_range((5., 5.), 10.);
        assert!(lo < 5.);
        assert!(hi > 5.);
    }

    #[test]
    fn pad_range_extends_both_ends() {
        let (lo, hi) = pad_range((0., 10.), 10.);
        assert_eq!(lo, -1.);
        assert_eq!(hi, 11.);
    }

    #[test]
    fn draw_rgb_fills_the_buffer() -> Result<(), TraceError> {
        let buffer = draw_rgb(&sample_spec(), 320, 240)?;
        assert_eq!(buffer.len(), 320 * 240 * 3);
        // something other than the white background was drawn
        assert!(buffer.iter().any(|&b| b != 255));
        Ok(())
    }

    #[test]
    fn draw_rgb_rejects_an_empty_chart() {
        let spec = ChartSpec {
            x: Vec::new(),
            x_label: String::new(),
            series: Vec::new(),
        };
        assert!(matches!(
            draw_rgb(&spec, 320, 240),
            Err(TraceError::EmptyTrace)
        ));
    }
}
