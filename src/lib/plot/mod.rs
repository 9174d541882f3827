//! Renders the measurements of a suite as an SVG chart.
//!
//! Every configuration of the suite becomes a series, drawn with the color,
//! marker and label that the suite assigns to it. Suites whose chart is a
//! [`ChartKind::ScatterWithFit`] also get a least squares polynomial curve per
//! series, since their sizes are jittered and the raw points are noisy

pub mod fit;

use std::ops::Range;

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use indexmap::IndexMap;
use plotters::coord::{
    ranged1d::{AsRangedCoord, ValueFormatter},
    Shift,
};
use plotters::prelude::*;

use crate::domain::{
    measurement::Measurement,
    suite::{BenchmarkSuite, ChartKind, Configuration, Marker, SeriesStyle},
};
use crate::project_model::{plot::PlotModel, BenchModel};
use crate::utils::{self, constants::error_messages};

use self::fit::Polynomial;

/// The points of every series, keyed by their configuration and sorted by size
pub type SeriesData = IndexMap<Configuration, Vec<(f64, f64)>>;

/// Draws the measurements into the output file of the plot model
pub fn render(model: &BenchModel, measurements: &[Measurement]) -> Result<()> {
    let bench = model.suite.as_benchmark();
    let series = group_series(bench, measurements);
    if series.is_empty() {
        return Err(eyre!(
            "{}: there are no measurements of the {} suite to draw",
            error_messages::FAILURE_RENDERING_PLOT,
            model.suite
        ));
    }

    let plot = &model.plot;
    if let Some(parent) = plot.output.parent() {
        utils::fs::create_directory(parent)?;
    }

    log::info!(
        "Drawing {} series of the {} suite into {:?}",
        series.len(),
        model.suite,
        plot.output
    );

    let root = SVGBackend::new(&plot.output, (plot.width, plot.height)).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| error_messages::FAILURE_RENDERING_PLOT)?;

    let x_range = x_range(&series);
    let (y_lo, y_hi) = y_bounds(&series, plot.log_scale);
    if plot.log_scale {
        draw_chart(&root, bench, plot, &series, x_range, (y_lo..y_hi).log_scale())?;
    } else {
        draw_chart(&root, bench, plot, &series, x_range, y_lo..y_hi)?;
    }

    root.present()
        .with_context(|| format!("{}: {:?}", error_messages::FAILURE_RENDERING_PLOT, plot.output))
}

/// Groups the measurements by configuration, in the order that the suite
/// times its configurations. Measurements of configurations unknown to the
/// suite are discarded
pub fn group_series(bench: &dyn BenchmarkSuite, measurements: &[Measurement]) -> SeriesData {
    let mut series = SeriesData::new();

    for measurement in measurements {
        let configuration = measurement.configuration();
        if bench.series_style(configuration).is_none() {
            log::warn!(
                "Skipping the measurement of {configuration}, which doesn't belong to the {} suite",
                bench.suite()
            );
            continue;
        }
        series
            .entry(configuration)
            .or_default()
            .push((measurement.size as f64, measurement.seconds));
    }

    let rank = |configuration: &Configuration| {
        bench
            .configurations()
            .iter()
            .position(|c| c == configuration)
    };
    series.sort_by(|a, _, b, _| rank(a).cmp(&rank(b)));
    for points in series.values_mut() {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    series
}

fn x_range(series: &SeriesData) -> Range<f64> {
    let (lo, hi) = series
        .values()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    if lo < hi {
        lo..hi
    } else {
        (lo - 1.0)..(hi + 1.0)
    }
}

/// The vertical bounds of the chart. A logarithmic axis can't start at zero,
/// so it starts just below the fastest positive measurement
fn y_bounds(series: &SeriesData, log_scale: bool) -> (f64, f64) {
    let ys = series.values().flatten().map(|&(_, y)| y);
    if log_scale {
        let (lo, hi) = ys
            .filter(|y| *y > 0.0)
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
        if lo.is_finite() {
            (lo * 0.8, hi * 1.25)
        } else {
            (0.001, 1.0)
        }
    } else {
        let hi = ys.fold(0.0_f64, f64::max);
        (0.0, if hi > 0.0 { hi * 1.1 } else { 1.0 })
    }
}

fn draw_chart<DB, Y>(
    root: &DrawingArea<DB, Shift>,
    bench: &dyn BenchmarkSuite,
    plot: &PlotModel,
    series: &SeriesData,
    x_range: Range<f64>,
    y_spec: Y,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    Y: AsRangedCoord<Value = f64>,
    Y::CoordDescType: ValueFormatter<f64>,
{
    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{} compile times", bench.suite()),
            ("sans-serif", 24).into_font(),
        )
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_spec)?;

    chart
        .configure_mesh()
        .x_desc(bench.x_label())
        .y_desc(bench.y_label())
        .draw()?;

    for (&configuration, points) in series {
        // Only configurations with a style are grouped
        let Some(style) = bench.series_style(configuration) else {
            continue;
        };
        let SeriesStyle {
            label,
            color: (r, g, b),
            marker,
        } = style;
        let color = RGBColor(r, g, b);

        match bench.chart_kind() {
            ChartKind::Lines => {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
                    .label(label)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
                if marker != Marker::None {
                    chart.draw_series(points.iter().map(|&point| {
                        EmptyElement::at(point)
                            + Polygon::new(marker_outline(marker), color.filled())
                    }))?;
                }
            }
            ChartKind::ScatterWithFit => {
                chart
                    .draw_series(points.iter().map(|&point| {
                        EmptyElement::at(point)
                            + Polygon::new(marker_outline(marker), color.filled())
                    }))?
                    .label(label)
                    .legend(move |(x, y)| legend_marker((x + 10, y), marker, color));

                let curve = fitted_curve(points, plot.fit_degree, plot.log_scale);
                if curve.is_empty() {
                    log::warn!(
                        "Not enough measurements of {configuration} to fit a degree {} polynomial",
                        plot.fit_degree
                    );
                } else {
                    chart.draw_series(LineSeries::new(curve, color.stroke_width(1)))?;
                }
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Samples the least squares polynomial of the series at every unit step
/// between its smallest and its largest size. `points` are sorted by size
fn fitted_curve(points: &[(f64, f64)], degree: usize, log_scale: bool) -> Vec<(f64, f64)> {
    let (Some(&(x_lo, _)), Some(&(x_hi, _))) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    let Some(polynomial) = Polynomial::fit(&xs, &ys, degree) else {
        return Vec::new();
    };

    let steps = (x_hi - x_lo).max(1.0).ceil() as usize;
    (0..=steps)
        .map(|step| {
            let x = (x_lo + step as f64).min(x_hi);
            (x, polynomial.eval(x))
        })
        .filter(|&(_, y)| !log_scale || y > 0.0)
        .collect()
}

/// The marker glyph of a legend entry, already placed in backend pixels
fn legend_marker(anchor: (i32, i32), marker: Marker, color: RGBColor) -> Polygon<(i32, i32)> {
    let (x, y) = anchor;
    let outline: Vec<(i32, i32)> = marker_outline(marker)
        .into_iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .collect();
    Polygon::new(outline, color.filled())
}

/// The vertices of a marker, in pixels relative to its anchor. The vertical
/// axis of the backend grows downwards
fn marker_outline(marker: Marker) -> Vec<(i32, i32)> {
    const R: i32 = 4;
    match marker {
        Marker::TriangleUp => vec![(0, -R), (-R, R - 1), (R, R - 1)],
        Marker::TriangleDown => vec![(0, R), (-R, 1 - R), (R, 1 - R)],
        Marker::TriangleLeft => vec![(-R, 0), (R - 1, -R), (R - 1, R)],
        Marker::TriangleRight => vec![(R, 0), (1 - R, -R), (1 - R, R)],
        Marker::Circle | Marker::None => (0..12)
            .map(|k| {
                let angle = f64::from(k) * std::f64::consts::PI / 6.0;
                (
                    (f64::from(R - 1) * angle.cos()).round() as i32,
                    (f64::from(R - 1) * angle.sin()).round() as i32,
                )
            })
            .collect(),
    }
}
