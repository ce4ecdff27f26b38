extern crate plotters;
use plotters::prelude::*;

use stroke_spline::{CubicBezier, Point2, SplineBuilder};

// Feeds a hand-drawn looking loop into the builder point by point, drawing every
// segment the moment it is finalized, then closes the curve.
// Run with RUST_LOG=debug to see the builder's finalization log.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let samples: Vec<Point2<f64>> = (0..18)
        .map(|i| {
            let t = i as f64 * core::f64::consts::TAU / 18.0;
            let wobble = 1.0 + 0.15 * (3.0 * t).sin();
            Point2::new(4.0 * wobble * t.cos(), 3.0 * wobble * t.sin())
        })
        .collect();

    let root = BitMapBackend::new("gesture_spline.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Incremental spline", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-6.0..6.0, -4.5..4.5)?;

    chart.configure_mesh().draw()?;

    let mut builder = SplineBuilder::new(samples[0]);
    let mut drawn = 0;
    for &sample in &samples[1..] {
        if builder.add(sample)? {
            for curve in builder.curves().skip(drawn) {
                chart.draw_series(LineSeries::new(sample_curve(&curve), &RED))?;
                drawn += 1;
            }
        }
    }
    // the tail segment only appears once the curve is closed; nothing joins
    // the last sample back to the first, so the drawn loop keeps a gap there
    if builder.close()? {
        for curve in builder.curves().skip(drawn) {
            chart.draw_series(LineSeries::new(sample_curve(&curve), &GREEN))?;
        }
    }

    // the knots the spline passes through
    chart.draw_series(PointSeries::of_element(
        builder.points().iter().map(|&p| <(f64, f64)>::from(p)),
        3,
        &BLUE,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
    ))?;

    root.present()?;
    println!(
        "{} knots, {} segments written to gesture_spline.png",
        builder.points().len(),
        builder.segments().len()
    );
    Ok(())
}

fn sample_curve(curve: &CubicBezier<Point2<f64>>) -> Vec<(f64, f64)> {
    let nsteps = 50;
    (0..=nsteps)
        .map(|k| curve.eval(k as f64 / nsteps as f64).into())
        .collect()
}
