use crate::report::ChartSeries;
use anyhow::{Result, anyhow};
use num_format::{Locale, ToFormattedString};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// One-time registration of a fallback "sans-serif" font for the `ab_glyph`
/// text path, which does not discover OS fonts. Process-wide presentation
/// state is isolated here in the chart collaborator's initialization.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

// Bar fill and line stroke, matching lightsteelblue / crimson.
const BAR_COLOR: RGBColor = RGBColor(176, 196, 222);
const LINE_COLOR: RGBColor = RGBColor(220, 20, 60);

/// Render the dual-axis chart: total population as bars on the left axis,
/// aging ratio (%) as a line with point markers on the right axis, over the
/// ranked region order.
///
/// The backend is picked by extension: `.svg` renders as SVG, anything else
/// as a bitmap.
pub fn plot_dual_axis<P: AsRef<Path>>(
    series: &ChartSeries,
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
) -> Result<()> {
    if series.labels.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series, title)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series, title)?;
    }

    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, series: &ChartSeries, title: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let n = series.labels.len();
    let max_total = series.totals.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.1;
    let max_ratio = series.ratios.iter().cloned().fold(0.0f64, f64::max).max(1.0) * 1.15;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 90)
        .set_label_area_size(LabelAreaPosition::Right, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 90)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..max_total)
        .map_err(|e| anyhow!("{:?}", e))?
        .set_secondary_coord(-0.5f64..(n as f64 - 0.5), 0f64..max_ratio);

    // One tick per region; the formatter maps tick positions back to names.
    let x_label_fmt = |x: &f64| {
        let i = x.round();
        if i < 0.0 || (x - i).abs() > 0.3 {
            return String::new();
        }
        series.labels.get(i as usize).cloned().unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| ((*v).round() as i64).to_formatted_string(&Locale::en);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Population")
        .x_labels(n)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 12))
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_secondary_axes()
        .y_desc("Aging ratio (%)")
        .y_label_formatter(&|v: &f64| format!("{v:.1}"))
        .label_style(("sans-serif", 12))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .draw_series(series.totals.iter().enumerate().map(|(i, &total)| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, total as f64)], BAR_COLOR.filled())
        }))
        .map_err(|e| anyhow!("{:?}", e))?
        .label("Total population")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], BAR_COLOR.filled()));

    let line_points: Vec<(f64, f64)> = series
        .ratios
        .iter()
        .enumerate()
        .map(|(i, &ratio)| (i as f64, ratio))
        .collect();

    chart
        .draw_secondary_series(LineSeries::new(line_points.clone(), LINE_COLOR.stroke_width(2)))
        .map_err(|e| anyhow!("{:?}", e))?
        .label("Aging ratio (%)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], LINE_COLOR.stroke_width(2)));

    chart
        .draw_secondary_series(
            line_points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, LINE_COLOR.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
