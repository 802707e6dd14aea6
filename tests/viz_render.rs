use std::fs;
use std::path::PathBuf;
use regpop_rs::report::ChartSeries;
use regpop_rs::viz;

fn sample_series() -> ChartSeries {
    ChartSeries {
        labels: vec!["전라남도".into(), "서울특별시".into(), "세종특별자치시".into()],
        totals: vec![1_790_550, 9_411_260, 380_440],
        ratios: vec![26.2, 18.6, 10.5],
    }
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str, ext: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("regpop_viz_{}.{}", name, ext));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart has content");
    fs::remove_file(&path).ok();
}

#[test]
fn dual_axis_svg_renders() {
    let series = sample_series();
    write_and_check(
        |p| viz::plot_dual_axis(&series, p, 800, 480, "Test Chart").unwrap(),
        "dual_axis",
        "svg",
    );
}

#[test]
fn dual_axis_png_renders() {
    let series = sample_series();
    write_and_check(
        |p| viz::plot_dual_axis(&series, p, 800, 480, "Test Chart").unwrap(),
        "dual_axis",
        "png",
    );
}

#[test]
fn empty_series_is_error() {
    let series = ChartSeries::default();
    let tmp = std::env::temp_dir().join("regpop_viz_empty.svg");
    let e = viz::plot_dual_axis(&series, &tmp, 800, 480, "Empty");
    assert!(e.is_err());
}

#[test]
fn single_region_renders() {
    let series = ChartSeries {
        labels: vec!["세종특별자치시".into()],
        totals: vec![380_440],
        ratios: vec![10.5],
    };
    write_and_check(
        |p| viz::plot_dual_axis(&series, p, 640, 400, "One Region").unwrap(),
        "single",
        "svg",
    );
}
