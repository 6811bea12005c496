//! General-purpose chart helper: between 1 and 5 curves plus up to 2 shaded
//! regions, rendered to PNG with course-standard styling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use ndarray::Array1;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::full_palette::ORANGE;

use thiserror::Error;

use crate::submodules::type_lib::NumericData;

pub const DEF_FIG_WIDTH: u32 = 1000;
pub const DEF_FIG_HEIGHT: u32 = 600;
pub const DEF_AXIS_SIZE: u32 = 20;
pub const DEF_TICK_SIZE: u32 = 15;
pub const DEF_FIG_DIR: &str = "./figs/";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("curve {slot} has {x_len} x values but {y_len} y values")]
    LengthMismatch { slot: usize, x_len: usize, y_len: usize },
    #[error("fill region {slot} has {x_len} x values but {y_len} y values")]
    FillLengthMismatch { slot: usize, x_len: usize, y_len: usize },
    #[error("could not create figure directory {path}: {source}")]
    FigDir { path: PathBuf, source: io::Error },
    #[error("drawing {name} failed: {message}")]
    Draw { name: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
    Dotted,
    /// plotters has no true dash-dot pattern; rendered as a long dash.
    DashDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLoc {
    UpperLeft,
    UpperRight,
    MiddleLeft,
    MiddleRight,
    LowerLeft,
    LowerRight,
}

impl LegendLoc {
    fn to_position(self) -> SeriesLabelPosition {
        match self {
            LegendLoc::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendLoc::UpperRight => SeriesLabelPosition::UpperRight,
            LegendLoc::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            LegendLoc::MiddleRight => SeriesLabelPosition::MiddleRight,
            LegendLoc::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendLoc::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// One optional curve slot. When `x` is `None` the figure's first x-sequence
/// is reused.
#[derive(Clone)]
pub struct Curve {
    pub x: Option<Array1<NumericData>>,
    pub y: Array1<NumericData>,
    pub label: String,
    pub color: RGBColor,
    pub dash: LineDash,
    pub width: u32,
}

impl Curve {
    pub fn second(y: Array1<NumericData>) -> Self {
        Curve { x: None, y, label: String::new(), color: ORANGE, dash: LineDash::Dashed, width: 2 }
    }

    pub fn third(y: Array1<NumericData>) -> Self {
        Curve { x: None, y, label: String::new(), color: GREEN, dash: LineDash::Dotted, width: 3 }
    }

    pub fn fourth(y: Array1<NumericData>) -> Self {
        Curve { x: None, y, label: String::new(), color: RED, dash: LineDash::DashDot, width: 3 }
    }

    pub fn fifth(y: Array1<NumericData>) -> Self {
        Curve { x: None, y, label: String::new(), color: YELLOW, dash: LineDash::Solid, width: 3 }
    }
}

/// Region shaded down to a baseline of 0.
#[derive(Clone)]
pub struct FillRegion {
    pub x: Array1<NumericData>,
    pub y: Array1<NumericData>,
    pub label: String,
    pub color: RGBColor,
}

impl FillRegion {
    pub fn first(x: Array1<NumericData>, y: Array1<NumericData>) -> Self {
        FillRegion { x, y, label: String::new(), color: BLUE }
    }

    pub fn second(x: Array1<NumericData>, y: Array1<NumericData>) -> Self {
        FillRegion { x, y, label: String::new(), color: ORANGE }
    }
}

/// Figure description with course defaults; adjust fields before calling
/// [`make_fig`].
pub struct FigSpec {
    pub name: String,
    pub x: Array1<NumericData>,
    pub y1: Array1<NumericData>,
    pub y1_label: String,
    pub color1: RGBColor,
    pub dash1: LineDash,
    pub curve2: Option<Curve>,
    pub curve3: Option<Curve>,
    pub curve4: Option<Curve>,
    pub curve5: Option<Curve>,
    pub x_label: String,
    pub y_label: String,
    pub x_lim_lo: Option<NumericData>,
    pub x_lim_hi: Option<NumericData>,
    pub y_lim_lo: Option<NumericData>,
    pub y_lim_hi: Option<NumericData>,
    pub fill1: Option<FillRegion>,
    pub fill2: Option<FillRegion>,
    pub legend_loc: LegendLoc,
    pub fig_width: u32,
    pub fig_height: u32,
    pub axis_font_size: u32,
    pub tick_font_size: u32,
    pub save: bool,
    pub fig_dir: PathBuf,
}

impl FigSpec {
    pub fn new(name: &str, x: Array1<NumericData>, y1: Array1<NumericData>) -> Self {
        FigSpec {
            name: name.to_string(),
            x,
            y1,
            y1_label: String::new(),
            color1: BLUE,
            dash1: LineDash::Solid,
            curve2: None,
            curve3: None,
            curve4: None,
            curve5: None,
            x_label: String::new(),
            y_label: String::new(),
            x_lim_lo: None,
            x_lim_hi: None,
            y_lim_lo: None,
            y_lim_hi: None,
            fill1: None,
            fill2: None,
            legend_loc: LegendLoc::UpperLeft,
            fig_width: DEF_FIG_WIDTH,
            fig_height: DEF_FIG_HEIGHT,
            axis_font_size: DEF_AXIS_SIZE,
            tick_font_size: DEF_TICK_SIZE,
            save: true,
            fig_dir: PathBuf::from(DEF_FIG_DIR),
        }
    }
}

struct ResolvedCurve<'a> {
    slot: usize,
    x: &'a Array1<NumericData>,
    y: &'a Array1<NumericData>,
    label: &'a str,
    color: RGBColor,
    dash: LineDash,
    width: u32,
}

fn resolve_curves(spec: &FigSpec) -> Result<Vec<ResolvedCurve<'_>>, PlotError> {
    let mut curves = vec![ResolvedCurve {
        slot: 1,
        x: &spec.x,
        y: &spec.y1,
        label: &spec.y1_label,
        color: spec.color1,
        dash: spec.dash1,
        width: 2,
    }];
    let extras = [(2, &spec.curve2), (3, &spec.curve3), (4, &spec.curve4), (5, &spec.curve5)];
    for (slot, curve) in extras {
        if let Some(curve) = curve {
            curves.push(ResolvedCurve {
                slot,
                x: curve.x.as_ref().unwrap_or(&spec.x),
                y: &curve.y,
                label: &curve.label,
                color: curve.color,
                dash: curve.dash,
                width: curve.width,
            });
        }
    }
    for curve in &curves {
        if curve.x.len() != curve.y.len() {
            return Err(PlotError::LengthMismatch {
                slot: curve.slot,
                x_len: curve.x.len(),
                y_len: curve.y.len(),
            });
        }
    }
    Ok(curves)
}

/// Fill labels only count when both regions are labeled.
fn fills_labeled(spec: &FigSpec) -> bool {
    match (&spec.fill1, &spec.fill2) {
        (Some(f1), Some(f2)) => !f1.label.is_empty() && !f2.label.is_empty(),
        _ => false,
    }
}

fn wants_legend(curves: &[ResolvedCurve<'_>], fills_labeled: bool) -> bool {
    (curves.len() > 1 && curves.iter().any(|curve| !curve.label.is_empty())) || fills_labeled
}

fn axis_range(
    lim_lo: Option<NumericData>,
    lim_hi: Option<NumericData>,
    data: &[&Array1<NumericData>],
    pad_frac: NumericData,
) -> (NumericData, NumericData) {
    if let Some(hi) = lim_hi {
        return (lim_lo.unwrap_or(0.0), hi);
    }
    let mut lo = NumericData::INFINITY;
    let mut hi = NumericData::NEG_INFINITY;
    for arr in data {
        for value in arr.iter() {
            if value.is_finite() {
                lo = lo.min(*value);
                hi = hi.max(*value);
            }
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = pad_frac * (hi - lo);
    (lo - pad, hi + pad)
}

/// Resolves where a figure should land, creating the output directory if it
/// does not exist yet. Returns `None` when saving is disabled; nothing else
/// touches the file system in that case.
pub fn save_figure(name: &str, save: bool, fig_dir: &Path) -> Result<Option<PathBuf>, PlotError> {
    if !fig_dir.exists() {
        fs::create_dir_all(fig_dir)
            .map_err(|source| PlotError::FigDir { path: fig_dir.to_path_buf(), source })?;
    }
    if save {
        Ok(Some(fig_dir.join(format!("{name}.png"))))
    } else {
        Ok(None)
    }
}

pub fn make_fig(spec: &FigSpec) -> Result<(), PlotError> {
    let curves = resolve_curves(spec)?;
    for (slot, fill) in [(1, &spec.fill1), (2, &spec.fill2)] {
        if let Some(fill) = fill {
            if fill.x.len() != fill.y.len() {
                return Err(PlotError::FillLengthMismatch {
                    slot,
                    x_len: fill.x.len(),
                    y_len: fill.y.len(),
                });
            }
        }
    }

    let path = match save_figure(&spec.name, spec.save, &spec.fig_dir)? {
        Some(path) => path,
        None => return Ok(()),
    };
    let draw_err = |message: String| PlotError::Draw { name: spec.name.clone(), message };

    let mut x_data: Vec<&Array1<NumericData>> = curves.iter().map(|curve| curve.x).collect();
    let mut y_data: Vec<&Array1<NumericData>> = curves.iter().map(|curve| curve.y).collect();
    for fill in [&spec.fill1, &spec.fill2].into_iter().flatten() {
        x_data.push(&fill.x);
        y_data.push(&fill.y);
    }
    let (x_lo, x_hi) = axis_range(spec.x_lim_lo, spec.x_lim_hi, &x_data, 0.0);
    let (y_lo, y_hi) = axis_range(spec.y_lim_lo, spec.y_lim_hi, &y_data, 0.05);

    let root = BitMapBackend::new(&path, (spec.fig_width, spec.fig_height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| draw_err(e.to_string()))?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(|e| draw_err(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .axis_desc_style(("sans-serif", spec.axis_font_size as i32))
        .label_style(("sans-serif", spec.tick_font_size as i32))
        .draw()
        .map_err(|e| draw_err(e.to_string()))?;

    let label_fills = fills_labeled(spec);
    for fill in [&spec.fill1, &spec.fill2].into_iter().flatten() {
        let points = fill.x.iter().zip(fill.y.iter()).map(|(x, y)| (*x, *y));
        let color = fill.color;
        let anno = chart
            .draw_series(AreaSeries::new(points, 0.0, color.mix(0.35)))
            .map_err(|e| draw_err(e.to_string()))?;
        if label_fills {
            anno.label(fill.label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.mix(0.35).filled())
            });
        }
    }

    for curve in &curves {
        let points: Vec<(NumericData, NumericData)> =
            curve.x.iter().zip(curve.y.iter()).map(|(x, y)| (*x, *y)).collect();
        let style = curve.color.stroke_width(curve.width);
        let anno = match curve.dash {
            LineDash::Solid => chart.draw_series(LineSeries::new(points, style)),
            LineDash::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 8, style)),
            LineDash::Dotted => chart.draw_series(DashedLineSeries::new(points, 2, 6, style)),
            LineDash::DashDot => chart.draw_series(DashedLineSeries::new(points, 16, 10, style)),
        }
        .map_err(|e| draw_err(e.to_string()))?;
        if !curve.label.is_empty() {
            let color = curve.color;
            let width = curve.width;
            anno.label(curve.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width))
            });
        }
    }

    if wants_legend(&curves, label_fills) {
        chart
            .configure_series_labels()
            .position(spec.legend_loc.to_position())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", spec.tick_font_size as i32))
            .draw()
            .map_err(|e| draw_err(e.to_string()))?;
    }
    root.present().map_err(|e| draw_err(e.to_string()))?;
    info!("saved figure {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn small_spec(dir: &Path) -> FigSpec {
        let x = Array1::linspace(0.0, 1.0, 11);
        let y = x.mapv(|v| v * v);
        let mut spec = FigSpec::new("test_fig", x, y);
        spec.fig_dir = dir.to_path_buf();
        spec.fig_width = 320;
        spec.fig_height = 240;
        spec
    }

    #[test]
    fn save_figure_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let fig_dir = dir.path().join("figs");
        let path = save_figure("demo", true, &fig_dir).unwrap();
        assert!(fig_dir.is_dir());
        assert_eq!(path.unwrap(), fig_dir.join("demo.png"));
    }

    #[test]
    fn unsaved_figure_touches_nothing_but_the_directory() {
        let dir = tempdir().unwrap();
        let fig_dir = dir.path().join("figs");
        let mut spec = small_spec(&fig_dir);
        spec.save = false;
        make_fig(&spec).unwrap();
        assert!(fig_dir.is_dir());
        assert_eq!(fs::read_dir(&fig_dir).unwrap().count(), 0);
    }

    #[test]
    fn single_curve_writes_png() {
        let dir = tempdir().unwrap();
        let spec = small_spec(dir.path());
        make_fig(&spec).unwrap();
        assert!(dir.path().join("test_fig.png").exists());
    }

    #[test]
    fn mismatched_curve_lengths_error() {
        let dir = tempdir().unwrap();
        let mut spec = small_spec(dir.path());
        spec.curve2 = Some(Curve::second(Array1::linspace(0.0, 1.0, 5)));
        let err = make_fig(&spec).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { slot: 2, .. }));
    }

    #[test]
    fn legend_needs_a_labeled_extra_curve() {
        let dir = tempdir().unwrap();
        let mut spec = small_spec(dir.path());
        spec.y1_label = "first".to_string();
        let curves = resolve_curves(&spec).unwrap();
        assert!(!wants_legend(&curves, fills_labeled(&spec)));

        let mut second = Curve::second(spec.y1.clone());
        second.label = "second".to_string();
        spec.curve2 = Some(second);
        let curves = resolve_curves(&spec).unwrap();
        assert!(wants_legend(&curves, fills_labeled(&spec)));
        assert_eq!(curves.iter().filter(|c| !c.label.is_empty()).count(), 2);
    }

    #[test]
    fn fill_labels_require_both_regions_labeled() {
        let dir = tempdir().unwrap();
        let mut spec = small_spec(dir.path());
        let x = spec.x.clone();
        let y = spec.y1.clone();
        let mut fill1 = FillRegion::first(x.clone(), y.clone());
        fill1.label = "CSTR".to_string();
        spec.fill1 = Some(fill1);
        spec.fill2 = Some(FillRegion::second(x, y));
        assert!(!fills_labeled(&spec));

        spec.fill2.as_mut().unwrap().label = "PFR".to_string();
        assert!(fills_labeled(&spec));
    }

    #[test]
    fn default_limits_follow_data_when_upper_bound_missing() {
        let data = Array1::from_vec(vec![2.0, 4.0, 6.0]);
        let arrays = [&data];
        assert_eq!(axis_range(None, Some(10.0), &arrays, 0.0), (0.0, 10.0));
        assert_eq!(axis_range(Some(1.0), Some(10.0), &arrays, 0.0), (1.0, 10.0));
        assert_eq!(axis_range(None, None, &arrays, 0.0), (2.0, 6.0));
    }
}
