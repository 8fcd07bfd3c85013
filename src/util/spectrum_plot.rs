use crate::base::Direction;
use crate::spectrum::SpectrumCurve;
use plotpy::{Curve, Plot};

/// Draws the design spectra (X and Y) and the elastic spectrum
///
/// The ordinates are drawn in the unit of the curve (see [SpectrumCurve::to_units]).
/// The returned plot may be saved with `plot.save(path)`, which requires Python and
/// Matplotlib.
pub fn plot_spectrum(curve: &SpectrumCurve) -> Plot {
    let tt = curve.periods();
    let mut design_x = Curve::new();
    let mut design_y = Curve::new();
    let mut elastic = Curve::new();
    design_x
        .set_label("design X")
        .set_line_color("black")
        .set_line_width(2.5)
        .draw(&tt, &curve.design(Direction::X));
    design_y
        .set_label("design Y")
        .set_line_color("blue")
        .set_line_style(":")
        .set_line_width(1.5)
        .draw(&tt, &curve.design(Direction::Y));
    elastic
        .set_label("elastic")
        .set_line_color("red")
        .set_line_style("--")
        .draw(&tt, &curve.elastic());

    let ylabel = format!("$S_a$ ({})", curve.unit().symbol());
    let mut plot = Plot::new();
    plot.add(&design_x)
        .add(&design_y)
        .add(&elastic)
        .grid_labels_legend("period $T$ (s)", &ylabel)
        .set_figure_size_points(600.0, 400.0);
    plot
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
