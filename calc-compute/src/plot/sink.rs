use calc_collections::List;

/// Something that can render a scatter plot.
///
/// The sampler calls [`DrawingSink::draw_scatter_plot`] exactly once per successful sweep, with
/// `xs` and `ys` of equal length in sweep order.
pub trait DrawingSink {
    /// Draws the points `(xs[i], ys[i])`.
    fn draw_scatter_plot(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        xs: &List<f64>,
        ys: &List<f64>,
    );
}

/// Discards every plot.
impl DrawingSink for () {
    fn draw_scatter_plot(&mut self, _: &str, _: &str, _: &str, _: &List<f64>, _: &List<f64>) {}
}

/// Records every plot, in the order they were drawn.
impl DrawingSink for Vec<ScatterPlot> {
    fn draw_scatter_plot(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        xs: &List<f64>,
        ys: &List<f64>,
    ) {
        self.push(ScatterPlot {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            xs: xs.clone(),
            ys: ys.clone(),
        });
    }
}

impl<D: DrawingSink + ?Sized> DrawingSink for &mut D {
    fn draw_scatter_plot(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        xs: &List<f64>,
        ys: &List<f64>,
    ) {
        (**self).draw_scatter_plot(title, x_label, y_label, xs, ys);
    }
}

/// A recorded call to [`DrawingSink::draw_scatter_plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    /// The title of the plot.
    pub title: String,

    /// The label of the horizontal axis.
    pub x_label: String,

    /// The label of the vertical axis.
    pub y_label: String,

    /// The horizontal coordinates.
    pub xs: List<f64>,

    /// The vertical coordinates.
    pub ys: List<f64>,
}

impl ScatterPlot {
    /// Returns the points of the plot.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
