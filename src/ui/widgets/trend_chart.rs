//! Line chart widget for progress trends.

use egui::{Color32, Response, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoints};

/// A labeled line chart over evenly spaced samples.
pub struct TrendChart<'a> {
    /// Plot id, must be unique per chart
    id: &'a str,
    /// Series name shown in the legend
    series: &'a str,
    /// X tick labels, one per sample
    labels: &'a [&'static str],
    /// Sample values
    values: &'a [f64],
    /// Line and fill color
    color: Color32,
    /// Chart height
    height: f32,
}

impl<'a> TrendChart<'a> {
    /// Create a chart for one series.
    pub fn new(
        id: &'a str,
        series: &'a str,
        labels: &'a [&'static str],
        values: &'a [f64],
    ) -> Self {
        Self {
            id,
            series,
            labels,
            values,
            color: Color32::from_rgb(76, 175, 80),
            height: 240.0,
        }
    }

    /// Set the series color.
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        if self.values.is_empty() {
            return ui.label("No data to chart yet.");
        }

        let points: Vec<[f64; 2]> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v])
            .collect();

        let line = Line::new(self.series, PlotPoints::new(points))
            .color(self.color)
            .fill(0.0)
            .style(LineStyle::Solid)
            .width(2.0);

        let labels = self.labels.to_vec();
        let tick_labels = labels.clone();

        Plot::new(self.id)
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(true)
            .show_y(true)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let i = mark.value.round() as usize;
                if (mark.value - i as f64).abs() < 0.01 {
                    tick_labels.get(i).map(|l| l.to_string()).unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .label_formatter(move |name, value| {
                let i = value.x.round().clamp(0.0, f64::MAX) as usize;
                let label = labels.get(i).copied().unwrap_or("");
                if name.is_empty() {
                    format!("{}: {:.0}", label, value.y)
                } else {
                    format!("{}\n{}: {:.0}", name, label, value.y)
                }
            })
            .legend(egui_plot::Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            })
            .response
    }
}
