use crate::api::chart_model::ChartHandle;
use crate::core::DatasetStyles;

/// Extra stroke width applied to a series while its legend entry is hovered.
const HOVER_EXTRA_BORDER_PX: f64 = 4.0;

/// One entry of the rendered legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    pub hidden: bool,
    pub fill_style: String,
    pub dataset_index: usize,
}

/// Builds legend entries from the resource styles, reflecting per-dataset
/// visibility overrides held by the engine.
#[must_use]
pub fn generate_labels<C: ChartHandle>(chart: &C, styles: &DatasetStyles) -> Vec<LegendEntry> {
    styles
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let hidden = (0..chart.dataset_count())
                .find(|&idx| chart.dataset_label(idx) == Some(label.as_str()))
                .and_then(|idx| chart.dataset_hidden(idx))
                .unwrap_or(false);
            LegendEntry {
                text: label.clone(),
                hidden,
                fill_style: styles.color(index).to_owned(),
                dataset_index: index,
            }
        })
        .collect()
}

/// Toggles visibility of every dataset carrying a label, outline twins
/// included, then requests a re-render.
///
/// The first toggle overrides the dataset's own flag; toggling again
/// releases the override.
pub fn toggle_visibility<C: ChartHandle>(chart: &mut C, label: &str) {
    for index in 0..chart.dataset_count() {
        if chart.dataset_label(index) != Some(label) {
            continue;
        }
        let meta = chart.dataset_meta(index).unwrap_or_default();
        let next = match meta.hidden {
            None => chart.dataset_base_hidden(index).map(|base| !base),
            Some(_) => None,
        };
        chart.set_dataset_meta_hidden(index, next);
    }
    chart.request_update();
}

/// Temporarily thickens the first dataset carrying a label.
pub fn hover_highlight<C: ChartHandle>(chart: &mut C, label: &str, base_border_width: f64) {
    set_border_width_by_label(chart, label, base_border_width + HOVER_EXTRA_BORDER_PX);
}

/// Restores a hovered dataset's stroke width.
pub fn leave_highlight<C: ChartHandle>(chart: &mut C, label: &str, base_border_width: f64) {
    set_border_width_by_label(chart, label, base_border_width);
}

fn set_border_width_by_label<C: ChartHandle>(chart: &mut C, label: &str, width: f64) {
    let target = (0..chart.dataset_count())
        .find(|&index| chart.dataset_label(index) == Some(label));
    if let Some(index) = target {
        chart.set_dataset_border_width(index, width);
        chart.request_update();
    }
}
