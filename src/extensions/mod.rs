pub mod decorations;
pub mod tooltip;

pub use decorations::{
    CalloutGeometry, band_background_scene, highest_callout_scene, highest_line_scene,
};
pub use tooltip::{
    CanvasBox, RatingTooltipRenderer, TooltipItem, TooltipModel, TooltipPlacement,
    TooltipRenderer, place_tooltip, tooltip_items,
};
