// Tema oscuro fijo del mapa de parceiros

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Styler {
    pub color: &'static str,
}

/// Regla de estilo de Google Maps (`MapTypeStyle`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<&'static str>,
    pub element_type: &'static str,
    pub stylers: &'static [Styler],
}

const fn rule(feature_type: Option<&'static str>, element_type: &'static str, stylers: &'static [Styler]) -> StyleRule {
    StyleRule { feature_type, element_type, stylers }
}

pub const DARK_THEME: &[StyleRule] = &[
    rule(None, "geometry", &[Styler { color: "#242f3e" }]),
    rule(None, "labels.text.stroke", &[Styler { color: "#242f3e" }]),
    rule(None, "labels.text.fill", &[Styler { color: "#746855" }]),
    rule(Some("administrative.locality"), "labels.text.fill", &[Styler { color: "#d59563" }]),
    rule(Some("poi"), "labels.text.fill", &[Styler { color: "#d59563" }]),
    rule(Some("poi.park"), "geometry", &[Styler { color: "#263c3f" }]),
    rule(Some("poi.park"), "labels.text.fill", &[Styler { color: "#6b9a76" }]),
    rule(Some("road"), "geometry", &[Styler { color: "#38414e" }]),
    rule(Some("road"), "geometry.stroke", &[Styler { color: "#212a37" }]),
    rule(Some("road"), "labels.text.fill", &[Styler { color: "#9ca5b3" }]),
    rule(Some("road.highway"), "geometry", &[Styler { color: "#746855" }]),
    rule(Some("road.highway"), "geometry.stroke", &[Styler { color: "#1f2835" }]),
    rule(Some("road.highway"), "labels.text.fill", &[Styler { color: "#f3d19c" }]),
    rule(Some("transit"), "geometry", &[Styler { color: "#2f3948" }]),
    rule(Some("transit.station"), "labels.text.fill", &[Styler { color: "#d59563" }]),
    rule(Some("water"), "geometry", &[Styler { color: "#17263c" }]),
    rule(Some("water"), "labels.text.fill", &[Styler { color: "#515c6d" }]),
    rule(Some("water"), "labels.text.stroke", &[Styler { color: "#17263c" }]),
];

pub const MAP_TYPE_ROADMAP: &str = "roadmap";

/// Icono del marcador: círculo relleno
pub const MARKER_FILL_OPACITY: f64 = 0.9;
pub const MARKER_STROKE_WEIGHT: f64 = 2.0;
pub const MARKER_STROKE_COLOR: &str = "#000000";
pub const MARKER_SCALE: f64 = 10.0;

pub const INFO_WINDOW_MAX_WIDTH: f64 = 250.0;
