//! Chart.js configuration model for the two dashboard charts, and the registry
//! that owns one live instance per canvas.
//!
//! The charting library itself sits behind [`ChartBackend`]; the registry only
//! decides what to create, recolor and resize.

use crate::palette::Palette;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const POINT_BORDER: &str = "#ffffff";
pub const SLICE_BORDER: &str = "#ffffff";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartKind {
    Revenue,
    Services,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Revenue, ChartKind::Services];

    /// Id of the `<canvas>` the chart is drawn into.
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Revenue => "revenueChart",
            ChartKind::Services => "servicesChart",
        }
    }

    pub fn from_canvas_id(canvas_id: &str) -> Option<ChartKind> {
        Self::ALL.into_iter().find(|k| k.canvas_id() == canvas_id)
    }

    pub fn build_config(self, palette: &Palette, font_family: &str) -> ChartConfig {
        match self {
            ChartKind::Revenue => revenue_config(palette, font_family),
            ChartKind::Services => services_config(palette, font_family),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Doughnut,
}

/// `{ type, data, options }` as the Chart.js constructor takes it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerSlice(Vec<String>),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Elements>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub labels: LegendLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub ticks: Ticks,
    pub grid: Grid,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: String,
    pub font: Font,
    /// Tick labels go through `Intl.NumberFormat('fa-IR')`; the backend installs the callback.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub persian_digits: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Elements {
    pub point: PointElement,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointElement {
    pub hover_background_color: String,
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn font(family: &str, size: Option<u32>) -> Font {
    Font {
        family: family.to_string(),
        size,
    }
}

fn axis(palette: &Palette, font_family: &str, begin_at_zero: Option<bool>, persian_digits: bool) -> Axis {
    Axis {
        begin_at_zero,
        ticks: Ticks {
            color: palette.text.to_string(),
            font: font(font_family, None),
            persian_digits,
        },
        grid: Grid {
            color: palette.grid.to_string(),
        },
    }
}

/// Weekly revenue line chart (tomans per weekday).
pub fn revenue_config(palette: &Palette, font_family: &str) -> ChartConfig {
    let dataset = Dataset {
        label: Some("درآمد (تومان)".to_string()),
        data: vec![1_200_000, 1_900_000, 3_000_000, 2_100_000, 2_800_000, 2_450_000, 1_800_000],
        border_color: Some(palette.primary.to_string()),
        background_color: Some(ColorSpec::Single(Palette::translucent(palette.primary))),
        border_width: Some(3),
        fill: Some(true),
        tension: Some(0.4),
        point_background_color: Some(palette.primary.to_string()),
        point_border_color: Some(POINT_BORDER.to_string()),
        point_border_width: Some(2),
        point_radius: Some(6),
        point_hover_radius: Some(8),
        hover_offset: None,
    };
    ChartConfig {
        chart_type: ChartType::Line,
        data: ChartData {
            labels: labels(&["شنبه", "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنج‌شنبه", "جمعه"]),
            datasets: vec![dataset],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    position: None,
                    labels: LegendLabels {
                        color: palette.text.to_string(),
                        font: font(font_family, Some(12)),
                        padding: None,
                    },
                },
            },
            scales: Some(Scales {
                x: axis(palette, font_family, None, false),
                y: axis(palette, font_family, Some(true), true),
            }),
            elements: Some(Elements {
                point: PointElement {
                    hover_background_color: palette.primary.to_string(),
                },
            }),
        },
    }
}

/// Share of services doughnut (percent per service).
pub fn services_config(palette: &Palette, font_family: &str) -> ChartConfig {
    let dataset = Dataset {
        data: vec![30, 25, 20, 15, 10],
        background_color: Some(ColorSpec::PerSlice(palette.services_slices())),
        border_color: Some(SLICE_BORDER.to_string()),
        border_width: Some(2),
        hover_offset: Some(4),
        ..Dataset::default()
    };
    ChartConfig {
        chart_type: ChartType::Doughnut,
        data: ChartData {
            labels: labels(&["کوتاهی مو", "رنگ مو", "میکاپ", "ناخن", "ابرو"]),
            datasets: vec![dataset],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    position: Some("bottom".to_string()),
                    labels: LegendLabels {
                        color: palette.text.to_string(),
                        font: font(font_family, Some(11)),
                        padding: Some(15),
                    },
                },
            },
            scales: None,
            elements: None,
        },
    }
}

/// Overwrites the style fields of an existing config with `palette`. Data is untouched.
pub fn apply_palette(kind: ChartKind, config: &mut ChartConfig, palette: &Palette) {
    config.options.plugins.legend.labels.color = palette.text.to_string();
    match kind {
        ChartKind::Revenue => {
            if let Some(ds) = config.data.datasets.first_mut() {
                ds.border_color = Some(palette.primary.to_string());
                ds.background_color = Some(ColorSpec::Single(Palette::translucent(palette.primary)));
                ds.point_background_color = Some(palette.primary.to_string());
            }
            if let Some(scales) = config.options.scales.as_mut() {
                for axis in [&mut scales.x, &mut scales.y] {
                    axis.ticks.color = palette.text.to_string();
                    axis.grid.color = palette.grid.to_string();
                }
            }
            if let Some(elements) = config.options.elements.as_mut() {
                elements.point.hover_background_color = palette.primary.to_string();
            }
        }
        ChartKind::Services => {
            if let Some(ds) = config.data.datasets.first_mut() {
                ds.background_color = Some(ColorSpec::PerSlice(palette.services_slices()));
            }
        }
    }
}

/// The external charting library.
pub trait ChartBackend {
    /// Constructs a chart on `canvas_id`, replacing any chart already drawn there.
    ///
    /// Returns true when the chart exists by the time this returns. Backends that
    /// build asynchronously return false and report the outcome later through
    /// [`ChartRegistry::confirm`].
    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> bool;
    /// Pushes the new style fields of `config` into the live chart and redraws it.
    fn update(&mut self, canvas_id: &str, config: &ChartConfig);
    fn resize(&mut self, canvas_id: &str);
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    config: ChartConfig,
    live: bool,
    /// Recolored while the create was in flight; the drawn chart still has the old colors.
    stale: bool,
}

/// Chart instances, at most one per canvas. An entry is pending from `initialize`
/// until the backend has built it, and live afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartRegistry {
    font_family: String,
    charts: BTreeMap<ChartKind, Entry>,
}

impl ChartRegistry {
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
            charts: BTreeMap::new(),
        }
    }

    /// Creates the chart when its canvas exists. Returns false (and does nothing) otherwise.
    pub fn initialize<B: ChartBackend + ?Sized>(
        &mut self,
        kind: ChartKind,
        target_present: bool,
        palette: &Palette,
        backend: &mut B,
    ) -> bool {
        if !target_present {
            debug!("charts: #{} not on page, skipping", kind.canvas_id());
            return false;
        }
        let config = kind.build_config(palette, &self.font_family);
        let live = backend.create(kind.canvas_id(), &config);
        self.charts.insert(kind, Entry { config, live, stale: false });
        debug!("charts: #{} {}", kind.canvas_id(), if live { "created" } else { "pending" });
        true
    }

    /// Outcome of an asynchronous create. A chart recolored while pending gets the
    /// current colors pushed now; a failed create is forgotten so it can be retried.
    pub fn confirm<B: ChartBackend + ?Sized>(&mut self, kind: ChartKind, created: bool, backend: &mut B) {
        if !created {
            if self.charts.remove(&kind).is_some() {
                warn!("charts: #{} could not be created", kind.canvas_id());
            }
            return;
        }
        let Some(entry) = self.charts.get_mut(&kind) else { return };
        entry.live = true;
        if entry.stale {
            entry.stale = false;
            backend.update(kind.canvas_id(), &entry.config);
        }
        debug!("charts: created #{}", kind.canvas_id());
    }

    pub fn initialize_revenue_chart<B: ChartBackend + ?Sized>(
        &mut self,
        target_present: bool,
        palette: &Palette,
        backend: &mut B,
    ) -> bool {
        self.initialize(ChartKind::Revenue, target_present, palette, backend)
    }

    pub fn initialize_services_chart<B: ChartBackend + ?Sized>(
        &mut self,
        target_present: bool,
        palette: &Palette,
        backend: &mut B,
    ) -> bool {
        self.initialize(ChartKind::Services, target_present, palette, backend)
    }

    /// Re-applies `palette` to every chart. Live charts are redrawn now, pending
    /// ones once their create is confirmed.
    pub fn recolor<B: ChartBackend + ?Sized>(&mut self, palette: &Palette, backend: &mut B) {
        for (kind, entry) in self.charts.iter_mut() {
            apply_palette(*kind, &mut entry.config, palette);
            if entry.live {
                backend.update(kind.canvas_id(), &entry.config);
            } else {
                entry.stale = true;
            }
        }
    }

    pub fn resize_all<B: ChartBackend + ?Sized>(&self, backend: &mut B) {
        for (kind, _) in self.charts.iter().filter(|(_, e)| e.live) {
            backend.resize(kind.canvas_id());
        }
    }

    pub fn get(&self, kind: ChartKind) -> Option<&ChartConfig> {
        self.charts.get(&kind).map(|e| &e.config)
    }

    /// Registered, live or pending.
    pub fn contains(&self, kind: ChartKind) -> bool {
        self.charts.contains_key(&kind)
    }

    pub fn is_live(&self, kind: ChartKind) -> bool {
        self.charts.get(&kind).is_some_and(|e| e.live)
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }
}
