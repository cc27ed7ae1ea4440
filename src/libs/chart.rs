//! Chart geometry for the PDF report.
//!
//! Layout is computed here in millimetres with the origin at the bottom-left
//! of the page, independently of the PDF backend, so it can be checked in
//! tests. `libs::pdf` only paints the shapes.

use crate::libs::calendar::DATE_FORMAT;
use crate::libs::flow::FlowTable;
use chrono::NaiveDate;

/// Axis-aligned rectangle, `y` is the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.x, self.y),
            (self.right(), self.y),
            (self.right(), self.top()),
            (self.x, self.top()),
        ]
    }
}

/// Number of x-axis labels aimed for on a daily chart.
const TARGET_X_LABELS: usize = 10;
/// Fraction of a day slot occupied by its bar.
const BAR_WIDTH_RATIO: f32 = 0.8;
const Y_TICKS: usize = 5;

/// Every `n`-th date gets an x-axis label.
pub fn label_interval(points: usize) -> usize {
    (points / TARGET_X_LABELS).max(1)
}

/// Rounds `max` up to 1, 2 or 5 times a power of ten. Zero or negative gives 1.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub value: f64,
    pub rect: Rect,
}

/// Positions shared by the bar and area charts of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: Rect,
    pub y_max: f64,
    /// `(y position, value)` of each horizontal grid line, bottom to top.
    pub y_ticks: Vec<(f32, f64)>,
    /// `(x centre, text)` of each date label.
    pub x_labels: Vec<(f32, String)>,
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    /// Lays out one bar per point inside `plot`.
    pub fn new(points: &[(NaiveDate, f64)], plot: Rect) -> Self {
        let max = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let y_max = nice_ceiling(max);

        let slot = if points.is_empty() { plot.width } else { plot.width / points.len() as f32 };
        let bar_width = slot * BAR_WIDTH_RATIO;

        let bars = points
            .iter()
            .enumerate()
            .map(|(i, (date, value))| {
                let height = ((value.max(0.0) / y_max) as f32) * plot.height;
                let x = plot.x + slot * i as f32 + (slot - bar_width) / 2.0;
                Bar {
                    date: *date,
                    value: *value,
                    rect: Rect::new(x, plot.y, bar_width, height),
                }
            })
            .collect();

        let y_ticks = (0..=Y_TICKS)
            .map(|i| {
                let fraction = i as f32 / Y_TICKS as f32;
                (plot.y + plot.height * fraction, y_max * fraction as f64)
            })
            .collect();

        let interval = label_interval(points.len());
        let x_labels = points
            .iter()
            .enumerate()
            .filter(|(i, _)| i % interval == 0)
            .map(|(i, (date, _))| (plot.x + slot * (i as f32 + 0.5), date.format(DATE_FORMAT).to_string()))
            .collect();

        Self {
            plot,
            y_max,
            y_ticks,
            x_labels,
            bars,
        }
    }

    /// Closed outline of an area chart through the bar centres.
    pub fn area_outline(&self) -> Vec<(f32, f32)> {
        let mut outline = Vec::with_capacity(self.bars.len() + 2);
        if let (Some(first), Some(last)) = (self.bars.first(), self.bars.last()) {
            let first_x = first.rect.x + first.rect.width / 2.0;
            let last_x = last.rect.x + last.rect.width / 2.0;
            outline.push((first_x, self.plot.y));
            outline.extend(self.bars.iter().map(|bar| (bar.rect.x + bar.rect.width / 2.0, bar.rect.top())));
            outline.push((last_x, self.plot.y));
        }
        outline
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub label: String,
    pub count: u64,
    pub rect: Rect,
}

/// A band from a room node to a time-slot node.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub count: u64,
    /// Top and bottom of the band where it leaves the source node.
    pub source_span: (f32, f32),
    /// Top and bottom of the band where it enters the target node.
    pub target_span: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    pub sources: Vec<FlowNode>,
    pub targets: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

const NODE_WIDTH: f32 = 6.0;
const NODE_GAP: f32 = 4.0;

impl FlowLayout {
    /// Rooms on the left edge of `area`, time slots on the right.
    /// Node heights are proportional to their counts.
    pub fn new(flow: &FlowTable, area: Rect) -> Self {
        let total = flow.total();
        let rooms: Vec<(String, u64)> = flow.by_room.iter().map(|(room, count)| (room.clone(), *count)).collect();
        let slots = flow.by_slot();

        if total == 0 {
            return Self {
                sources: Vec::new(),
                targets: Vec::new(),
                links: Vec::new(),
            };
        }

        let max_nodes = rooms.len().max(slots.len()).max(1);
        let usable = (area.height - NODE_GAP * (max_nodes - 1) as f32).max(area.height * 0.25);
        let scale = usable / total as f32;

        let stack = |entries: &[(String, u64)], x: f32| -> Vec<FlowNode> {
            let mut cursor = area.top();
            entries
                .iter()
                .map(|(label, count)| {
                    let height = *count as f32 * scale;
                    let node = FlowNode {
                        label: label.clone(),
                        count: *count,
                        rect: Rect::new(x, cursor - height, NODE_WIDTH, height),
                    };
                    cursor -= height + NODE_GAP;
                    node
                })
                .collect()
        };

        let sources = stack(&rooms, area.x);
        let targets = stack(&slots, area.right() - NODE_WIDTH);

        let mut source_cursor: Vec<f32> = sources.iter().map(|node| node.rect.top()).collect();
        let mut target_cursor: Vec<f32> = targets.iter().map(|node| node.rect.top()).collect();
        let mut links = Vec::new();

        for (s, source) in sources.iter().enumerate() {
            for (t, target) in targets.iter().enumerate() {
                let count = flow.count(&source.label, &target.label);
                if count == 0 {
                    continue;
                }
                let thickness = count as f32 * scale;
                let source_span = (source_cursor[s], source_cursor[s] - thickness);
                let target_span = (target_cursor[t], target_cursor[t] - thickness);
                source_cursor[s] -= thickness;
                target_cursor[t] -= thickness;
                links.push(FlowLink {
                    source: s,
                    target: t,
                    count,
                    source_span,
                    target_span,
                });
            }
        }

        Self { sources, targets, links }
    }

    /// Polygon of a link band, eased between the two node edges.
    pub fn band_outline(&self, link: &FlowLink, steps: usize) -> Vec<(f32, f32)> {
        let x0 = self.sources[link.source].rect.right();
        let x1 = self.targets[link.target].rect.x;
        let steps = steps.max(1);

        let ease = |t: f32| t * t * (3.0 - 2.0 * t);
        let point = |i: usize, span_at: fn(&(f32, f32)) -> f32| {
            let t = i as f32 / steps as f32;
            let e = ease(t);
            let y0 = span_at(&link.source_span);
            let y1 = span_at(&link.target_span);
            (x0 + (x1 - x0) * t, y0 + (y1 - y0) * e)
        };

        let mut outline: Vec<(f32, f32)> = (0..=steps).map(|i| point(i, |span| span.0)).collect();
        outline.extend((0..=steps).rev().map(|i| point(i, |span| span.1)));
        outline
    }
}
