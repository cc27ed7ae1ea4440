//! PDF rendering of a [`Report`].
//!
//! Page one carries the title block, the summary table and the GMV and gross
//! revenue bar charts. The booking count area chart starts page two. A
//! detailed report with reservations adds a flow diagram page.
//!
//! Geometry comes from [`super::chart`]; this module only paints it with
//! `printpdf` using the built-in Helvetica faces.

use super::chart::{ChartLayout, FlowLayout, Rect};
use super::config::{Palette, Rgb8};
use super::data_storage::{APP_NAME, APP_VERSION};
use super::error::{ReportError, Result};
use super::formatter::{format_bar_label, format_count, format_number, format_summary_row};
use super::messages::Message;
use super::report::{Metric, Report};
use chrono::Local;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Polygon, Pt, Rgb,
    TextMatrix,
};
use std::io::{BufWriter, Write};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 18.0;
const PT_TO_MM: f32 = 0.3528;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 9.0;
const SMALL_SIZE: f32 = 6.5;
const LINE_HEIGHT: f32 = 5.0;

const TABLE_ROW_HEIGHT: f32 = 7.0;
const TABLE_COLUMNS: [(&str, f32); 6] = [
    ("Metric", 44.0),
    ("Total", 30.0),
    ("Average", 26.0),
    ("Max", 26.0),
    ("Min", 26.0),
    ("Days with data", 22.0),
];

/// Title, plot and x-label band of one chart.
const CHART_HEIGHT: f32 = 82.0;
const CHART_TITLE_BAND: f32 = 9.0;
const CHART_LABEL_BAND: f32 = 14.0;
const Y_AXIS_BAND: f32 = 16.0;
const FLOW_BAND_STEPS: usize = 24;

/// Approximate advance width of Helvetica text, used to centre labels.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

fn color(rgb: Rgb8) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn points(outline: &[(f32, f32)]) -> Vec<(Point, bool)> {
    outline.iter().map(|(x, y)| (Point::new(Mm(*x), Mm(*y)), false)).collect()
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Paints one report with one palette.
pub struct PdfRenderer<'a> {
    report: &'a Report,
    palette: &'a Palette,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(report: &'a Report, palette: &'a Palette) -> Self {
        Self { report, palette }
    }

    /// Renders the whole document into `writer`.
    pub fn render<W: Write>(&self, writer: &mut BufWriter<W>) -> Result<()> {
        let doc = self.build()?;
        doc.save(writer).map_err(|e| ReportError::Pdf(e.to_string()))
    }

    fn build(&self) -> Result<PdfDocumentReference> {
        let title = format!("Daily Report {}", self.report.scope.space_id);
        let (doc, page, layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let doc = doc.with_producer(format!("{} {}", APP_NAME, APP_VERSION));

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ReportError::Pdf(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ReportError::Pdf(e.to_string()))?,
        };

        let layer = doc.get_page(page).get_layer(layer);
        let mut cursor = PAGE_HEIGHT - MARGIN;
        cursor = self.title_block(&layer, &fonts, cursor);
        cursor = self.summary_table(&layer, &fonts, cursor - 4.0);
        cursor -= 6.0;

        for metric in [Metric::Gmv, Metric::GrossRevenue] {
            self.chart(&layer, &fonts, metric, cursor);
            cursor -= CHART_HEIGHT + 4.0;
        }

        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        self.chart(&layer, &fonts, Metric::BookingCount, PAGE_HEIGHT - MARGIN);

        if let Some(flow) = self.report.flow.as_ref().filter(|flow| !flow.is_empty()) {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            let layer = doc.get_page(page).get_layer(layer);
            let top = PAGE_HEIGHT - MARGIN;
            self.text(&layer, &fonts.bold, "Checkouts by Room Type and Time Slot", HEADING_SIZE, MARGIN, top - 6.0);
            let area = Rect::new(MARGIN + 40.0, MARGIN + 20.0, PAGE_WIDTH - 2.0 * MARGIN - 80.0, top - MARGIN - 40.0);
            self.flow_diagram(&layer, &fonts, &FlowLayout::new(flow, area));
        }

        Ok(doc)
    }

    fn text(&self, layer: &PdfLayerReference, font: &IndirectFontRef, text: &str, size: f32, x: f32, y: f32) {
        layer.set_fill_color(color(self.palette.text));
        layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn centered_text(&self, layer: &PdfLayerReference, font: &IndirectFontRef, text: &str, size: f32, cx: f32, y: f32) {
        self.text(layer, font, text, size, cx - text_width(text, size) / 2.0, y);
    }

    fn fill_rect(&self, layer: &PdfLayerReference, rect: Rect, fill: Rgb8, edge: Option<Rgb8>) {
        layer.set_fill_color(color(fill));
        let mode = match edge {
            Some(edge) => {
                layer.set_outline_color(color(edge));
                layer.set_outline_thickness(0.5);
                PaintMode::FillStroke
            }
            None => PaintMode::Fill,
        };
        layer.add_polygon(Polygon {
            rings: vec![points(&rect.corners())],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn line(&self, layer: &PdfLayerReference, from: (f32, f32), to: (f32, f32), stroke: Rgb8, thickness: f32) {
        layer.set_outline_color(color(stroke));
        layer.set_outline_thickness(thickness);
        layer.add_line(Line {
            points: points(&[from, to]),
            is_closed: false,
        });
    }

    /// Writes the title and metadata lines, returning the y below them.
    fn title_block(&self, layer: &PdfLayerReference, fonts: &Fonts, top: f32) -> f32 {
        let scope = &self.report.scope;
        let mut y = top - 6.0;
        self.text(layer, &fonts.bold, "Daily GMV and Booking Report", TITLE_SIZE, MARGIN, y);
        y -= 10.0;

        let mut lines = vec![
            format!("Space ID: {}", scope.space_id),
            format!("Period: {} to {}", scope.start, scope.end),
            format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        ];
        if let Some(info) = &self.report.hotel_info {
            lines.push(format!("Hotel: {}", info.name));
            lines.push(format!("Cancelled bookings: {}", format_count(info.cancelled_count)));
            if !info.emails.is_empty() {
                lines.push(format!("Notification emails: {}", info.emails.join(", ")));
            }
        }
        for line in &lines {
            self.text(layer, &fonts.regular, line, BODY_SIZE, MARGIN, y);
            y -= LINE_HEIGHT;
        }

        if self.report.estimated {
            self.text(layer, &fonts.bold, &Message::SeriesEstimated.to_string(), BODY_SIZE, MARGIN, y);
            y -= LINE_HEIGHT;
        }
        y
    }

    /// Draws the metric by statistic table, returning the y below it.
    fn summary_table(&self, layer: &PdfLayerReference, fonts: &Fonts, top: f32) -> f32 {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            let mut row = vec![metric.label()];
            row.extend(format_summary_row(metric, self.report.summary.get(metric)));
            rows.push(row);
        }

        let mut y = top - TABLE_ROW_HEIGHT;
        let mut x = MARGIN;
        for (title, width) in TABLE_COLUMNS {
            let cell = Rect::new(x, y, width, TABLE_ROW_HEIGHT);
            self.fill_rect(layer, cell, self.palette.table_header_fill, Some(self.palette.table_border));
            layer.set_fill_color(color(self.palette.table_header_text));
            layer.use_text(title, BODY_SIZE, Mm(x + 2.0), Mm(y + 2.3), &fonts.bold);
            x += width;
        }

        for row in &rows {
            y -= TABLE_ROW_HEIGHT;
            let mut x = MARGIN;
            for (cell_text, (_, width)) in row.iter().zip(TABLE_COLUMNS) {
                let cell = Rect::new(x, y, width, TABLE_ROW_HEIGHT);
                self.fill_rect(layer, cell, self.palette.table_body_fill, Some(self.palette.table_border));
                self.text(layer, &fonts.regular, cell_text, BODY_SIZE, x + 2.0, y + 2.3);
                x += width;
            }
        }
        y
    }

    /// Draws one chart whose title band starts at `top`.
    fn chart(&self, layer: &PdfLayerReference, fonts: &Fonts, metric: Metric, top: f32) {
        let plot = Rect::new(
            MARGIN + Y_AXIS_BAND,
            top - CHART_HEIGHT + CHART_LABEL_BAND,
            PAGE_WIDTH - 2.0 * MARGIN - Y_AXIS_BAND,
            CHART_HEIGHT - CHART_TITLE_BAND - CHART_LABEL_BAND,
        );
        let layout = ChartLayout::new(&self.report.series_points(metric), plot);

        self.centered_text(layer, &fonts.bold, metric.chart_title(), HEADING_SIZE, plot.x + plot.width / 2.0, top - 6.0);

        for (y, value) in &layout.y_ticks {
            self.line(layer, (plot.x, *y), (plot.right(), *y), self.palette.grid, 0.3);
            let label = format_number(*value, 0);
            self.text(layer, &fonts.regular, &label, SMALL_SIZE, plot.x - text_width(&label, SMALL_SIZE) - 1.5, *y - 1.0);
        }
        self.text(layer, &fonts.regular, metric.axis_label(), SMALL_SIZE, MARGIN - 4.0, plot.top() + 2.0);

        match metric {
            Metric::BookingCount => {
                let outline = layout.area_outline();
                if !outline.is_empty() {
                    layer.set_fill_color(color(self.palette.area_fill));
                    layer.set_outline_color(color(self.palette.area_edge));
                    layer.set_outline_thickness(0.8);
                    layer.add_polygon(Polygon {
                        rings: vec![points(&outline)],
                        mode: PaintMode::FillStroke,
                        winding_order: WindingOrder::NonZero,
                    });
                }
            }
            Metric::Gmv | Metric::GrossRevenue => {
                for bar in &layout.bars {
                    if bar.rect.height <= 0.0 {
                        continue;
                    }
                    self.fill_rect(layer, bar.rect, self.palette.bar_fill, Some(self.palette.bar_edge));
                    let label = format_bar_label(bar.value);
                    self.centered_text(layer, &fonts.regular, &label, SMALL_SIZE - 1.5, bar.rect.x + bar.rect.width / 2.0, bar.rect.top() + 1.0);
                }
            }
        }

        self.line(layer, (plot.x, plot.y), (plot.right(), plot.y), self.palette.text, 0.5);
        self.line(layer, (plot.x, plot.y), (plot.x, plot.top()), self.palette.text, 0.5);

        for (cx, label) in &layout.x_labels {
            self.rotated_label(layer, &fonts.regular, label, *cx, plot.y - 2.0);
        }
    }

    /// Date label at 45 degrees, ending just below the tick at `(cx, y)`.
    fn rotated_label(&self, layer: &PdfLayerReference, font: &IndirectFontRef, label: &str, cx: f32, y: f32) {
        let run = text_width(label, SMALL_SIZE) * std::f32::consts::FRAC_1_SQRT_2;
        layer.set_fill_color(color(self.palette.text));
        layer.begin_text_section();
        layer.set_font(font, SMALL_SIZE);
        layer.set_text_matrix(TextMatrix::TranslateRotate(Pt::from(Mm(cx - run)), Pt::from(Mm(y - run)), 45.0));
        layer.write_text(label, font);
        layer.end_text_section();
    }

    fn flow_diagram(&self, layer: &PdfLayerReference, fonts: &Fonts, layout: &FlowLayout) {
        for link in &layout.links {
            layer.set_fill_color(color(self.palette.flow_color(link.source).lighten()));
            layer.add_polygon(Polygon {
                rings: vec![points(&layout.band_outline(link, FLOW_BAND_STEPS))],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }

        for (i, node) in layout.sources.iter().enumerate() {
            self.fill_rect(layer, node.rect, self.palette.flow_color(i), None);
            let label = format!("{} ({})", node.label, format_count(node.count));
            let mid = node.rect.y + node.rect.height / 2.0 - 1.2;
            self.text(layer, &fonts.regular, &label, BODY_SIZE, node.rect.x - text_width(&label, BODY_SIZE) - 2.0, mid);
        }

        let offset = layout.sources.len();
        for (i, node) in layout.targets.iter().enumerate() {
            self.fill_rect(layer, node.rect, self.palette.flow_color(offset + i), None);
            let label = format!("{} ({})", node.label, format_count(node.count));
            let mid = node.rect.y + node.rect.height / 2.0 - 1.2;
            self.text(layer, &fonts.regular, &label, BODY_SIZE, node.rect.right() + 2.0, mid);
        }
    }
}
