use plotters::coord::Shift;
use plotters::element::{Circle, PathElement, Polygon, Rectangle, Text};
use plotters::prelude::{DrawingArea, IntoDrawingArea};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color as _, FontDesc, FontFamily, FontStyle, RGBAColor, TextStyle};
use plotters_svg::SVGBackend;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LayerPrimitives, LineStrokeStyle, RenderFrame, Renderer, TextHAlign};

type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub polygons_drawn: usize,
    pub rects_drawn: usize,
    pub polylines_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// SVG renderer backed by `plotters-svg`.
///
/// Each `render` call produces a complete standalone SVG document that
/// replaces the previous one, which is what browser dashboards embed.
/// Coordinates are rounded to whole pixels; rect corner radii are not
/// representable and are drawn square. Dashed polylines are emitted as their
/// individual dash pieces.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Color,
    document: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            document: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "plotters-svg"
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    /// Last rendered SVG document (empty before the first render).
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut buffer = String::new();
        let mut stats = SvgRenderStats::default();
        {
            let root = SVGBackend::with_string(
                &mut buffer,
                (frame.viewport.width, frame.viewport.height),
            )
            .into_drawing_area();
            root.fill(&to_plotters_color(self.background))
                .map_err(|err| backend_error("failed to clear svg surface", err))?;

            for layer in &frame.layers {
                draw_layer(&root, layer, &mut stats)?;
            }

            root.present()
                .map_err(|err| backend_error("failed to finish svg document", err))?;
        }

        self.document = buffer;
        self.last_stats = stats;
        Ok(())
    }
}

fn draw_layer(
    root: &SvgArea<'_>,
    layer: &LayerPrimitives,
    stats: &mut SvgRenderStats,
) -> ChartResult<()> {
    for polygon in &layer.polygons {
        let points: Vec<(i32, i32)> = polygon
            .points
            .iter()
            .map(|vertex| to_coord(vertex.x, vertex.y))
            .collect();
        root.draw(&Polygon::new(
            points,
            to_plotters_color(polygon.fill_color).filled(),
        ))
        .map_err(|err| backend_error("failed to fill polygon", err))?;
        stats.polygons_drawn += 1;
    }

    for rect in &layer.rects {
        let corners = [
            to_coord(rect.x, rect.y),
            to_coord(rect.x + rect.width, rect.y + rect.height),
        ];
        root.draw(&Rectangle::new(
            corners,
            to_plotters_color(rect.fill_color).filled(),
        ))
        .map_err(|err| backend_error("failed to fill rectangle", err))?;
        if rect.border_width > 0.0 {
            root.draw(&Rectangle::new(
                corners,
                to_plotters_color(rect.border_color).stroke_width(to_stroke(rect.border_width)),
            ))
            .map_err(|err| backend_error("failed to stroke rectangle border", err))?;
        }
        stats.rects_drawn += 1;
    }

    for polyline in &layer.polylines {
        let style = to_plotters_color(polyline.color).stroke_width(to_stroke(polyline.stroke_width));
        match polyline.stroke_style {
            LineStrokeStyle::Solid => {
                if polyline.points.len() >= 2 {
                    let points: Vec<(i32, i32)> = polyline
                        .points
                        .iter()
                        .map(|vertex| to_coord(vertex.x, vertex.y))
                        .collect();
                    root.draw(&PathElement::new(points, style))
                        .map_err(|err| backend_error("failed to stroke path", err))?;
                }
            }
            LineStrokeStyle::Dashed { .. } => {
                for (from, to) in polyline.stroke_segments() {
                    root.draw(&PathElement::new(
                        vec![to_coord(from.x, from.y), to_coord(to.x, to.y)],
                        style,
                    ))
                    .map_err(|err| backend_error("failed to stroke dash", err))?;
                }
            }
        }
        stats.polylines_drawn += 1;
    }

    for line in &layer.lines {
        root.draw(&PathElement::new(
            vec![to_coord(line.x1, line.y1), to_coord(line.x2, line.y2)],
            to_plotters_color(line.color).stroke_width(to_stroke(line.stroke_width)),
        ))
        .map_err(|err| backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for circle in &layer.circles {
        root.draw(&Circle::new(
            to_coord(circle.cx, circle.cy),
            circle.radius.round().max(1.0) as u32,
            to_plotters_color(circle.fill_color).filled(),
        ))
        .map_err(|err| backend_error("failed to fill circle", err))?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let h_pos = match text.h_align {
            TextHAlign::Left => HPos::Left,
            TextHAlign::Center => HPos::Center,
            TextHAlign::Right => HPos::Right,
        };
        let text_color = to_plotters_color(text.color);
        let style = TextStyle::from(FontDesc::new(
            FontFamily::SansSerif,
            text.font_size_px,
            FontStyle::Normal,
        ))
        .color(&text_color)
        .pos(Pos::new(h_pos, VPos::Top));
        root.draw(&Text::new(text.text.clone(), to_coord(text.x, text.y), style))
            .map_err(|err| backend_error("failed to draw text", err))?;
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn to_plotters_color(color: Color) -> RGBAColor {
    let (red, green, blue) = color.to_rgb8();
    RGBAColor(red, green, blue, color.alpha)
}

fn to_coord(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn to_stroke(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

fn backend_error(prefix: &str, err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
