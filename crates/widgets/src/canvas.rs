//! iced canvas programs that draw the geometry computed by `dial-render`.

use dial_core::Paint;
use dial_render::{ArcAngles, PathCommand};
use dial_theme::Color;
use iced::widget::canvas::{self, path::Arc, Frame, Path, Stroke};
use iced::{mouse, Point, Radians, Rectangle, Renderer, Size, Theme};
use std::f64::consts::FRAC_PI_2;

/// Sweeps below this are not worth a path.
const MIN_SWEEP: f64 = 1e-4;

/// Gap between the gauge's threshold ring and its value ring.
const BAND_GAP: f32 = 5.0;

/// An arc segment with its fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub angles: ArcAngles,
    pub color:  Color,
}

/// Dial angles run clockwise from 12 o'clock; iced measures from 3 o'clock.
pub fn to_screen_angle(dial: f64) -> Radians {
    Radians((dial - FRAC_PI_2) as f32)
}

/// Ring sizes derived from the widget bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    /// Outer radius of the value ring.
    pub outer:          f32,
    pub thickness:      f32,
    /// Outer radius of the threshold band ring (gauges only).
    pub band_outer:     f32,
    pub band_thickness: f32,
}

impl RingLayout {
    /// Value ring thickness is a ninth of the smaller side; a threshold ring,
    /// when shown, takes a third of that on the outside.
    pub fn new(size: Size, with_bands: bool) -> Self {
        let diameter = size.width.min(size.height).max(0.0);
        let radius = diameter / 2.0;
        let thickness = (diameter / 9.0).round();
        let band_thickness = if with_bands { thickness / 3.0 } else { 0.0 };
        let outer = if with_bands {
            (radius - band_thickness - BAND_GAP).max(0.0)
        } else {
            radius
        };

        Self {
            outer,
            thickness: thickness.min(outer),
            band_outer: radius,
            band_thickness,
        }
    }
}

fn ring_arc(frame: &mut Frame, center: Point, outer: f32, thickness: f32, segment: &Segment) {
    if segment.angles.sweep().abs() < MIN_SWEEP || !segment.color.is_set() || thickness <= 0.0 {
        return;
    }
    let path = Path::new(|b| {
        b.arc(Arc {
            center,
            radius: outer - thickness / 2.0,
            start_angle: to_screen_angle(segment.angles.start),
            end_angle: to_screen_angle(segment.angles.end),
        });
    });
    frame.stroke(
        &path,
        Stroke::default()
            .with_width(thickness)
            .with_color(segment.color.to_iced()),
    );
}

/// Donut / gauge drawing: optional threshold ring, track, then value arcs.
#[derive(Debug, Clone)]
pub struct DialCanvas {
    pub range:  (f64, f64),
    pub track:  Color,
    pub arcs:   Vec<Segment>,
    pub bands:  Option<Vec<Segment>>,
}

impl<Message> canvas::Program<Message> for DialCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let layout = RingLayout::new(bounds.size(), self.bands.is_some());

        if let Some(bands) = &self.bands {
            for band in bands {
                ring_arc(&mut frame, center, layout.band_outer, layout.band_thickness, band);
            }
        }

        let track = Segment {
            angles: ArcAngles::new(self.range.0, self.range.1),
            color:  self.track,
        };
        ring_arc(&mut frame, center, layout.outer, layout.thickness, &track);

        for arc in &self.arcs {
            ring_arc(&mut frame, center, layout.outer, layout.thickness, arc);
        }

        vec![frame.into_geometry()]
    }
}

/// Horizontal bar filling `fraction` of the width.
#[derive(Debug, Clone)]
pub struct BarCanvas {
    pub fraction: f64,
    pub fill:     Color,
    pub back:     Color,
}

impl<Message> canvas::Program<Message> for BarCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, size, self.back.to_iced());

        let width = (size.width as f64 * self.fraction.clamp(0.0, 1.0)) as f32;
        if width > 0.0 && self.fill.is_set() {
            frame.fill_rectangle(Point::ORIGIN, Size::new(width, size.height), self.fill.to_iced());
        }

        vec![frame.into_geometry()]
    }
}

/// A stroked path built from [`PathCommand`]s.  The commands are produced
/// lazily from the bounds so the plot always fills the canvas.
pub struct LineCanvas<F> {
    pub plot:  F,
    pub color: Color,
    pub width: f32,
}

impl<Message, F> canvas::Program<Message> for LineCanvas<F>
where
    F: Fn(Size) -> Vec<PathCommand>,
{
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let commands = (self.plot)(bounds.size());

        if commands.len() > 1 {
            let point = |p: dial_render::Point| Point::new(p.x as f32, p.y as f32);
            let path = Path::new(|b| {
                for command in &commands {
                    match *command {
                        PathCommand::MoveTo(p) => b.move_to(point(p)),
                        PathCommand::LineTo(p) => b.line_to(point(p)),
                        PathCommand::CubicTo { c1, c2, to } => {
                            b.bezier_curve_to(point(c1), point(c2), point(to));
                        }
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(self.width)
                    .with_color(self.color.to_iced()),
            );
        }

        vec![frame.into_geometry()]
    }
}
