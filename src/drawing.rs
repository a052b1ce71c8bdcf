use glam::Vec2;
use serde::Serialize;

/// A straight stroke from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Axis-aligned extent of every position the turtle visited.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn at(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn include(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Consumer of segments, called in emission order while a run is in progress.
///
/// The interpreter makes no assumption about what the sink does with them: paint,
/// buffer, count or discard.
pub trait DrawingSink {
    fn segment(&mut self, segment: Segment);
}

impl DrawingSink for Vec<Segment> {
    fn segment(&mut self, segment: Segment) {
        self.push(segment);
    }
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn segment(&mut self, segment: Segment) {
        (**self).segment(segment);
    }
}

/// A sink that discards everything, for runs where only the summary matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DrawingSink for NullSink {
    fn segment(&mut self, _segment: Segment) {}
}

/// The buffered result of one interpretation run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Drawing {
    /// Segments in the order they were drawn.
    pub segments: Vec<Segment>,

    /// Extent of the drawn segments. `None` until the first segment arrives.
    pub bounds: Option<Bounds>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total stroke length.
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Serialises the drawing as a standalone SVG document.
    ///
    /// The y axis is flipped so that positive headings turn counter-clockwise on screen,
    /// and `margin` user units are added on every side.
    pub fn to_svg(&self, margin: f32) -> String {
        let bounds = self.bounds.unwrap_or(Bounds::at(Vec2::ZERO));
        let size = bounds.size() + Vec2::splat(2.0 * margin);
        let (min_x, min_y) = (bounds.min.x - margin, -bounds.max.y - margin);

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} {min_y} {} {}">"#,
            size.x, size.y
        );
        svg.push('\n');
        svg.push_str(
            r#"<g stroke="black" stroke-width="1" stroke-linecap="round" fill="none">"#,
        );
        svg.push('\n');
        for seg in &self.segments {
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                seg.start.x, -seg.start.y, seg.end.x, -seg.end.y
            ));
            svg.push('\n');
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

impl DrawingSink for Drawing {
    fn segment(&mut self, segment: Segment) {
        match self.bounds.as_mut() {
            Some(b) => {
                b.include(segment.start);
                b.include(segment.end);
            }
            None => {
                let mut b = Bounds::at(segment.start);
                b.include(segment.end);
                self.bounds = Some(b);
            }
        }
        self.segments.push(segment);
    }
}
