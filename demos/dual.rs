//! Triangulates a small point cloud and writes the Delaunay triangles and
//! Voronoi diagram as an SVG document to stdout.
//!
//! Run with: RUST_LOG=debug cargo run --example dual > dual.svg

use dualmesh::bounds::Aabb2;
use dualmesh::{Point2, PointSet, Segment2};

const SIZE: f64 = 600.0;

/// Simple SVG builder
struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn polygon(&mut self, points: &[Point2<f64>], stroke: &str, stroke_width: f64) {
        let pts: String = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            pts, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn segment(&mut self, s: Segment2<f64>, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            s.start.x, s.start.y, s.end.x, s.end.y, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn circle(&mut self, center: Point2<f64>, r: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            center.x, center.y, r, fill
        ));
        self.content.push('\n');
    }

    fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 1 1">
{}</svg>
"#,
            self.content
        )
    }
}

fn main() {
    env_logger::init();

    let mut set: PointSet<f64> = PointSet::default();
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as f64 / u64::MAX as f64) * 0.8 + 0.1
    };
    for _ in 0..24 {
        let p = Point2::from((next(), next()));
        if let Err(err) = set.add(p) {
            eprintln!("skipping point: {err}");
        }
    }

    let triangles = match set.triangulation() {
        Ok(triangulation) => triangulation.triangles().to_vec(),
        Err(err) => {
            eprintln!("triangulation failed: {err}");
            return;
        }
    };
    let voronoi = match set.voronoi() {
        Ok(voronoi) => voronoi,
        Err(err) => {
            eprintln!("voronoi failed: {err}");
            return;
        }
    };

    // Rays are unbounded; draw them well past the point cloud.
    let ray_length = Aabb2::from_points(set.points().iter().copied())
        .map(|b| b.diagonal() * 1.5)
        .unwrap_or(1.0);

    let mut svg = Svg::new();
    let points = set.points();
    for tri in &triangles {
        let corners = tri.vertices().map(|v| points[v]);
        svg.polygon(&corners, "steelblue", 0.002);
    }

    let finite_length: f64 = voronoi.segments().map(|s| s.length()).sum();
    for segment in voronoi.segments() {
        svg.segment(segment, "darkorange", 0.002);
    }
    for ray in &voronoi.rays {
        svg.segment(ray.to_segment(ray_length), "darkorange", 0.002);
    }

    for &p in points {
        svg.circle(p, 0.006, "black");
    }

    eprintln!(
        "{} points, {} triangles, {} finite Voronoi edges (total length {:.3}), {} rays",
        points.len(),
        triangles.len(),
        voronoi.finite_edges.len(),
        finite_length,
        voronoi.rays.len()
    );
    print!("{}", svg.finish());
}
