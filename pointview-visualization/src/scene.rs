//! CPU-side scene geometry for the scatter renderer

use crate::colormap::{viridis, ColorScale};
use bytemuck::{Pod, Zeroable};
use pointview_core::{Bounds, PointSet};

/// Grid cells per side of the reference grid
const GRID_DIVISIONS: usize = 10;
/// Fractional margin the grid and axes extend past the data
const MARGIN: f32 = 0.05;
/// Fallback half-extent for axes with no spread
const FLAT_HALF_EXTENT: f32 = 1.0;

const GRID_COLOR: [f32; 3] = [0.30, 0.30, 0.34];
const X_AXIS_COLOR: [f32; 3] = [0.85, 0.25, 0.25];
const Y_AXIS_COLOR: [f32; 3] = [0.25, 0.75, 0.30];
const Z_AXIS_COLOR: [f32; 3] = [0.30, 0.45, 0.95];

/// Segments in the legend gradient
const LEGEND_STEPS: usize = 32;
const LEGEND_X: (f32, f32) = (0.90, 0.95);
const LEGEND_Y: (f32, f32) = (-0.55, 0.55);

/// Vertex of a point marker quad.
///
/// `corner` spans [-1, 1]^2 across the marker; the shader billboards the
/// quad in clip space and rounds the marker off.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct MarkerVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub corner: [f32; 2],
}

impl MarkerVertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MarkerVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Vertex of a grid or axis line
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Screen-space vertex of the color legend, positions in NDC
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl OverlayVertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Expand each point into a 6-vertex marker quad colored by its z value
pub fn marker_vertices(points: &PointSet, scale: &ColorScale) -> Vec<MarkerVertex> {
    const CORNERS: [[f32; 2]; 6] = [
        [-1.0, -1.0],
        [1.0, -1.0],
        [1.0, 1.0],
        [-1.0, -1.0],
        [1.0, 1.0],
        [-1.0, 1.0],
    ];

    let mut vertices = Vec::with_capacity(points.len() * CORNERS.len());
    for point in points.iter() {
        let position = [point.x, point.y, point.z];
        let color = scale.color(point.z);
        for corner in CORNERS {
            vertices.push(MarkerVertex {
                position,
                color,
                corner,
            });
        }
    }
    vertices
}

/// Extents of the reference frame around the data. Axes with no spread fall
/// back to a fixed half-extent so a single point still gets a visible frame.
fn frame_extents(bounds: &Bounds) -> ([f32; 3], [f32; 3]) {
    let center = bounds.center();
    let size = bounds.size();
    let mut lo = [0.0f32; 3];
    let mut hi = [0.0f32; 3];
    for axis in 0..3 {
        let half = if size[axis] > 0.0 {
            size[axis] * (0.5 + MARGIN)
        } else {
            FLAT_HALF_EXTENT
        };
        lo[axis] = center[axis] - half;
        hi[axis] = center[axis] + half;
    }
    (lo, hi)
}

/// Reference grid on the lower z plane plus colored axis edge lines.
///
/// Axis identity is carried by the conventional colors: x red, y green,
/// z blue.
pub fn reference_lines(bounds: &Bounds) -> Vec<LineVertex> {
    let (lo, hi) = frame_extents(bounds);
    let z0 = lo[2];

    let mut vertices = Vec::new();
    for i in 0..=GRID_DIVISIONS {
        let t = i as f32 / GRID_DIVISIONS as f32;
        let x = lo[0] + (hi[0] - lo[0]) * t;
        let y = lo[1] + (hi[1] - lo[1]) * t;
        // one line along y at fixed x, one along x at fixed y
        vertices.push(LineVertex {
            position: [x, lo[1], z0],
            color: GRID_COLOR,
        });
        vertices.push(LineVertex {
            position: [x, hi[1], z0],
            color: GRID_COLOR,
        });
        vertices.push(LineVertex {
            position: [lo[0], y, z0],
            color: GRID_COLOR,
        });
        vertices.push(LineVertex {
            position: [hi[0], y, z0],
            color: GRID_COLOR,
        });
    }

    let origin = [lo[0], lo[1], z0];
    let axes = [
        ([hi[0], lo[1], z0], X_AXIS_COLOR),
        ([lo[0], hi[1], z0], Y_AXIS_COLOR),
        ([lo[0], lo[1], hi[2]], Z_AXIS_COLOR),
    ];
    for (end, color) in axes {
        vertices.push(LineVertex {
            position: origin,
            color,
        });
        vertices.push(LineVertex {
            position: end,
            color,
        });
    }

    vertices
}

/// Vertical viridis gradient strip along the right window edge; bottom maps
/// to the scale minimum, top to the maximum.
pub fn legend_vertices() -> Vec<OverlayVertex> {
    let (x0, x1) = LEGEND_X;
    let (y0, y1) = LEGEND_Y;

    let mut vertices = Vec::with_capacity(LEGEND_STEPS * 6);
    for i in 0..LEGEND_STEPS {
        let t_lo = i as f32 / LEGEND_STEPS as f32;
        let t_hi = (i + 1) as f32 / LEGEND_STEPS as f32;
        let ya = y0 + (y1 - y0) * t_lo;
        let yb = y0 + (y1 - y0) * t_hi;
        let ca = viridis(t_lo);
        let cb = viridis(t_hi);

        let quad = [
            ([x0, ya], ca),
            ([x1, ya], ca),
            ([x1, yb], cb),
            ([x0, ya], ca),
            ([x1, yb], cb),
            ([x0, yb], cb),
        ];
        for (position, color) in quad {
            vertices.push(OverlayVertex { position, color });
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointview_core::Point3f;

    fn example_points() -> PointSet {
        PointSet::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 2.0),
            Point3f::new(-1.0, 0.5, 1.5),
        ])
    }

    #[test]
    fn six_vertices_per_marker_in_row_order() {
        let points = example_points();
        let scale = ColorScale::from_values(points.iter().map(|p| p.z)).unwrap();
        let vertices = marker_vertices(&points, &scale);

        assert_eq!(vertices.len(), 3 * 6);
        assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(vertices[6].position, [1.0, 1.0, 2.0]);
        assert_eq!(vertices[12].position, [-1.0, 0.5, 1.5]);
    }

    #[test]
    fn marker_colors_follow_z() {
        let points = example_points();
        let scale = ColorScale::from_values(points.iter().map(|p| p.z)).unwrap();
        let vertices = marker_vertices(&points, &scale);

        assert_eq!(vertices[0].color, viridis(0.0)); // z = 0.0 is the minimum
        assert_eq!(vertices[6].color, viridis(1.0)); // z = 2.0 is the maximum
        assert_eq!(vertices[12].color, viridis(0.75)); // z = 1.5
    }

    #[test]
    fn singleton_marker_gets_midpoint_color() {
        let points = PointSet::from_points(vec![Point3f::new(0.5, -0.5, 2.5)]);
        let scale = ColorScale::from_values(points.iter().map(|p| p.z)).unwrap();
        let vertices = marker_vertices(&points, &scale);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].color, viridis(0.5));
    }

    #[test]
    fn reference_lines_cover_grid_and_axes() {
        let bounds = example_points().bounds().unwrap();
        let vertices = reference_lines(&bounds);
        // (GRID_DIVISIONS + 1) line pairs in each direction, plus 3 axes
        assert_eq!(vertices.len(), (GRID_DIVISIONS + 1) * 4 + 6);

        let axis_colors: Vec<[f32; 3]> = vertices[vertices.len() - 6..]
            .iter()
            .map(|v| v.color)
            .collect();
        assert_eq!(axis_colors[0], X_AXIS_COLOR);
        assert_eq!(axis_colors[2], Y_AXIS_COLOR);
        assert_eq!(axis_colors[4], Z_AXIS_COLOR);
    }

    #[test]
    fn degenerate_bounds_still_produce_finite_frame() {
        let bounds = Bounds {
            min: Point3f::new(2.0, -3.0, 4.0),
            max: Point3f::new(2.0, -3.0, 4.0),
        };
        let vertices = reference_lines(&bounds);
        assert!(vertices
            .iter()
            .all(|v| v.position.iter().all(|c| c.is_finite())));

        // the fallback frame is centered on the point
        let (lo, hi) = frame_extents(&bounds);
        assert_eq!(lo[0], 2.0 - FLAT_HALF_EXTENT);
        assert_eq!(hi[2], 4.0 + FLAT_HALF_EXTENT);
    }

    #[test]
    fn legend_runs_bottom_to_top() {
        let vertices = legend_vertices();
        assert_eq!(vertices.len(), LEGEND_STEPS * 6);
        assert_eq!(vertices[0].color, viridis(0.0));
        assert_eq!(vertices.last().unwrap().color, viridis(1.0));
        assert!(vertices[0].position[1] < vertices.last().unwrap().position[1]);
    }
}
