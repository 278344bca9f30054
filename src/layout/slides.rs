use crate::{
    layout::fields::{position_field, rotation_field, zoom_field},
    motion::controller::ControllerState,
};

/// Shaping parameters for the three layout fields plus their output amplitudes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldShapeParams {
    /// Spacing contributed everywhere, dominant toward the edges.
    pub edge_slope: f64,
    /// Width of the dense center region of the position field.
    pub position_roughness: f64,
    /// Extra spacing added inside the center region.
    pub center_area: f64,
    pub rotation_area: f64,
    pub zoom_area: f64,
    /// Depth offset at the center slide.
    pub zoom_amount: f64,
    /// Rotation of far slides, in degrees.
    pub rotation_amount: f64,
}

impl Default for FieldShapeParams {
    fn default() -> Self {
        Self {
            edge_slope: 0.3,
            position_roughness: 0.7,
            center_area: 1.1,
            rotation_area: 0.7,
            zoom_area: 0.7,
            zoom_amount: 0.5,
            rotation_amount: 70.0,
        }
    }
}

/// Unscaled field values at one offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    pub position: f64,
    pub rotation: f64,
    pub zoom: f64,
}

impl FieldSample {
    pub fn at(offset: f64, shape: &FieldShapeParams) -> Self {
        Self {
            position: position_field(
                offset,
                shape.position_roughness,
                shape.edge_slope,
                shape.center_area,
            ),
            rotation: rotation_field(offset, shape.rotation_area),
            zoom: zoom_field(offset, shape.zoom_area),
        }
    }

    pub fn scaled(self, index: usize, shape: &FieldShapeParams) -> SlideTransform {
        SlideTransform {
            index,
            lateral_offset: self.position,
            rotation_angle: self.rotation * shape.rotation_amount,
            depth_offset: self.zoom * shape.zoom_amount,
        }
    }
}

/// Placement of one slide for one frame.
///
/// The renderer translates by `(lateral_offset, 0, depth_offset)` and then
/// rotates by `rotation_angle` degrees about the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideTransform {
    pub index: usize,
    pub lateral_offset: f64,
    /// Degrees.
    pub rotation_angle: f64,
    pub depth_offset: f64,
}

impl SlideTransform {
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_angle.to_radians()
    }
}

/// Transform of slide `index` when the controller sits at `state.position`.
pub fn slide_transform(
    index: usize,
    state: &ControllerState,
    shape: &FieldShapeParams,
) -> SlideTransform {
    FieldSample::at(state.offset_of(index), shape).scaled(index, shape)
}

/// Transforms for slides `0..slide_count`, in index order.
pub fn slide_transforms(
    slide_count: usize,
    state: &ControllerState,
    shape: &FieldShapeParams,
) -> impl Iterator<Item = SlideTransform> + use<> {
    let state = *state;
    let shape = *shape;
    (0..slide_count).map(move |index| slide_transform(index, &state, &shape))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/slides.rs"]
mod tests;
