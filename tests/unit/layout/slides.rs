use super::*;

#[test]
fn centered_slide_faces_camera_at_full_zoom() {
    let shape = FieldShapeParams::default();
    let state = ControllerState::new(3.0, 0.0);
    let t = slide_transform(3, &state, &shape);
    assert_eq!(t.index, 3);
    assert_eq!(t.lateral_offset, 0.0);
    assert_eq!(t.rotation_angle, 0.0);
    assert_eq!(t.depth_offset, shape.zoom_amount);
}

#[test]
fn neighbours_mirror_around_center() {
    let shape = FieldShapeParams::default();
    let state = ControllerState::new(5.0, 0.0);
    let left = slide_transform(4, &state, &shape);
    let right = slide_transform(6, &state, &shape);
    assert!((left.lateral_offset + right.lateral_offset).abs() < 1e-12);
    assert!((left.rotation_angle + right.rotation_angle).abs() < 1e-12);
    assert_eq!(left.depth_offset, right.depth_offset);
    assert!(right.lateral_offset > 0.0);
    assert!(right.rotation_angle < 0.0);
}

#[test]
fn far_slides_rotate_by_full_amount() {
    let shape = FieldShapeParams::default();
    let state = ControllerState::default();
    let far = slide_transform(14, &state, &shape);
    assert!((far.rotation_angle + shape.rotation_amount).abs() < 1e-9);
    assert!(far.depth_offset < 1e-9);
    assert!((far.rotation_radians() + shape.rotation_amount.to_radians()).abs() < 1e-9);
}

#[test]
fn transforms_cover_every_slide_in_order() {
    let shape = FieldShapeParams::default();
    let state = ControllerState::new(7.4, 1.0);
    let all: Vec<_> = slide_transforms(15, &state, &shape).collect();
    assert_eq!(all.len(), 15);
    for (i, t) in all.iter().enumerate() {
        assert_eq!(t.index, i);
    }
    for pair in all.windows(2) {
        assert!(pair[1].lateral_offset > pair[0].lateral_offset);
    }
}

#[test]
fn sample_scaling_is_plain_multiplication() {
    let shape = FieldShapeParams {
        rotation_amount: 10.0,
        zoom_amount: 2.0,
        ..FieldShapeParams::default()
    };
    let sample = FieldSample::at(0.4, &shape);
    let t = sample.scaled(1, &shape);
    assert_eq!(t.lateral_offset, sample.position);
    assert_eq!(t.rotation_angle, sample.rotation * 10.0);
    assert_eq!(t.depth_offset, sample.zoom * 2.0);
}
