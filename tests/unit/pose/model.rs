use super::*;

fn kp(kind: KeypointKind, x: f64, y: f64, score: f64) -> Keypoint {
    Keypoint {
        kind,
        position: Point::new(x, y),
        score,
    }
}

#[test]
fn all_kinds_are_complete_and_unique() {
    assert_eq!(KeypointKind::ALL.len(), 17);
    for (i, a) in KeypointKind::ALL.iter().enumerate() {
        for b in &KeypointKind::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn kind_names_match_serde_form() {
    for kind in KeypointKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
    }
}

#[test]
fn skeleton_edges_connect_distinct_parts() {
    for (a, b) in SKELETON_EDGES {
        assert_ne!(a, b);
    }
}

#[test]
fn visible_keypoints_filters_by_score() {
    let pose = Pose {
        keypoints: vec![
            kp(KeypointKind::Nose, 1.0, 1.0, 0.9),
            kp(KeypointKind::LeftWrist, 2.0, 2.0, 0.2),
        ],
        score: 0.8,
    };
    let visible: Vec<_> = pose.visible_keypoints(0.5).collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].kind, KeypointKind::Nose);
}

#[test]
fn bounding_box_spans_all_keypoints() {
    let pose = Pose {
        keypoints: vec![
            kp(KeypointKind::Nose, 10.0, 40.0, 0.9),
            kp(KeypointKind::LeftWrist, 30.0, 5.0, 0.9),
            kp(KeypointKind::RightWrist, 20.0, 25.0, 0.9),
        ],
        score: 0.8,
    };
    let b = pose.bounding_box().unwrap();
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (10.0, 5.0, 30.0, 40.0));
}

#[test]
fn empty_pose_has_no_bounding_box() {
    let pose = Pose {
        keypoints: vec![],
        score: 0.0,
    };
    assert!(pose.bounding_box().is_none());
}

#[test]
fn keypoint_lookup_by_kind() {
    let pose = Pose {
        keypoints: vec![kp(KeypointKind::LeftHip, 3.0, 4.0, 0.7)],
        score: 0.7,
    };
    assert!(pose.keypoint(KeypointKind::LeftHip).is_some());
    assert!(pose.keypoint(KeypointKind::Nose).is_none());
}
