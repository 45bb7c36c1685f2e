use gridbc::prelude::*;
use gridbc_test_utils::positional;
use std::path::PathBuf;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gridbc-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_build_and_fill_ghosts_from_file() {
    let path = scratch_file(
        "heat.json",
        r#"{
            "grid": {"axes": [{"size": 3, "periodic": true}, {"size": 4}]},
            "boundaries": ["periodic", {"low": {"value": -1}, "high": "neumann"}]
        }"#,
    );
    let config = BoundaryConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let (grid, bcs) = config.build().unwrap();
    assert_eq!(grid.ghost_shape(), vec![5, 6]);

    let data = positional(&[3, 4]);
    let full = bcs.with_ghost_cells(&data).unwrap();
    assert_eq!(full[[0, 1]], data[[2, 0]]);
    assert_eq!(full[[2, 0]], -1.0);
    assert_eq!(full[[2, 5]], data[[1, 3]]);
}

#[test]
fn canonical_file_reloads_to_same_boundaries() {
    let grid = GridShape::new(vec![
        GridAxis::new(6, false).unwrap().with_spacing(0.1).unwrap(),
    ])
    .unwrap();
    let original = GridBoundaries::from_value(&grid, &serde_json::json!(["extrapolate", {"curvature": 2}]))
        .unwrap();
    let text = BoundaryConfig::from_boundaries(&original)
        .to_json_string()
        .unwrap();
    let path = scratch_file("canonical.json", &text);
    let reloaded = BoundaryConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let (_, rebuilt) = reloaded.build().unwrap();
    assert_eq!(rebuilt, original);
}

#[test]
fn errors_chain_to_their_cause() {
    use std::error::Error;

    let err = BoundaryConfig::from_json_str(
        r#"{"grid": {"axes": [{"size": 4}]}, "boundaries": {"type": "bogus"}}"#,
    )
    .unwrap()
    .build()
    .unwrap_err();
    let cause = err.source().unwrap();
    assert!(cause.to_string().contains("bogus"), "{cause}");
}
