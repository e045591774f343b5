use std::{fs, io::Cursor, path::PathBuf};

use lattice::Vec3;
use meshform::{obj::parser, Config, Session};
use mf_format::Model;

const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";

fn triangle() -> Model {
    parser::parse_str(TRIANGLE, &Default::default()).unwrap()
}

fn run(script: &str) -> (Model, String) {
    run_with(script, None)
}

fn run_with(script: &str, default_output: Option<PathBuf>) -> (Model, String) {
    let mut output = Vec::new();
    let model = Session::new(Cursor::new(script), &mut output, triangle(), Config::default())
        .with_default_output(default_output)
        .run()
        .unwrap();

    (model, String::from_utf8(output).unwrap())
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("meshform-{}-{}", std::process::id(), name))
}

#[test]
fn session_scale_then_translate() {
    // scale by 2, translate by (1, 2, 3), apply, quit
    let (model, output) = run("2\n2\n2\n2\n1\n1\n2\n3\n6\n9\n");

    // the translation happens in the scaled frame
    assert_eq!(model.vertices[0], Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(model.vertices[1], Vec3::new(4.0, 4.0, 6.0));
    assert_eq!(model.vertices[2], Vec3::new(2.0, 6.0, 6.0));
    assert!(output.contains("Scaling added"));
    assert!(output.contains("Translation added"));
    assert!(output.contains("Transform applied to model"));
    assert!(output.ends_with("Bye\n"));
}

#[test]
fn session_without_apply_keeps_model() {
    let (model, _) = run("1\n5\n5\n5\n9\n");

    assert_eq!(model, triangle());
}

#[test]
fn session_reset_discards_transform() {
    let (model, output) = run("1\n5\n5\n5\n7\n6\n9\n");

    assert_eq!(model.vertices, triangle().vertices);
    assert!(output.contains("Transform reset"));
}

#[test]
fn session_rotation_leaves_normals() {
    let (model, _) = run("5\n90\n6\n9\n");

    let cmp = |is: Vec3, should: Vec3| assert!((is - should).length() < 1e-5, "{:?} != {:?}", is, should);
    cmp(model.vertices[1], Vec3::new(0.0, 1.0, 0.0));
    cmp(model.vertices[2], Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(model.normals, triangle().normals);
}

#[test]
fn session_recovers_from_bad_input() {
    // bad choice, bad number, then a valid translation
    let (model, output) = run("42\n1\nabc\n1\n1\n0\n0\n6\n9\n");

    assert!(output.contains("Error: Invalid choice: \"42\""));
    assert!(output.contains("Error: Not a finite number: \"abc\""));
    assert_eq!(model.vertices[0], Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn session_rejects_non_finite_numbers() {
    let (model, output) = run("2\ninf\n9\n");

    assert!(output.contains("Not a finite number: \"inf\""));
    assert_eq!(model, triangle());
}

#[test]
fn session_ends_cleanly_on_eof() {
    let (model, output) = run("1\n2\n");

    assert_eq!(model, triangle());
    assert!(output.contains("Y offset: "));
}

#[test]
fn session_show() {
    let (_, output) = run("1\n1\n2\n3\n10\n9\n");

    assert!(output.contains("Transform:\n"));
    assert!(output.contains("Model: 3 vertices, 0 texture vertices, 1 normals, 1 polygons"));
}

#[test]
fn session_save_needs_path() {
    let (_, output) = run("8\n\n9\n");

    assert!(output.contains("Error: No output file given"));
}

#[test]
fn session_save_rejects_unknown_format() {
    let (_, output) = run("8\nmodel.stl\n9\n");

    assert!(output.contains("Error: Could not save model: Unsupported output format"));
}

#[test]
fn session_save_default_output() {
    let path = temp_path("session-default.obj");

    let (_, output) = run_with("3\n90\n6\n8\n\n9\n", Some(path.clone()));
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output.contains(&format!("Model saved to {}", path.display())));
    let reloaded = parser::parse_str(&written, &Default::default()).unwrap();
    assert_eq!(reloaded.vertex_count(), 3);
    assert_eq!(reloaded.polygons, triangle().polygons);
    assert!((reloaded.vertices[2] - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
}

#[test]
fn session_save_binary() {
    let path = temp_path("session-binary.mfm");
    let script = format!("2\n3\n3\n3\n6\n8\n{}\n9\n", path.display());

    let (model, _) = run(&script);
    let reloaded = Model::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(reloaded, model);
    assert_eq!(reloaded.vertices[1], Vec3::new(3.0, 0.0, 0.0));
}
