// tests/pipeline.rs

use std::fs;
use std::path::{Path, PathBuf};

use spectral_history::data::model::HeaderMode;
use spectral_history::{RunConfig, run};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "spectral-history-pipeline-{tag}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("data")).unwrap();
    dir
}

fn config_for(dir: &Path) -> RunConfig {
    RunConfig {
        data_dir: dir.join("data"),
        plot_path: dir.join("convergencePlot.png"),
        summary_path: dir.join("TableData.dat"),
        ..RunConfig::default()
    }
}

/// Title line, header line, then `values` as (iteration, value) rows.
fn write_monitor(dir: &Path, name: &str, y_label: &str, values: &[f64]) {
    let mut text = format!("\"Convergence history of {name}\"\n\"Iteration\" \"{y_label}\"\n");
    for (i, v) in values.iter().enumerate() {
        text.push_str(&format!("{} {v}\n", i + 1));
    }
    fs::write(dir.join("data").join(name), text).unwrap();
}

#[test]
fn three_files_produce_sorted_table_and_image() {
    let dir = scratch_dir("three");
    write_monitor(&dir, "point10.out", "Static Temperature (K)", &[300.0, 350.0, 373.146]);
    write_monitor(&dir, "point2.out", "Static Temperature (K)", &[300.0, 320.0, 323.15]);
    write_monitor(&dir, "point1.out", "Static Temperature (K)", &[290.0, 295.0, 298.15]);
    fs::write(dir.join("data").join("readme.txt"), "not a monitor").unwrap();

    let cfg = config_for(&dir);
    let report = run(&cfg).unwrap();

    assert_eq!(report.files, 3);
    assert_eq!(report.header.mode, HeaderMode::CelsiusConversion);
    assert_eq!(report.header.y_label, "Static Temperature (K) (°C)");

    let table = fs::read_to_string(&cfg.summary_path).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines, vec!["point1\t\t25.0", "point2\t\t50.0", "point10\t\t100.0"]);

    assert!(cfg.plot_path.exists());
    let img = image::open(&cfg.plot_path).unwrap();
    assert!(img.width() > 0 && img.height() > 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unrecognized_header_keeps_values() {
    let dir = scratch_dir("unknown");
    let rows = "first row\nsecond row\n0 1.234\n1 5.678\n";
    fs::write(dir.join("data").join("a.out"), rows).unwrap();

    let cfg = config_for(&dir);
    let report = run(&cfg).unwrap();

    assert_eq!(report.header.mode, HeaderMode::Unrecognized);
    assert_eq!(report.header.x_label, "Unknown");
    let table = fs::read_to_string(&cfg.summary_path).unwrap();
    assert_eq!(table, "a\t\t5.68\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn bad_file_aborts_without_artifacts() {
    let dir = scratch_dir("bad");
    write_monitor(&dir, "run1.out", "Pressure", &[1.0, 2.0]);
    fs::write(
        dir.join("data").join("run2.out"),
        "\"title\" line\n\"Iteration\" \"Pressure\"\n1 oops\n",
    )
    .unwrap();

    let cfg = config_for(&dir);
    let err = run(&cfg).unwrap_err();

    assert!(format!("{err:#}").contains("oops"));
    assert!(!cfg.summary_path.exists());
    assert!(!cfg.plot_path.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_data_directory_fails() {
    let dir = scratch_dir("missing");
    let mut cfg = config_for(&dir);
    cfg.data_dir = dir.join("nope");
    assert!(run(&cfg).is_err());
    fs::remove_dir_all(&dir).unwrap();
}
