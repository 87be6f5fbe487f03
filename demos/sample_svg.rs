//! Samples the configured spline in both knot modes and writes an SVG preview.
//!
//! Run with: cargo run --example sample_svg -- [config.toml] [out.svg]

use knotwork::{EditorConfig, Point2, SplineEditor};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 500.0;

fn polyline(points: &[Point2<f64>], stroke: &str) -> String {
    let coords: Vec<String> = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, HEIGHT - p.y))
        .collect();
    format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        coords.join(" "),
        stroke
    )
}

fn handles(points: &[Point2<f64>], half: f64) -> String {
    points
        .iter()
        .map(|p| {
            format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="green"/>"#,
                p.x - half,
                HEIGHT - p.y - half,
                half * 2.0,
                half * 2.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EditorConfig::load_or_default(Path::new(&path)),
        None => EditorConfig::default(),
    };
    let out = args.next().unwrap_or_else(|| "spline.svg".to_string());

    let mut editor: SplineEditor<f64> = match SplineEditor::from_config(&config) {
        Ok(editor) => editor,
        Err(e) => {
            log::error!("{}", e);
            return Ok(());
        }
    };

    let mut body = vec![
        format!(r#"<rect width="{}" height="{}" fill="black"/>"#, WIDTH, HEIGHT),
        polyline(editor.control_points(), "red"),
        handles(editor.control_points(), editor.handle_size()),
    ];

    for stroke in ["cyan", "yellow"] {
        println!("{} ({}): knots {}", editor.mode(), editor.degree(), editor.knot_vector());
        match editor.try_sampled_curve() {
            Ok(curve) => body.push(polyline(&curve, stroke)),
            Err(e) => println!("{}", e),
        }
        editor.toggle_uniform();
    }

    let mut file = File::create(&out)?;
    writeln!(
        file,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        WIDTH, HEIGHT
    )?;
    writeln!(file, "{}", body.join("\n"))?;
    writeln!(file, "</svg>")?;

    println!("Wrote {}", out);
    Ok(())
}
