use std::fs::File;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use fingerpaint::Config;
use fingerpaint::draw::{Path, Stroke, color, heart_path, regular_star_polygon};
use fingerpaint::input::{Brush, PaintState, TouchEvent};
use fingerpaint::util::{Point, RectF, ViewTransform};

#[derive(Parser, Debug)]
#[command(name = "fingerpaint")]
#[command(version, about = "Finger-painting overlay engine demo")]
struct Cli {
    /// Output PNG path for the flattened image
    #[arg(long, short = 'o', value_name = "FILE", default_value = "fingerpaint-demo.png")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 640)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 480)]
    height: i32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let base = cairo::ImageSurface::create(cairo::Format::ARgb32, cli.width, cli.height)
        .context("Failed to create base surface")?;
    {
        let ctx = cairo::Context::new(&base).context("Failed to create cairo context")?;
        ctx.set_source_rgb(0.15, 0.15, 0.18);
        let _ = ctx.paint();
    }

    let mut state = PaintState::from_config(&config);
    state.set_image_geometry(
        cli.width as f64,
        cli.height as f64,
        ViewTransform::identity(),
    );

    let w = cli.width as f64;
    let h = cli.height as f64;

    // A wavy freehand stroke across the top third.
    state.set_stroke_color(color::ORANGE);
    state.handle_touch(TouchEvent::Down {
        x: w * 0.1,
        y: h * 0.25,
    });
    for i in 1..=24 {
        let t = i as f64 / 24.0;
        state.handle_touch(TouchEvent::Move {
            x: w * 0.1 + t * w * 0.8,
            y: h * 0.25 + (t * std::f64::consts::TAU * 2.0).sin() * h * 0.08,
        });
    }
    state.handle_touch(TouchEvent::Up);

    // A dragged square and circle.
    state.set_stroke_color(color::GREEN);
    state.select_brush(Brush::Square);
    state.handle_touch(TouchEvent::Down {
        x: w * 0.1,
        y: h * 0.5,
    });
    state.handle_touch(TouchEvent::Move {
        x: w * 0.35,
        y: h * 0.85,
    });
    state.handle_touch(TouchEvent::Up);

    state.set_stroke_color(color::BLUE);
    state.select_brush(Brush::Circle);
    state.handle_touch(TouchEvent::Down {
        x: w * 0.5,
        y: h * 0.65,
    });
    state.handle_touch(TouchEvent::Move {
        x: w * 0.72,
        y: h * 0.65,
    });
    state.handle_touch(TouchEvent::Up);

    // Shape builders commit directly to the frame.
    let star_side = h * 0.35;
    let star_bounds = RectF::new(w * 0.6, h * 0.45, w * 0.6 + star_side, h * 0.45 + star_side);
    let star = regular_star_polygon(star_bounds, 5, 2, 0.0, false)
        .context("Failed to build star polygon")?;
    let star_path = Path::polyline(&star, true).context("Star polygon produced no vertices")?;
    state
        .frame
        .push(Stroke::new(star_path, state.style_snapshot(Brush::Normal)));
    state.frame.mark_finalized();

    state.set_stroke_color(color::PINK);
    let heart = heart_path(Point::new(w * 0.5, h * 0.3), w * 0.12, h * 0.15);
    state
        .frame
        .push(Stroke::new(heart, state.style_snapshot(Brush::Normal)));
    state.frame.mark_finalized();

    // Erase a bite out of the wavy stroke, then undo it.
    state.select_brush(Brush::Eraser);
    state.handle_touch(TouchEvent::Down {
        x: w * 0.45,
        y: h * 0.2,
    });
    state.handle_touch(TouchEvent::Move {
        x: w * 0.55,
        y: h * 0.3,
    });
    state.handle_touch(TouchEvent::Up);
    state.undo();

    log::info!("session holds {} strokes", state.frame.len());

    let flattened = state.flatten(&base).context("Failed to flatten session")?;
    let mut file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    flattened
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    log::info!("wrote {}", cli.output.display());
    Ok(())
}
