//! Scripted selection editing session
//!
//! Drives a selection editor through a short session of clicks and drags
//! from a fixed camera, logging each step, then prints the resulting
//! selection group as JSON.
//!
//! Usage:
//!     selection_demo [OPTIONS]
//!
//! Options:
//!     --config <PATH>     Editor config JSON (default: built-in defaults)
//!     -h, --help          Show this help message

use std::env;
use std::path::PathBuf;

use voxsel::core::{camera::Camera, input::InputState, logging, EditorConfig, Vec2, Vec3};
use voxsel::render::LineBatch;
use voxsel::selection::{pick_cursor, SelectionControls, SelectionGroupEditor};
use winit::keyboard::{KeyCode, ModifiersState};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn print_help() {
    eprintln!("selection_demo - Scripted selection editing session");
    eprintln!();
    eprintln!("Usage: selection_demo [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    --config <PATH>     Editor config JSON (default: built-in defaults)");
    eprintln!("    -h, --help          Show this help message");
}

fn parse_args() -> Result<Option<PathBuf>, String> {
    let mut config = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(config)
}

/// One scripted input frame
enum Step {
    Move(Vec2),
    Click { add: bool },
    Key(KeyCode),
}

fn main() {
    logging::init();

    let config = match parse_args() {
        Ok(Some(path)) => match EditorConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        Ok(None) => EditorConfig::default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    let camera = Camera::look_at(Vec3::new(0.0, 8.0, 16.0), Vec3::ZERO, Vec3::Y);
    let mut editor = SelectionGroupEditor::new();
    editor.set_editable(config.start_editable);
    let mut controls = SelectionControls::new(config.bindings.clone());
    let mut input = InputState::new();
    let mut batch = LineBatch::new(config.styles.clone());

    let script = [
        Step::Move(Vec2::new(600.0, 340.0)),
        Step::Click { add: false },
        Step::Move(Vec2::new(700.0, 300.0)),
        Step::Click { add: false },
        Step::Move(Vec2::new(400.0, 400.0)),
        Step::Click { add: true },
        Step::Move(Vec2::new(450.0, 380.0)),
        Step::Key(config.bindings.finish),
        Step::Move(Vec2::new(650.0, 330.0)),
        Step::Click { add: false },
        Step::Key(config.bindings.deselect_active),
    ];

    for (frame, step) in script.iter().enumerate() {
        match step {
            Step::Move(cursor) => input.move_cursor(*cursor),
            Step::Click { add } => {
                input.set_modifiers(if *add { ModifiersState::CONTROL } else { ModifiersState::empty() });
                input.press_mouse(config.bindings.toggle);
            }
            Step::Key(key) => input.press_key(*key),
        }

        let ray = camera.screen_ray(input.cursor_position(), VIEWPORT);
        let pick = pick_cursor(&editor, &ray, &config);
        let actions = controls.apply(&mut editor, &input, Some(pick));

        batch.clear();
        editor.render(&mut batch, &camera.view_projection(), Some(camera.position));

        log::info!(
            "frame {}: cursor {} hover {:?} actions {:?} -> {} ({} committed, {} boxes drawn)",
            frame,
            editor.cursor_position(),
            editor.hover_index(),
            actions,
            editor.state().name(),
            editor.len(),
            batch.box_count(),
        );

        input.release_mouse(config.bindings.toggle);
        input.end_frame();
    }

    match editor.selection_group().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize selection: {}", e);
            std::process::exit(1);
        }
    }
}
