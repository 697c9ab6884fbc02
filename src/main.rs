// src/main.rs
use log::{error, info, trace, warn};
use nannou::prelude::*;

use threelines::{config::Config, controllers::Controller};

struct Model {
    controller: Controller,
    background: Rgb,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to the built-in constants
    let config = Config::load().unwrap_or_else(|err| {
        warn!("Using built-in config: {}", err);
        Config::default()
    });

    let controller = Controller::new(&config).expect("Failed to create Controller");
    let background = controller.palette().background();

    // Create window
    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    info!(
        "Window {}x{} ready, tap to advance",
        config.window.width, config.window.height
    );

    Model {
        controller,
        background,
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.controller.handle_tap();
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.controller.handle_tap();
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        model.controller.handle_tap();
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    let report = model.controller.advance(update.since_last);
    if report.redraw {
        trace!(
            "{} ticks this frame (step completed: {})",
            report.ticks,
            report.step_completed
        );
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    model.controller.render(&draw, app.window_rect());

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", err);
    }
}
