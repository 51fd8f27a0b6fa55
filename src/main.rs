//! picker-demo: a config form showing the image and color pickers
//!
//! F1 adds or removes the example options, Ctrl+S saves them to the config
//! file and Ctrl+R resets them to their defaults.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;

use picker_kit::demo::{parse_style_flags, DemoConfig, DemoForm, Example};
use picker_kit::host::TextLayoutFactory;
use picker_kit::ui::{
    demo_actions, draw_tooltip, theme, ActionContext, ActionRegistry, KeyInput, MacroquadSurface, MouseState,
    Rect, Surface, TextLayout, UiContext, WrappingTextLayout, ACTION_RESET, ACTION_SAVE, ACTION_TOGGLE_EXAMPLE,
};
use picker_kit::VERSION;

#[derive(Parser, Debug)]
#[command(name = "picker-demo", version, about = "Image and color picker demo")]
struct Args {
    /// Config file to load and save (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with the example options disabled
    #[arg(long)]
    no_example: bool,

    /// Style flags for the last color option, decimal or 0x-prefixed hex
    #[arg(long)]
    style: Option<String>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("picker-demo v{}", VERSION),
        window_width: 900,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn text_layouts() -> TextLayoutFactory<'static> {
    Box::new(|| -> Box<dyn TextLayout> { Box::new(WrappingTextLayout::macroquad(theme::FONT_SIZE_CONTENT)) })
}

fn sample_mouse() -> MouseState {
    let (x, y) = mouse_position();
    MouseState {
        x,
        y,
        left_down: is_mouse_button_down(MouseButton::Left),
        left_pressed: is_mouse_button_pressed(MouseButton::Left),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let style_override = args
        .style
        .as_deref()
        .map(parse_style_flags)
        .transpose()
        .context("invalid --style")?;

    let config_path = args.config.or_else(DemoConfig::default_path);
    let config = match &config_path {
        Some(path) => DemoConfig::load(path).unwrap_or_else(|e| {
            log::warn!("ignoring config at {}: {}", path.display(), e);
            DemoConfig::default()
        }),
        None => {
            log::warn!("no config directory, changes will not be saved");
            DemoConfig::default()
        }
    };

    // Load icon font (Lucide)
    let icon_font = match load_ttf_font("assets/runtime/fonts/lucide.ttf").await {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("failed to load Lucide font: {}, using text icons", e);
            None
        }
    };

    let mut registry = ActionRegistry::new();
    for action in demo_actions() {
        registry.register(action);
    }

    let example = Example::new(config, config_path).with_style_override(style_override);
    let mut form = DemoForm::new();
    let mut example_enabled = !args.no_example;
    if example_enabled {
        example.add_to_form(&mut form, text_layouts());
    }
    form.open();

    let mut ctx = UiContext::new();
    loop {
        clear_background(theme::BG_COLOR);
        ctx.begin_frame(sample_mouse());

        let actions = ActionContext { example_enabled };
        for id in registry.process_triggers(&actions, &KeyInput::sample()) {
            match id {
                ACTION_TOGGLE_EXAMPLE => {
                    if example_enabled {
                        example.remove_from_form(&mut form);
                        log::info!("example menu disabled");
                    } else {
                        example.add_to_form(&mut form, text_layouts());
                        log::info!("example menu enabled");
                    }
                    example_enabled = !example_enabled;
                }
                ACTION_SAVE => {
                    form.save();
                    log::info!("saved");
                }
                ACTION_RESET => {
                    form.reset();
                    log::info!("reset to defaults");
                }
                _ => {}
            }
        }

        let mut surface = MacroquadSurface::new(icon_font.as_ref());
        let hints = registry.hints(&ActionContext { example_enabled }).join("    ");
        surface.text(&hints, 20.0, 16.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);

        if form.is_empty() {
            surface.text(
                "Example options disabled",
                20.0,
                60.0,
                theme::FONT_SIZE_HEADER,
                theme::TEXT_COLOR,
            );
        } else {
            form.draw(&mut ctx, &mut surface, Vec2::new(20.0, 60.0));
        }

        if let Some(tooltip) = &ctx.tooltip {
            let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
            draw_tooltip(&mut surface, tooltip, screen, |t| {
                measure_text(t, None, theme::FONT_SIZE_SMALL as u16, 1.0).width
            });
        }

        next_frame().await;
    }
}
