/*
 * Dots and Lines
 *
 * Dots drift across the window and bounce off its edges. Any two dots closer
 * than a fraction of the window diagonal are joined by a line that thickens
 * as they approach each other. Dragging on the canvas adds a pointer dot
 * that pulls the others towards it.
 *
 * The control panel adjusts connectivity, line thickness, dot size, speed
 * and density in real time. Parameters are restored from and saved to
 * dots_and_lines.toml (or $DOTS_AND_LINES_CONFIG). Set RUST_LOG to change
 * the log level.
 */

use dots_and_lines::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
