mod scenes;

use log::LevelFilter;
use rectclip::logging::init_logging;

fn main() -> Result<(), String> {
    init_logging(LevelFilter::Info);

    log::info!(
        "clipping scenes for a {}x{} viewport",
        scenes::WINDOW_WIDTH,
        scenes::WINDOW_HEIGHT
    );

    scenes::classroom_clock().map_err(|e| e.to_string())?;
    scenes::playground_ball().map_err(|e| e.to_string())?;
    scenes::text_clip().map_err(|e| e.to_string())?;

    Ok(())
}
