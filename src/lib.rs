//! Estimates how often a single token ends its turn on each tile of a
//! Monopoly board, taking the chance and community chest decks, the
//! jail and the three doubles rule into account.

pub mod driver;
pub mod error;
pub mod game;
pub mod report;

pub use driver::Plan;
pub use error::SimulationError;
pub use game::{Histogram, ReleasePolicy, Simulation};
pub use report::Report;

/// Initialize terminal logging at `level`.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
