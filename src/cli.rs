use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SpinningCube,
    LitSphere,
    Textured,
    Picking,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-loop")]
#[command(about = "Frame-driven scene animation and picking demo", long_about = None)]
pub struct Cli {
    /// Scene stage to run
    #[arg(long, value_enum, default_value_t = Stage::Picking)]
    pub stage: Stage,

    /// Run without a window for the given number of frames
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Initial animation options as a JSON file
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,
}
