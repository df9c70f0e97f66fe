use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Score sheet table
    Text,
    /// One JSON document per line
    Jsonl,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewerArg {
    World,
    Fore,
    Middle,
    Rear,
    Public,
}

impl ViewerArg {
    pub fn viewer(self) -> skat_engine::Viewer {
        use skat_engine::Viewer;
        match self {
            ViewerArg::World => Viewer::World,
            ViewerArg::Fore => Viewer::Player(skat_engine::domain::FORE),
            ViewerArg::Middle => Viewer::Player(skat_engine::domain::MIDDLE),
            ViewerArg::Rear => Viewer::Player(skat_engine::domain::REAR),
            ViewerArg::Public => Viewer::Public,
        }
    }
}
