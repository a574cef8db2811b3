/// Menu actions a chat or web front end can send instead of a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Example,
    AnalyzePhoto,
    AlloyCatalog,
    NewAnalysis,
    MainMenu,
}

pub const COMMANDS: &[Command] = &[
    Command::Start,
    Command::Help,
    Command::Example,
    Command::AnalyzePhoto,
    Command::AlloyCatalog,
    Command::NewAnalysis,
    Command::MainMenu,
];

impl Command {
    /// Resolve a slash command or a menu button label. Anything else is
    /// not a command and should be parsed as a composition.
    pub fn from_message(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(slash) = text.strip_prefix('/') {
            // "/help@botname" addresses a specific bot
            let name = slash.split('@').next().unwrap_or_default();
            return COMMANDS.iter().copied().find(|c| c.name() == name);
        }
        COMMANDS.iter().copied().find(|c| c.label() == text)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Example => "example",
            Self::AnalyzePhoto => "photo",
            Self::AlloyCatalog => "alloys",
            Self::NewAnalysis => "new",
            Self::MainMenu => "menu",
        }
    }

    /// Button label shown in the menu keyboard.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "▶️ Start",
            Self::Help => "ℹ️ Help",
            Self::Example => "📊 Example analysis",
            Self::AnalyzePhoto => "📸 Analyze photo",
            Self::AlloyCatalog => "🔍 Alloy catalog",
            Self::NewAnalysis => "🔄 New analysis",
            Self::MainMenu => "🏠 Main menu",
        }
    }
}
