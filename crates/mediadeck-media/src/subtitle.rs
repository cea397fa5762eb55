//! Subtitle display subsystem
//!
//! The manager does not remember whether subtitles are shown. Callers that
//! need visibility state keep it themselves.

use mediadeck_common::Console;

pub trait SubtitleBackend {
    fn load(&mut self, source: &str);
    fn show(&mut self);
    fn hide(&mut self);
    fn set_language(&mut self, language: &str);
}

#[derive(Debug, Clone)]
pub struct SubtitleManager {
    console: Console,
}

impl SubtitleManager {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl SubtitleBackend for SubtitleManager {
    fn load(&mut self, source: &str) {
        tracing::debug!(source, "subtitle load");
        self.console.line(format!("Loading subtitle file: {}", source));
    }

    fn show(&mut self) {
        tracing::debug!("subtitle show");
        self.console.line("Showing subtitles");
    }

    fn hide(&mut self) {
        tracing::debug!("subtitle hide");
        self.console.line("Hiding subtitles");
    }

    fn set_language(&mut self, language: &str) {
        tracing::debug!(language, "subtitle language");
        self.console
            .line(format!("Setting subtitle language to: {}", language));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_action() {
        let console = Console::buffered();
        let mut subs = SubtitleManager::new(console.clone());
        subs.load("movie.srt");
        subs.set_language("Spanish");
        subs.show();
        subs.hide();
        assert_eq!(
            console.lines(),
            vec![
                "Loading subtitle file: movie.srt",
                "Setting subtitle language to: Spanish",
                "Showing subtitles",
                "Hiding subtitles",
            ]
        );
    }

    #[test]
    fn repeated_show_is_harmless() {
        let console = Console::buffered();
        let mut subs = SubtitleManager::new(console.clone());
        subs.show();
        subs.show();
        assert_eq!(console.lines(), vec!["Showing subtitles", "Showing subtitles"]);
    }
}
