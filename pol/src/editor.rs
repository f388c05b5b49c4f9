use std::borrow::Cow;

use reedline::{Prompt, Reedline, Signal};

pub struct Editor {
    editor: Reedline,
    prompt: PolPrompt,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            editor: Reedline::create(),
            prompt: PolPrompt,
        }
    }
}

pub enum EditorRead {
    Line(String),
    Empty,
    Quit,
}

impl Editor {
    pub fn read(&mut self) -> std::io::Result<EditorRead> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) if line.trim().is_empty() => Ok(EditorRead::Empty),
            Signal::Success(line) => Ok(EditorRead::Line(line)),
            Signal::CtrlC | Signal::CtrlD => Ok(EditorRead::Quit),
        }
    }
}

pub struct PolPrompt;

impl Prompt for PolPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(">> ")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: reedline::PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: reedline::PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            reedline::PromptHistorySearchStatus::Passing => "",
            reedline::PromptHistorySearchStatus::Failing => "failing ",
        };

        Cow::Owned(format!(
            "({prefix}reverse-search: {}) ",
            history_search.term
        ))
    }
}
