//! Terminal selection surface
//!
//! Prints the history as a numbered list on stderr and reads commands
//! from stdin while visible: a number selects, `p` or an empty line
//! pastes, `q` closes.

use std::io::{self, BufRead};
use std::thread;

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{DisplaySurface, SurfaceCallback, SurfaceError};
use crate::domain::history::ClipboardSnapshot;

use super::list::{SnippetList, PREVIEW_CHARS};

/// What a line of input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    Selected(usize),
    OutOfRange(usize),
    Paste,
    Close,
    /// Input while hidden, or unrecognised
    Ignored,
}

/// Selection surface rendered in the daemon's terminal
#[derive(Clone, Default)]
pub struct ConsoleSurface {
    list: SnippetList,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_list(&self) {
        let snippets = self.list.snippets();
        let selected = self.list.selected_index();

        eprintln!("{}", "─── Clipboard history ───".bold());
        if snippets.is_empty() {
            eprintln!("  {}", "(empty)".dimmed());
        }
        for (index, snippet) in snippets.iter().enumerate() {
            let marker = if selected == Some(index) { "›" } else { " " };
            eprintln!(
                "{} {} {}",
                marker.green(),
                format!("{:>2}", index).cyan(),
                snippet.preview(PREVIEW_CHARS)
            );
        }
        eprintln!(
            "{}",
            "number: select   p/enter: paste   q: close".dimmed()
        );
    }

    /// Apply one line of user input
    pub fn handle_input(&self, line: &str) -> ConsoleInput {
        if !self.list.is_visible() {
            return ConsoleInput::Ignored;
        }

        let line = line.trim();
        match line {
            "" | "p" => {
                self.list.fire_paste();
                ConsoleInput::Paste
            }
            "q" => {
                self.list.fire_close();
                ConsoleInput::Close
            }
            _ => match line.parse::<usize>() {
                Ok(index) if self.list.select(index) => {
                    self.print_list();
                    ConsoleInput::Selected(index)
                }
                Ok(index) => ConsoleInput::OutOfRange(index),
                Err(_) => ConsoleInput::Ignored,
            },
        }
    }

    /// Feed stdin lines to `handle_input` on a background thread until EOF
    pub fn listen_stdin(&self) -> io::Result<()> {
        let surface = self.clone();
        thread::Builder::new()
            .name("console-input".to_string())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    match line {
                        Ok(line) => {
                            surface.handle_input(&line);
                        }
                        Err(_) => break,
                    }
                }
            })?;
        Ok(())
    }
}

#[async_trait]
impl DisplaySurface for ConsoleSurface {
    async fn render(&self, snippets: &[ClipboardSnapshot]) -> Result<(), SurfaceError> {
        self.list.replace(snippets);
        if self.list.is_visible() {
            self.print_list();
        }
        Ok(())
    }

    fn selection(&self) -> Option<String> {
        self.list.selection()
    }

    fn select(&self, index: usize) -> bool {
        self.list.select(index)
    }

    async fn show(&self) -> Result<(), SurfaceError> {
        self.list.set_visible(true);
        self.print_list();
        Ok(())
    }

    async fn hide(&self) -> Result<(), SurfaceError> {
        self.list.set_visible(false);
        Ok(())
    }

    fn on_close_requested(&self, callback: SurfaceCallback) {
        self.list.set_on_close(callback);
    }

    fn on_paste_requested(&self, callback: SurfaceCallback) {
        self.list.set_on_paste(callback);
    }
}
