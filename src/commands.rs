//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Write text to the system clipboard on a worker thread.
    /// Sends `AppMsg::ClipboardWriteCompleted` when done
    CopyToClipboard { text: String },
    /// Read text from the system clipboard on a worker thread.
    /// Sends `AppMsg::ClipboardReadCompleted` when done
    ReadClipboard,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Reinitialize the renderer (e.g., after scale factor change)
    ReinitializeRenderer,
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The button press is visible immediately; completion redraws again
            Cmd::CopyToClipboard { .. } => true,
            // Paste lands with ClipboardReadCompleted
            Cmd::ReadClipboard => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::ReinitializeRenderer => true,
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::ReadClipboard.needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
        assert!(Cmd::CopyToClipboard {
            text: "hi".into()
        }
        .needs_redraw());
    }

    #[test]
    fn test_batch_needs_redraw_if_any() {
        assert!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::None, Cmd::Quit]).needs_redraw());
    }

    #[test]
    fn test_flatten_nested_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::None,
            Cmd::batch(vec![Cmd::ReadClipboard, Cmd::Quit]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Redraw, Cmd::ReadClipboard, Cmd::Quit]
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Cmd::from(None), Cmd::None);
        assert_eq!(Cmd::from(Some(Cmd::Redraw)), Cmd::Redraw);
    }
}
