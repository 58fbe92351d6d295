//! Group formatting stack.

use crate::model::Modifiers;

/// Default `\ucN` fallback count.
pub const DEFAULT_UNICODE_SKIP: u32 = 1;

/// Formatting state of one open group.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Modifiers in effect for text in this group
    pub modifiers: Modifiers,
    /// Number of fallback characters following a `\uN`
    pub unicode_skip: u32,
}

impl Frame {
    fn base() -> Self {
        Self {
            modifiers: Modifiers::new(),
            unicode_skip: DEFAULT_UNICODE_SKIP,
        }
    }

    fn child(&self) -> Self {
        Self {
            modifiers: self.modifiers.inherited(),
            unicode_skip: self.unicode_skip,
        }
    }
}

/// Stack of group frames. The base frame is never popped.
#[derive(Debug, Clone)]
pub struct FormattingStack {
    frames: Vec<Frame>,
}

impl FormattingStack {
    /// Create a stack holding only the base frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::base()],
        }
    }

    /// Open a group. The new frame inherits everything but boundary markers.
    pub fn push(&mut self) {
        let child = self.current().child();
        self.frames.push(child);
    }

    /// Close a group. Returns false when only the base frame is left.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// The innermost frame.
    pub fn current(&self) -> &Frame {
        // the base frame is never removed
        &self.frames[self.frames.len() - 1]
    }

    /// Mutable access to the innermost frame.
    pub fn current_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Number of frames, base included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for FormattingStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModifierKey;

    #[test]
    fn test_push_inherits_modifiers() {
        let mut stack = FormattingStack::new();
        stack.current_mut().modifiers.insert(ModifierKey::Bold, true);
        stack.current_mut().modifiers.insert(ModifierKey::FontSize, 12.0);
        stack.push();

        assert_eq!(stack.depth(), 2);
        assert!(stack.current().modifiers.flag(ModifierKey::Bold));
        assert_eq!(stack.current().modifiers.font_size(), Some(12.0));
    }

    #[test]
    fn test_push_drops_boundary_markers() {
        let mut stack = FormattingStack::new();
        stack.current_mut().modifiers.insert(ModifierKey::Paragraph, true);
        stack.current_mut().modifiers.insert(ModifierKey::Tab, true);
        stack.push();

        assert!(stack.current().modifiers.is_empty());
    }

    #[test]
    fn test_child_changes_do_not_leak() {
        let mut stack = FormattingStack::new();
        stack.push();
        stack.current_mut().modifiers.insert(ModifierKey::Italic, true);
        stack.current_mut().unicode_skip = 2;
        assert!(stack.pop());

        assert!(!stack.current().modifiers.contains(ModifierKey::Italic));
        assert_eq!(stack.current().unicode_skip, DEFAULT_UNICODE_SKIP);
    }

    #[test]
    fn test_unicode_skip_inherited() {
        let mut stack = FormattingStack::new();
        stack.current_mut().unicode_skip = 0;
        stack.push();
        assert_eq!(stack.current().unicode_skip, 0);
    }

    #[test]
    fn test_base_frame_never_popped() {
        let mut stack = FormattingStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
    }
}
