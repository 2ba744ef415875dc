// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::host::ViewportSize;

/// A game window with a fixed design-time size and a live, resizable size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameWindow {
    original: Size,
    current: Size,
}

impl GameWindow {
    /// Creates a window whose current size starts at its original size.
    #[must_use]
    pub const fn new(original: Size) -> Self {
        Self {
            original,
            current: original,
        }
    }

    /// Changes the live size. The original size never changes.
    pub fn resize(&mut self, size: Size) {
        self.current = size;
    }
}

impl ViewportSize for GameWindow {
    fn current_size(&self) -> Size {
        self.current
    }

    fn original_size(&self) -> Size {
        self.original
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::GameWindow;
    use crate::host::ViewportSize;

    #[test]
    fn resize_keeps_original() {
        let mut window = GameWindow::new(Size::new(800.0, 600.0));
        assert_eq!(window.current_size(), window.original_size());

        window.resize(Size::new(1920.0, 1080.0));
        assert_eq!(window.current_size(), Size::new(1920.0, 1080.0));
        assert_eq!(window.original_size(), Size::new(800.0, 600.0));
    }
}
