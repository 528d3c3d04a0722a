//! Primitives the hosting page provides to the view layer.

pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}

pub trait ModalDialog: Send {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}

/// Dialog without a surface of its own; it only tracks visibility.
#[derive(Debug, Default)]
pub struct HeadlessDialog {
    visible: bool,
    shown: usize,
}

impl HeadlessDialog {
    #[cfg(test)]
    pub(crate) fn times_shown(&self) -> usize {
        self.shown
    }
}

impl ModalDialog for HeadlessDialog {
    fn show(&mut self) {
        self.visible = true;
        self.shown += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
