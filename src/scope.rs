pub trait CursorSurface {
    fn hide(&mut self);
    fn restore(&mut self);
}

/// Keeps the cursor hidden for as long as it is alive. Dropping the guard is
/// the only way to restore it, so every exit path releases exactly once.
#[must_use = "the cursor is restored as soon as the guard is dropped"]
pub struct Suppression<S: CursorSurface> {
    surface: S,
}

impl<S: CursorSurface> Suppression<S> {
    pub fn acquire(mut surface: S) -> Self {
        surface.hide();
        Self { surface }
    }
}

impl<S: CursorSurface> Drop for Suppression<S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::{Capability, DialogAction, Point, ProjectDialog, ViewerAction};
    use std::{cell::Cell, rc::Rc};

    #[derive(Default)]
    struct Counts {
        hidden: Cell<u32>,
        restored: Cell<u32>,
    }

    struct CountingSurface(Rc<Counts>);

    impl CursorSurface for CountingSurface {
        fn hide(&mut self) {
            self.0.hidden.set(self.0.hidden.get() + 1);
        }

        fn restore(&mut self) {
            self.0.restored.set(self.0.restored.get() + 1);
        }
    }

    type Session = (Rc<Counts>, Option<Suppression<CountingSurface>>);

    fn run_session(exit: impl FnOnce(&mut ProjectDialog) -> bool) -> Session {
        let counts = Rc::new(Counts::default());
        let mut dialog = ProjectDialog::new(3, Capability::Desktop);
        dialog.apply(DialogAction::Open);
        dialog.apply(DialogAction::Viewer(ViewerAction::OpenFullscreen(0)));

        let mut guard = dialog
            .viewer()
            .hides_cursor()
            .then(|| Suppression::acquire(CountingSurface(Rc::clone(&counts))));
        assert_eq!(counts.hidden.get(), 1);
        assert_eq!(counts.restored.get(), 0);

        let torn_down = exit(&mut dialog);
        if torn_down || !dialog.viewer().hides_cursor() {
            guard = None;
        }

        (counts, guard)
    }

    #[test]
    fn guard_restores_on_drop() {
        let counts = Rc::new(Counts::default());
        let guard = Suppression::acquire(CountingSurface(Rc::clone(&counts)));
        assert_eq!(counts.hidden.get(), 1);
        drop(guard);
        assert_eq!(counts.restored.get(), 1);
    }

    type Exit = fn(&mut ProjectDialog) -> bool;

    fn exit_by_escape(dialog: &mut ProjectDialog) -> bool {
        dialog.apply(DialogAction::Escape);
        false
    }

    fn exit_by_middle_click(dialog: &mut ProjectDialog) -> bool {
        dialog.apply(DialogAction::Viewer(ViewerAction::Click {
            at: Point::new(600.0, 400.0),
            viewport_width: 1200.0,
        }));
        false
    }

    fn exit_by_close_button(dialog: &mut ProjectDialog) -> bool {
        dialog.apply(DialogAction::Viewer(ViewerAction::CloseFullscreen));
        false
    }

    fn exit_by_dialog_close(dialog: &mut ProjectDialog) -> bool {
        dialog.apply(DialogAction::Close);
        false
    }

    fn exit_by_switch_to_touch(dialog: &mut ProjectDialog) -> bool {
        dialog.apply(DialogAction::Viewer(ViewerAction::Capability(Capability::Touch)));
        false
    }

    fn exit_by_unmount(_dialog: &mut ProjectDialog) -> bool {
        true
    }

    #[test]
    fn every_fullscreen_exit_releases_once() {
        let exits = [
            ("escape", exit_by_escape as Exit),
            ("middle click", exit_by_middle_click as Exit),
            ("close button", exit_by_close_button as Exit),
            ("dialog closed", exit_by_dialog_close as Exit),
            ("switch to touch", exit_by_switch_to_touch as Exit),
            ("unmount", exit_by_unmount as Exit),
        ];

        for (name, exit) in exits {
            let (counts, guard) = run_session(exit);
            assert!(guard.is_none(), "{name}");
            assert_eq!(counts.hidden.get(), 1, "{name}");
            assert_eq!(counts.restored.get(), 1, "{name}");
        }
    }

    #[test]
    fn cursor_stays_hidden_while_fullscreen_stays_open() {
        let (counts, guard) = run_session(|dialog| {
            assert!(dialog.viewer().is_fullscreen());
            false
        });
        assert!(guard.is_some());
        assert_eq!(counts.restored.get(), 0);

        drop(guard);
        assert_eq!(counts.restored.get(), 1);
    }

    #[test]
    fn paging_keeps_cursor_hidden() {
        let (counts, guard) = run_session(|dialog| {
            dialog.apply(DialogAction::Viewer(ViewerAction::Click {
                at: Point::new(1000.0, 400.0),
                viewport_width: 1200.0,
            }));
            assert!(dialog.viewer().is_fullscreen());
            false
        });
        assert!(guard.is_some());
        assert_eq!(counts.hidden.get(), 1);
        assert_eq!(counts.restored.get(), 0);

        drop(guard);
        assert_eq!(counts.restored.get(), 1);
    }

    #[test]
    fn tap_closes_touch_fullscreen_without_hiding_cursor() {
        let counts = Rc::new(Counts::default());
        let mut dialog = ProjectDialog::new(3, Capability::Touch);
        dialog.apply(DialogAction::Open);
        dialog.apply(DialogAction::Viewer(ViewerAction::OpenFullscreen(1)));

        let guard = dialog
            .viewer()
            .hides_cursor()
            .then(|| Suppression::acquire(CountingSurface(Rc::clone(&counts))));
        assert!(guard.is_none());

        let at = Point::new(200.0, 300.0);
        dialog.apply(DialogAction::Viewer(ViewerAction::TouchStart(at)));
        dialog.apply(DialogAction::Viewer(ViewerAction::TouchEnd(Point::new(210.0, 305.0))));

        assert!(!dialog.viewer().is_fullscreen());
        assert!(dialog.is_open());
        assert_eq!(counts.hidden.get(), 0);
        assert_eq!(counts.restored.get(), 0);
    }
}
