//! Window-level actions the controller delegates to the windowing
//! backend.

/// The slice of the windowing backend the controller needs: asking the
/// window to close and rewriting its title.
pub trait WindowControl {
    /// Flag the window as close-requested. The outer loop observes the
    /// flag once per frame; this is the only termination trigger from
    /// input.
    fn request_close(&mut self);
    /// Replace the window title.
    fn set_title(&mut self, title: &str);
}

#[cfg(test)]
pub(crate) mod fake {
    //! A window-control double that records requests.

    use super::WindowControl;

    #[derive(Debug, Default)]
    pub struct FakeWindow {
        pub close_requested: bool,
        pub titles: Vec<String>,
    }

    impl WindowControl for FakeWindow {
        fn request_close(&mut self) {
            self.close_requested = true;
        }

        fn set_title(&mut self, title: &str) {
            self.titles.push(title.into());
        }
    }
}
