//! Diagnostics
//!
//! Console sink for progress lines and failure reports.

/// Destination for the widget's log output
pub trait DiagnosticSink {
    /// Progress line, e.g. `[CargoTable] Loaded 3 rows`
    fn info(&self, message: &str);

    /// Failure report: `prefix` followed by the error detail
    fn error(&self, prefix: &str, detail: &str);
}

/// Browser console (`console.log` / `console.error`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn info(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    fn error(&self, prefix: &str, detail: &str) {
        web_sys::console::error_2(&prefix.into(), &detail.into());
    }
}

#[cfg(test)]
pub use memory::MemorySink;

#[cfg(test)]
mod memory {
    use super::DiagnosticSink;
    use std::cell::RefCell;

    /// Records everything written to it
    #[derive(Debug, Default)]
    pub struct MemorySink {
        pub infos: RefCell<Vec<String>>,
        pub errors: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for MemorySink {
        fn info(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }

        fn error(&self, prefix: &str, detail: &str) {
            // console.error joins its arguments with a single space
            self.errors.borrow_mut().push(format!("{} {}", prefix, detail));
        }
    }
}
