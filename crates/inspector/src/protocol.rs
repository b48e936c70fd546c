//! The two-message activation protocol.

use crate::scanner::{InputEvent, Outcome, Scanner};
use dom::{Document, DomError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Activate,
    Deactivate,
}

/// Acknowledgment for a request; `is_active` reports the state after
/// the request was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
    pub is_active: bool,
}

/// Builds a scanner on activation; injected so hosts choose the
/// clipboard wiring.
pub type ScannerFactory = Box<dyn FnMut(&mut Document) -> Result<Scanner, DomError>>;

/// Owns at most one scanner per document and keeps the external
/// activation state in sync with it.
pub struct ActivationBridge {
    factory: ScannerFactory,
    scanner: Option<Scanner>,
}

impl ActivationBridge {
    pub fn new(factory: ScannerFactory) -> Self {
        Self {
            factory,
            scanner: None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.scanner.is_some()
    }

    #[inline]
    pub fn scanner(&self) -> Option<&Scanner> {
        self.scanner.as_ref()
    }

    #[inline]
    pub fn scanner_mut(&mut self) -> Option<&mut Scanner> {
        self.scanner.as_mut()
    }

    /// Apply a request. Both requests are idempotent: re-activating an
    /// active bridge or re-deactivating an inactive one acknowledges
    /// without changing anything.
    pub fn handle(&mut self, doc: &mut Document, request: Request) -> Ack {
        match request {
            Request::Activate => {
                if self.scanner.is_none() {
                    match (self.factory)(doc) {
                        Ok(scanner) => self.scanner = Some(scanner),
                        Err(error) => {
                            log::error!(target: "inspector", "activation failed: {error}");
                            return Ack {
                                success: false,
                                is_active: false,
                            };
                        }
                    }
                }
                Ack {
                    success: true,
                    is_active: true,
                }
            }
            Request::Deactivate => {
                if let Some(mut scanner) = self.scanner.take() {
                    scanner.destroy(doc);
                }
                Ack {
                    success: true,
                    is_active: false,
                }
            }
        }
    }

    /// Forward an input event to the scanner, dropping it when the
    /// scanner deactivates itself (Escape outside comparison mode).
    pub fn dispatch(&mut self, doc: &mut Document, event: InputEvent, now: u64) -> Outcome {
        let Some(scanner) = self.scanner.as_mut() else {
            return Outcome::Ignored;
        };
        let outcome = scanner.handle_event(doc, event, now);
        if outcome == Outcome::Deactivated {
            self.scanner = None;
        }
        outcome
    }

    /// Drive the scanner's timers.
    pub fn tick(&mut self, doc: &mut Document, now: u64) {
        if let Some(scanner) = self.scanner.as_mut() {
            scanner.tick(doc, now);
        }
    }
}
