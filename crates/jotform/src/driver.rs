use crate::error::FormError;
use crate::plan::Locator;
use std::collections::HashSet;
use std::time::Duration;

/// The browser operations a form plan needs. Every call blocks until done
/// or fails; nothing retries.
#[allow(async_fn_in_trait)]
pub trait FormDriver {
    async fn open(&mut self, url: &str) -> Result<(), FormError>;

    /// Waits for the iframe and switches into it.
    async fn enter_frame(&mut self, frame: &Locator, timeout: Duration) -> Result<(), FormError>;

    async fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Result<(), FormError>;

    async fn type_text(&mut self, locator: &Locator, text: &str) -> Result<(), FormError>;

    async fn click(&mut self, locator: &Locator) -> Result<(), FormError>;

    async fn close(&mut self) -> Result<(), FormError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Open(String),
    EnterFrame(Locator),
    WaitFor(Locator),
    Type(Locator, String),
    Click(Locator),
    Close,
}

/// Dry-run driver: logs and records each call instead of touching a browser.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub events: Vec<DriverEvent>,
    missing: HashSet<Locator>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `locator` behave as absent from the page.
    pub fn without(mut self, locator: Locator) -> Self {
        self.missing.insert(locator);
        self
    }

    pub fn clicks(&self) -> impl Iterator<Item = &Locator> {
        self.events.iter().filter_map(|event| match event {
            DriverEvent::Click(locator) => Some(locator),
            _ => None,
        })
    }

    pub fn typed(&self, locator: &Locator) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            DriverEvent::Type(target, text) if target == locator => Some(text.as_str()),
            _ => None,
        })
    }

    fn present(&self, locator: &Locator) -> Result<(), FormError> {
        if self.missing.contains(locator) {
            Err(FormError::ElementNotFound(locator.clone()))
        } else {
            Ok(())
        }
    }

    fn present_within(&self, locator: &Locator, timeout: Duration) -> Result<(), FormError> {
        if self.missing.contains(locator) {
            Err(FormError::Timeout {
                locator: locator.clone(),
                timeout,
            })
        } else {
            Ok(())
        }
    }
}

impl FormDriver for RecordingDriver {
    async fn open(&mut self, url: &str) -> Result<(), FormError> {
        tracing::info!(url, "open");
        self.events.push(DriverEvent::Open(url.to_string()));
        Ok(())
    }

    async fn enter_frame(&mut self, frame: &Locator, timeout: Duration) -> Result<(), FormError> {
        self.present_within(frame, timeout)?;
        tracing::info!(%frame, "enter frame");
        self.events.push(DriverEvent::EnterFrame(frame.clone()));
        Ok(())
    }

    async fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Result<(), FormError> {
        self.present_within(locator, timeout)?;
        tracing::debug!(%locator, "ready");
        self.events.push(DriverEvent::WaitFor(locator.clone()));
        Ok(())
    }

    async fn type_text(&mut self, locator: &Locator, text: &str) -> Result<(), FormError> {
        self.present(locator)?;
        tracing::info!(%locator, text, "type");
        self.events.push(DriverEvent::Type(locator.clone(), text.to_string()));
        Ok(())
    }

    async fn click(&mut self, locator: &Locator) -> Result<(), FormError> {
        self.present(locator)?;
        tracing::info!(%locator, "click");
        self.events.push(DriverEvent::Click(locator.clone()));
        Ok(())
    }

    async fn close(&mut self) -> Result<(), FormError> {
        self.events.push(DriverEvent::Close);
        Ok(())
    }
}
