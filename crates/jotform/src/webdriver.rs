use crate::driver::FormDriver;
use crate::error::FormError;
use crate::plan::Locator;
use std::time::Duration;
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Chrome session behind a running WebDriver server (e.g. chromedriver).
pub struct WebDriverDriver {
    session: Option<WebDriver>,
}

impl WebDriverDriver {
    pub async fn connect(server_url: &str) -> Result<Self, FormError> {
        let caps = DesiredCapabilities::chrome();
        let session = WebDriver::new(server_url, caps).await.map_err(driver_error)?;
        tracing::info!(server_url, "webdriver session started");
        Ok(Self {
            session: Some(session),
        })
    }

    fn session(&self) -> Result<&WebDriver, FormError> {
        self.session
            .as_ref()
            .ok_or_else(|| FormError::Driver("session already closed".to_string()))
    }

    async fn find(&self, locator: &Locator) -> Result<WebElement, FormError> {
        self.session()?
            .find(by(locator))
            .await
            .map_err(|_| FormError::ElementNotFound(locator.clone()))
    }

    async fn find_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<WebElement, FormError> {
        self.session()?
            .query(by(locator))
            .wait(timeout, POLL_INTERVAL)
            .first()
            .await
            .map_err(|_| FormError::Timeout {
                locator: locator.clone(),
                timeout,
            })
    }
}

impl FormDriver for WebDriverDriver {
    async fn open(&mut self, url: &str) -> Result<(), FormError> {
        self.session()?.goto(url).await.map_err(driver_error)
    }

    async fn enter_frame(&mut self, frame: &Locator, timeout: Duration) -> Result<(), FormError> {
        let element = self.find_within(frame, timeout).await?;
        element.enter_frame().await.map_err(driver_error)
    }

    async fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Result<(), FormError> {
        self.find_within(locator, timeout).await.map(|_| ())
    }

    async fn type_text(&mut self, locator: &Locator, text: &str) -> Result<(), FormError> {
        let element = self.find(locator).await?;
        element.send_keys(text).await.map_err(driver_error)
    }

    async fn click(&mut self, locator: &Locator) -> Result<(), FormError> {
        let element = self.find(locator).await?;
        element.click().await.map_err(driver_error)
    }

    async fn close(&mut self) -> Result<(), FormError> {
        if let Some(session) = self.session.take() {
            session.quit().await.map_err(driver_error)?;
        }
        Ok(())
    }
}

fn by(locator: &Locator) -> By {
    match locator {
        Locator::Id(id) => By::Id(id.clone()),
        Locator::XPath(xpath) => By::XPath(xpath.clone()),
    }
}

fn driver_error(err: WebDriverError) -> FormError {
    FormError::Driver(err.to_string())
}
