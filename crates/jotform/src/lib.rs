//! Drives the WSO group records change form from a normalized meeting record.

pub mod consts;
pub mod driver;
pub mod error;
pub mod plan;
pub mod runner;
pub mod settings;
#[cfg(feature = "webdriver")]
pub mod webdriver;

pub use driver::{DriverEvent, FormDriver, RecordingDriver};
pub use error::FormError;
pub use plan::{FieldAction, Fill, FormPage, FormPlan, Locator, PageName, PlanRequest};
pub use runner::{RunReport, run_plan};
pub use settings::FormSettings;
#[cfg(feature = "webdriver")]
pub use webdriver::WebDriverDriver;
