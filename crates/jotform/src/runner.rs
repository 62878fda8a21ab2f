use crate::driver::FormDriver;
use crate::error::FormError;
use crate::plan::{Fill, FormPlan, PageName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub pages: Vec<PageName>,
    pub submitted: bool,
}

/// Walks the plan page by page. The first failure aborts the run; the
/// caller is left to close the driver.
pub async fn run_plan<D: FormDriver>(
    driver: &mut D,
    plan: &FormPlan,
) -> Result<RunReport, FormError> {
    tracing::info!(url = %plan.start_url, kind = %plan.kind, "starting change submission");
    driver.open(&plan.start_url).await?;
    driver.enter_frame(&plan.frame, plan.frame_timeout()).await?;

    let mut report = RunReport {
        pages: Vec::with_capacity(plan.pages.len()),
        submitted: false,
    };
    let page_timeout = plan.page_timeout();

    for page in &plan.pages {
        driver.wait_for(&page.ready, page_timeout).await?;
        for action in &page.actions {
            match &action.fill {
                Fill::Type(text) => driver.type_text(&action.locator, text).await?,
                Fill::Click => driver.click(&action.locator).await?,
            }
        }
        if let Some(advance) = &page.advance {
            driver.click(advance).await?;
        }
        tracing::debug!(page = ?page.page, actions = page.actions.len(), "page done");
        report.pages.push(page.page);
    }

    report.submitted = plan
        .pages
        .last()
        .is_some_and(|page| page.page == PageName::Submitter && page.advance.is_some());
    if report.submitted {
        tracing::info!("change submitted");
    } else {
        tracing::info!("form filled, left unsubmitted for review");
    }
    Ok(report)
}
