// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

/// Derive a company name from a job URL's host.
///
/// Workday tenants live under hosts like `picknpay.wd3.myworkdayjobs.com`;
/// the first dot-separated label is the tenant (company) name. Returns
/// `None` when the URL has no recognizable host.
///
/// # Examples
/// ```
/// use wdcrawl::utils::company_from_url;
///
/// assert_eq!(
///     company_from_url("https://picknpay.wd3.myworkdayjobs.com/en-US/careers/job/123"),
///     Some("picknpay".to_string())
/// );
/// assert_eq!(company_from_url("not a url"), None);
/// ```
pub fn company_from_url(job_url: &str) -> Option<String> {
    let parsed = Url::parse(job_url).ok()?;
    let host = parsed.host_str()?;
    host.split('.').next().map(|label| label.to_string())
}

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}
