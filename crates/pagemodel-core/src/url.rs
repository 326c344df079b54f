//! Page-model API URL building.

use crate::config::ApiUrls;
use crate::model::ComponentId;

/// Build the GET URL for a full page-model request.
pub fn build_page_url(api_urls: &ApiUrls, preview: bool, path: &str, query: &str) -> String {
    let mut url = base_url(api_urls, preview, path);
    append_query(&mut url, query);
    url
}

/// Build the POST URL for re-rendering a single component.
pub fn build_component_url(
    api_urls: &ApiUrls,
    preview: bool,
    path: &str,
    query: &str,
    component_id: &ComponentId,
) -> String {
    let endpoint = api_urls.endpoint(preview);
    let mut url = base_url(api_urls, preview, path);
    url.push_str(&endpoint.component_rendering_suffix);
    url.push_str(&urlencoding::encode(component_id.as_str()));
    append_query(&mut url, query);
    url
}

/// Join the endpoint origin with the configured path segments.
///
/// The preview prefix is only included on preview requests. Empty segments
/// are skipped so the result never contains duplicate slashes.
fn base_url(api_urls: &ApiUrls, preview: bool, path: &str) -> String {
    let endpoint = api_urls.endpoint(preview);
    let mut url = endpoint.origin();

    let segments = [
        endpoint.context_path.as_str(),
        if preview {
            endpoint.preview_prefix.as_str()
        } else {
            ""
        },
        endpoint.channel_path.as_str(),
        endpoint.api_path.as_str(),
        path,
    ];

    for segment in segments {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }

    url
}

/// Append the caller's query string, joining on `?` or `&` as needed.
fn append_query(url: &mut String, query: &str) {
    let query = query.trim_start_matches(['?', '&']);
    if query.is_empty() {
        return;
    }
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(query);
}
