//! Real-URL resolution for redirect-wrapped result links.
//!
//! Baidu result links point at `www.baidu.com/link?url=...`, which answers
//! with a redirect to the actual destination. [`resolve`] follows exactly
//! one hop. [`resolve_chain`] is the explicit, bounded multi-hop variant and
//! is only used when `RedirectOptions::max_hops` is raised above 1.

use std::collections::HashSet;

use futures::StreamExt;
use url::Url;

use crate::config::RedirectOptions;
use crate::error::SearchError;
use crate::transport::{HeadResponse, Transport};
use crate::types::ResultRecord;

/// Statuses treated as "moved": the response's `Location` is the destination.
pub const MOVED_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// The destination a probe response points at, if it is a redirect.
///
/// Takes the first `Location` value when several were sent. A relative
/// location is joined onto `url`; an absolute one is returned verbatim.
pub fn redirect_target(url: &str, head: &HeadResponse) -> Option<String> {
    if !MOVED_STATUSES.contains(&head.status) {
        return None;
    }
    let location = head.locations.first()?.trim();
    if location.is_empty() {
        return None;
    }
    if Url::parse(location).is_ok() {
        return Some(location.to_string());
    }
    match Url::parse(url).and_then(|base| base.join(location)) {
        Ok(joined) => Some(joined.to_string()),
        Err(_) => Some(location.to_string()),
    }
}

/// Follow a single redirect hop from `url`.
///
/// Returns the redirect target, or `url` unchanged for any non-redirect
/// response.
///
/// # Errors
///
/// Returns the transport's error when no response is received.
pub async fn resolve<T: Transport>(transport: &T, url: &str) -> Result<String, SearchError> {
    let head = transport.head(url).await?;
    Ok(redirect_target(url, &head).unwrap_or_else(|| url.to_string()))
}

/// Follow at most `max_hops` redirects from `url`.
///
/// Stops early at the first non-redirect response or when a target repeats.
/// A failure on the first hop is an error; a failure on a later hop ends
/// the chain at the last target reached.
pub async fn resolve_chain<T: Transport>(
    transport: &T,
    url: &str,
    max_hops: usize,
) -> Result<String, SearchError> {
    let mut current = url.to_string();
    let mut seen = HashSet::from([current.clone()]);

    for hop in 0..max_hops.max(1) {
        let head = match transport.head(&current).await {
            Ok(head) => head,
            Err(err) if hop == 0 => return Err(err),
            Err(err) => {
                tracing::debug!(hop, error = %err, "redirect chain cut short");
                break;
            }
        };
        let Some(next) = redirect_target(&current, &head) else {
            break;
        };
        if !seen.insert(next.clone()) {
            tracing::debug!(hop, "redirect loop detected");
            current = next;
            break;
        }
        current = next;
    }

    Ok(current)
}

/// Resolve the link of every record, preserving record order.
///
/// At most `options.concurrency` probes are in flight. A record whose
/// resolution fails keeps its original link; records with an empty link
/// are not probed.
pub async fn resolve_links<T: Transport>(
    transport: &T,
    records: Vec<ResultRecord>,
    options: RedirectOptions,
) -> Vec<ResultRecord> {
    let max_hops = options.max_hops;
    futures::stream::iter(records)
        .map(move |mut record| async move {
            if record.link.is_empty() {
                return record;
            }
            match resolve_chain(transport, &record.link, max_hops).await {
                Ok(real) => record.link = real,
                Err(err) => {
                    tracing::warn!(error = %err, "link resolution failed, keeping original link");
                }
            }
            record
        })
        .buffered(options.concurrency.max(1))
        .collect()
        .await
}


#[cfg(test)]
mod tests {
    use super::fake::FakeTransport;
    use super::*;

    #[test]
    fn moved_status_with_location_is_target() {
        let head = HeadResponse::new(302, vec!["https://real.example/x".into()]);
        assert_eq!(
            redirect_target("http://www.baidu.com/link?url=a", &head).as_deref(),
            Some("https://real.example/x")
        );
    }

    #[test]
    fn every_moved_status_redirects() {
        for status in MOVED_STATUSES {
            let head = HeadResponse::new(status, vec!["https://real.example/".into()]);
            assert!(redirect_target("http://a.example/", &head).is_some(), "{status}");
        }
    }

    #[test]
    fn non_moved_statuses_do_not_redirect() {
        for status in [200, 204, 300, 304, 404, 500] {
            let head = HeadResponse::new(status, vec!["https://real.example/".into()]);
            assert!(redirect_target("http://a.example/", &head).is_none(), "{status}");
        }
    }

    #[test]
    fn redirect_without_location_is_none() {
        let head = HeadResponse::new(301, vec![]);
        assert!(redirect_target("http://a.example/", &head).is_none());
    }

    #[test]
    fn first_location_wins() {
        let head = HeadResponse::new(
            302,
            vec!["https://first.example/".into(), "https://second.example/".into()],
        );
        assert_eq!(
            redirect_target("http://a.example/", &head).as_deref(),
            Some("https://first.example/")
        );
    }

    #[test]
    fn relative_location_joins_request_url() {
        let head = HeadResponse::new(302, vec!["/landing?id=7".into()]);
        assert_eq!(
            redirect_target("http://www.baidu.com/link?url=a", &head).as_deref(),
            Some("http://www.baidu.com/landing?id=7")
        );
    }

    #[tokio::test]
    async fn resolve_returns_location_on_302() {
        let transport = FakeTransport::default().redirect(
            "http://www.baidu.com/link?url=a",
            302,
            &["https://real.example/x"],
        );
        let real = resolve(&transport, "http://www.baidu.com/link?url=a")
            .await
            .expect("should resolve");
        assert_eq!(real, "https://real.example/x");
    }

    #[tokio::test]
    async fn resolve_returns_url_unchanged_on_200() {
        let transport = FakeTransport::default().redirect("https://direct.example/", 200, &[]);
        let real = resolve(&transport, "https://direct.example/")
            .await
            .expect("should resolve");
        assert_eq!(real, "https://direct.example/");
    }

    #[tokio::test]
    async fn resolve_follows_only_one_hop() {
        let transport = FakeTransport::default()
            .redirect("http://a.example/", 302, &["http://b.example/"])
            .redirect("http://b.example/", 302, &["http://c.example/"]);
        let real = resolve(&transport, "http://a.example/")
            .await
            .expect("should resolve");
        assert_eq!(real, "http://b.example/");
        assert_eq!(transport.probe_count(), 1);
    }

    #[tokio::test]
    async fn resolve_propagates_transport_error() {
        let transport = FakeTransport::default();
        assert!(resolve(&transport, "http://down.example/").await.is_err());
    }

    #[tokio::test]
    async fn chain_respects_max_hops() {
        let transport = FakeTransport::default()
            .redirect("http://a.example/", 302, &["http://b.example/"])
            .redirect("http://b.example/", 301, &["http://c.example/"])
            .redirect("http://c.example/", 302, &["http://d.example/"]);
        let real = resolve_chain(&transport, "http://a.example/", 2)
            .await
            .expect("should resolve");
        assert_eq!(real, "http://c.example/");
    }

    #[tokio::test]
    async fn chain_stops_at_final_destination() {
        let transport = FakeTransport::default()
            .redirect("http://a.example/", 302, &["http://b.example/"])
            .redirect("http://b.example/", 200, &[]);
        let real = resolve_chain(&transport, "http://a.example/", 5)
            .await
            .expect("should resolve");
        assert_eq!(real, "http://b.example/");
        assert_eq!(transport.probe_count(), 2);
    }

    #[tokio::test]
    async fn chain_stops_on_loop() {
        let transport = FakeTransport::default()
            .redirect("http://a.example/", 302, &["http://b.example/"])
            .redirect("http://b.example/", 302, &["http://a.example/"]);
        let real = resolve_chain(&transport, "http://a.example/", 10)
            .await
            .expect("should resolve");
        assert_eq!(real, "http://a.example/");
        assert_eq!(transport.probe_count(), 2);
    }

    #[tokio::test]
    async fn chain_keeps_last_target_when_later_hop_fails() {
        let transport =
            FakeTransport::default().redirect("http://a.example/", 302, &["http://b.example/"]);
        let real = resolve_chain(&transport, "http://a.example/", 3)
            .await
            .expect("first hop succeeded");
        assert_eq!(real, "http://b.example/");
    }

    #[tokio::test]
    async fn resolve_links_preserves_order_and_falls_back() {
        let transport = FakeTransport::default()
            .redirect("http://www.baidu.com/link?url=a", 302, &["https://a.example/"])
            .redirect("http://www.baidu.com/link?url=c", 301, &["https://c.example/"]);
        let records = vec![
            ResultRecord::new("A", "http://www.baidu.com/link?url=a"),
            ResultRecord::new("B", "http://www.baidu.com/link?url=broken"),
            ResultRecord::new("C", "http://www.baidu.com/link?url=c"),
            ResultRecord::new("D", ""),
        ];

        let resolved = resolve_links(&transport, records, RedirectOptions::default()).await;

        assert_eq!(
            resolved,
            vec![
                ResultRecord::new("A", "https://a.example/"),
                ResultRecord::new("B", "http://www.baidu.com/link?url=broken"),
                ResultRecord::new("C", "https://c.example/"),
                ResultRecord::new("D", ""),
            ]
        );
        assert_eq!(transport.probe_count(), 3);
    }

    #[tokio::test]
    async fn resolve_links_probes_in_record_order_when_concurrency_is_one() {
        let transport = FakeTransport::default()
            .redirect("http://x.example/1", 302, &["https://one.example/"])
            .redirect("http://x.example/2", 302, &["https://two.example/"])
            .redirect("http://x.example/3", 302, &["https://three.example/"]);
        let records = vec![
            ResultRecord::new("1", "http://x.example/1"),
            ResultRecord::new("2", "http://x.example/2"),
            ResultRecord::new("3", "http://x.example/3"),
        ];
        let options = RedirectOptions {
            max_hops: 1,
            concurrency: 1,
        };
        let resolved = resolve_links(&transport, records, options).await;
        assert_eq!(resolved[0].link, "https://one.example/");
        assert_eq!(resolved[1].link, "https://two.example/");
        assert_eq!(resolved[2].link, "https://three.example/");
        assert_eq!(
            transport.recorded_probes(),
            ["http://x.example/1", "http://x.example/2", "http://x.example/3"]
        );
    }
}
