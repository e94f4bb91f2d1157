use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use scraper::{Html, Selector};
use tower::ServiceExt;

use timemeaning_site::api::routes::create_router;
use timemeaning_site::config::Config;
use timemeaning_site::site::{pages, Node, RouteEntry, RouteRegistry};
use timemeaning_site::AppState;

fn app() -> Router {
    let registry = RouteRegistry::site().unwrap();
    create_router(AppState::new(Config::default(), registry))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn select_attr(doc: &Html, selector: &str, attr: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}

#[tokio::test]
async fn stats_page_has_title_and_canonical() {
    let (status, content_type, body) = get(app(), "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));

    let doc = Html::parse_document(&body);
    let title: Vec<_> = doc
        .select(&Selector::parse("head > title").unwrap())
        .map(|el| el.text().collect::<String>())
        .collect();
    assert_eq!(title, ["Your Timezone Wrapped — TimeMeaning"]);
    assert_eq!(
        select_attr(&doc, "link[rel=canonical]", "href"),
        ["https://timemeaning.com/stats"]
    );
}

#[tokio::test]
async fn every_route_renders_its_descriptor() {
    let registry = RouteRegistry::site().unwrap();
    for entry in registry.entries() {
        let (status, _, body) = get(app(), entry.path).await;
        assert_eq!(status, StatusCode::OK, "{}", entry.path);

        let doc = Html::parse_document(&body);
        let title: String = doc
            .select(&Selector::parse("title").unwrap())
            .next()
            .unwrap()
            .text()
            .collect();
        assert_eq!(title, entry.descriptor.title);

        let canonical = select_attr(&doc, "link[rel=canonical]", "href");
        match entry.descriptor.canonical_url {
            Some(url) => assert_eq!(canonical, [url]),
            None => assert!(canonical.is_empty(), "{} has a canonical link", entry.path),
        }

        assert_eq!(
            select_attr(&doc, "meta[name=description]", "content"),
            [entry.descriptor.description]
        );
        assert_eq!(select_attr(&doc, "meta[property=\"og:type\"]", "content"), ["website"]);
        assert_eq!(
            select_attr(&doc, "meta[property=\"og:site_name\"]", "content"),
            ["TimeMeaning"]
        );
        if let Some(social) = entry.descriptor.social {
            assert_eq!(
                select_attr(&doc, "meta[name=\"twitter:card\"]", "content"),
                [social.kind.as_str()]
            );
            assert_eq!(
                select_attr(&doc, "meta[property=\"og:description\"]", "content"),
                [social.description]
            );
        }
    }
}

#[tokio::test]
async fn pending_pages_show_loading_placeholder() {
    let (_, _, body) = get(app(), "/tools/unix-birthday").await;
    let doc = Html::parse_document(&body);
    let status: Vec<String> = doc
        .select(&Selector::parse("body > div[role=status]").unwrap())
        .map(|el| el.text().collect())
        .collect();
    assert_eq!(status, ["Loading..."]);
}

#[tokio::test]
async fn page_content_hook_is_rendered() {
    fn content() -> Node {
        Node::element("main", vec![Node::text("Say hello")])
    }
    let registry = RouteRegistry::from_entries(vec![
        RouteEntry::new("/contact", pages::CONTACT).with_content(content),
    ])
    .unwrap();
    let app = create_router(AppState::new(Config::default(), registry));

    let (status, _, body) = get(app, "/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<body><main>Say hello</main></body>"));
}

#[tokio::test]
async fn robots_txt_matches_policy() {
    let (status, content_type, body) = get(app(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(
        body,
        "User-agent: *\nAllow: /\nDisallow: /r/\nDisallow: /developers/spec\n\nSitemap: https://timemeaning.com/sitemap.xml\n"
    );
    assert_eq!(body.matches("Sitemap:").count(), 1);
}

#[tokio::test]
async fn sitemap_lists_canonical_urls() {
    let (status, content_type, body) = get(app(), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/xml"));
    assert!(body.contains("<loc>https://timemeaning.com/stats</loc>"));
    assert!(body.contains("<loc>https://timemeaning.com/tools</loc>"));
    assert_eq!(body.matches("<loc>").count(), 2);
}

#[tokio::test]
async fn meta_api_returns_descriptor() {
    let (status, _, body) = get(app(), "/api/meta?path=/tools").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["meta"]["status"], "success");
    assert_eq!(json["data"]["path"], "/tools");
    assert_eq!(json["data"]["title"], "Free Timezone Tools — TimeMeaning");
    assert_eq!(json["data"]["canonical_url"], "https://timemeaning.com/tools");
    assert_eq!(json["data"]["social"]["kind"], "summary_large_image");
    assert_eq!(json["data"]["site_name"], "TimeMeaning");
}

#[tokio::test]
async fn meta_api_unknown_route_is_404() {
    let (status, _, body) = get(app(), "/api/meta?path=/r/abc123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["meta"]["status"], "error");
    assert_eq!(json["meta"]["status_code"], 404);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, _, body) = get(app(), "/developers/spec").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "No page registered at /developers/spec");
}

#[tokio::test]
async fn health_reports_address_and_route_count() {
    let (status, _, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "status": "ok", "addr": "127.0.0.1:3000", "routes": 5 })
    );

    let config = Config::from_parts("0.0.0.0", "8080", "info".to_string()).unwrap();
    let app = create_router(AppState::new(config, RouteRegistry::site().unwrap()));
    let (_, _, body) = get(app, "/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["addr"], "0.0.0.0:8080");
}

#[tokio::test]
async fn reserved_paths_are_not_shadowed() {
    let registry = RouteRegistry::from_entries(vec![
        RouteEntry::new("/robots.txt", pages::PRIVACY),
        RouteEntry::new("/stats", pages::STATS),
    ])
    .unwrap();
    let app = create_router(AppState::new(Config::default(), registry));

    let (status, _, body) = get(app.clone(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("User-agent: *"));

    let (status, _, _) = get(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
}
