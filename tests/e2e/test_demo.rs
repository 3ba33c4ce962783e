use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_serve_the_demo_page() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/").await.unwrap();
    response.assert_status(StatusCode::OK);

    let content_type = response.header("content-type").unwrap();
    assert!(content_type.starts_with("text/html"));

    // The page must carry the clone form fields and post to the clone route
    let page = String::from_utf8(response.body_bytes.clone()).unwrap();
    for needle in ["tts_text", "style", "ref_audio", "/clone_voice"] {
        assert!(page.contains(needle), "demo page missing '{}'", needle);
    }
}
