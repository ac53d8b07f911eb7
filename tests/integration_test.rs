use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use writer_portal::models::{Attachment, FormField};
use writer_portal::orchestrator::{Notification, Section, WritersView};
use writer_portal::utils::logging;
use writer_portal::{App, Config, MarketplaceApi, MarketplaceClient, WriterFilter};

fn config_for(server: &MockServer) -> Config {
    Config {
        api_base_url: server.uri(),
        verbose_logging: true,
    }
}

fn student_id() -> Attachment {
    Attachment::new("student-id.png", "image/png", b"\x89PNG fake".to_vec())
}

async fn filled_app(server: &MockServer, rate: &str, attachment: Option<Attachment>) -> App {
    let mut app = App::new(&config_for(server));
    app.show_section(Section::Apply).await;
    app.edit_form(FormField::FirstName, "Ana");
    app.edit_form(FormField::LastName, "Lee");
    app.edit_form(FormField::CollegeName, "MIT");
    app.edit_form(FormField::Branch, "CS");
    app.edit_form(FormField::Email, "a@x.com");
    app.edit_form(FormField::RatePerTenPages, rate);
    app.select_attachment(attachment);
    app
}

#[tokio::test]
async fn test_submit_application_end_to_end() {
    logging::init(true);
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload-student-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "url": "u1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/writers/apply"))
        .and(body_partial_json(json!({
            "firstName": "Ana",
            "studentIdUrl": "u1",
            "ratePerTenPages": 20.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = filled_app(&server, "20", Some(student_id())).await;
    assert!(app.submit_application().await);

    assert!(app.state().form.is_empty());
    assert_eq!(app.view().visible_section(), Some("main"));
    assert_eq!(
        app.take_notifications(),
        vec![Notification::success(
            "Application submitted successfully! We will review your application."
        )]
    );

    // 上传请求为 multipart，字段名为 file
    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/api/upload-student-id")
        .unwrap();
    let content_type = upload.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="student-id.png""#));
}

#[tokio::test]
async fn test_upload_failure_never_calls_apply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload-student-id"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "bad file"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/writers/apply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = filled_app(&server, "20", Some(student_id())).await;
    assert!(!app.submit_application().await);

    assert_eq!(app.take_notifications(), vec![Notification::error("bad file")]);
    assert_eq!(app.state().form.first_name, "Ana");
}

#[tokio::test]
async fn test_rejected_application_keeps_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload-student-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "url": "https://x/y.png"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/writers/apply"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "message": "duplicate email"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = filled_app(&server, "12.5", Some(student_id())).await;
    assert!(!app.submit_application().await);

    assert_eq!(
        app.take_notifications(),
        vec![Notification::error("duplicate email")]
    );
    assert_eq!(app.state().form.rate_per_ten_pages, "12.5");
    assert!(app.state().is_visible(Section::Apply));

    let requests = server.received_requests().await.unwrap();
    let apply = requests
        .iter()
        .find(|r| r.url.path() == "/api/writers/apply")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&apply.body).unwrap();
    assert_eq!(body["studentIdUrl"], json!("https://x/y.png"));
    assert_eq!(body["ratePerTenPages"], json!(12.5));
}

#[tokio::test]
async fn test_missing_file_sends_nothing() {
    let server = MockServer::start().await;

    let mut app = filled_app(&server, "20", None).await;
    assert!(!app.submit_application().await);

    assert_eq!(
        app.take_notifications(),
        vec![Notification::error("Please upload your Student ID card image.")]
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_response_is_unexpected_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload-student-id"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let mut app = filled_app(&server, "20", Some(student_id())).await;
    assert!(!app.submit_application().await);

    assert_eq!(
        app.take_notifications(),
        vec![Notification::error(
            "An unexpected error occurred. Please try again later."
        )]
    );
}

#[tokio::test]
async fn test_writers_section_loads_list_and_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/writers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "first_name": "Ana",
                "last_name": "Lee",
                "college_name": "MIT",
                "branch": "CS",
                "rate_per_ten_pages": "20.00",
                "email": "a@x.com"
            }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/colleges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["MIT", "UCLA"])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["CS"])))
        .mount(&server)
        .await;

    let mut app = App::new(&config_for(&server));
    app.show_section(Section::Writers).await;

    let view = app.view();
    assert_eq!(view.visible_section(), Some("writers"));
    assert!(view.writers_list.contains("<p>Rate: $20.00 per 10 pages</p>"));
    assert_eq!(
        view.college_options,
        r#"<option value="">All Colleges</option><option value="MIT">MIT</option><option value="UCLA">UCLA</option>"#
    );

    // 未筛选时不附加查询参数
    let requests = server.received_requests().await.unwrap();
    let writers_request = requests
        .iter()
        .find(|r| r.url.path() == "/api/writers")
        .unwrap();
    assert_eq!(writers_request.url.query(), None);
}

#[tokio::test]
async fn test_writer_filter_becomes_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/writers"))
        .and(query_param("college", "MIT"))
        .and(query_param("branch", "CS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = MarketplaceClient::new(&config_for(&server));
    let writers = client
        .writers(&WriterFilter::new("MIT", "CS"))
        .await
        .unwrap();
    assert!(writers.is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_shows_error_text() {
    // discard 端口上没有 HTTP 服务
    let config = Config {
        api_base_url: "http://127.0.0.1:9".to_string(),
        verbose_logging: false,
    };

    let mut app = App::new(&config);
    app.filter_writers("", "").await;

    assert_eq!(app.state().writers, WritersView::Failed);
    assert_eq!(
        app.view().writers_list,
        "Error loading writers. Please try again."
    );
}

#[tokio::test]
async fn test_null_rate_still_renders_every_card() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/writers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "first_name": "Ana",
                "last_name": "Lee",
                "college_name": "MIT",
                "branch": "CS",
                "rate_per_ten_pages": 20.0,
                "email": "a@x.com"
            },
            {
                "first_name": "Bo",
                "last_name": "Kim",
                "college_name": "UCLA",
                "branch": "EE",
                "rate_per_ten_pages": null,
                "email": "b@x.com"
            }
        ])))
        .mount(&server)
        .await;

    let mut app = App::new(&config_for(&server));
    app.filter_writers("", "").await;

    let list = app.view().writers_list;
    assert_eq!(list.matches(r#"class="writer-card""#).count(), 2);
    assert!(list.contains("<p>Rate: $20 per 10 pages</p>"));
    assert!(list.contains("<h3>Bo Kim</h3>"));
    assert!(list.contains("<p>Rate: $ per 10 pages</p>"));
}
