use std::process::{Command, Output};

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const GEONORGE_OSLO: &str =
    r#"{"navn":[{"skrivemåte":"Oslo","representasjonspunkt":{"øst":10.74,"nord":59.91}}]}"#;

const MET_NO_ONE_STEP: &str = r#"{"properties":{"timeseries":[{"time":"2021-03-01T12:00:00Z","data":{"instant":{"details":{"air_pressure_at_sea_level":1013.2,"air_temperature":5.0,"cloud_area_fraction":87.5,"relative_humidity":71.3,"wind_from_direction":204.1,"wind_speed":3.4}}}}]}}"#;

async fn run_cli(args: &[&str], server: &MockServer) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let geocoder_url = format!("{}/navn", server.uri());
    let forecast_url = format!("{}/compact.json", server.uri());

    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_weather-query"))
            .args(&args)
            .env("WEATHER_QUERY_GEOCODER_URL", geocoder_url)
            .env("WEATHER_QUERY_FORECAST_URL", forecast_url)
            .env("WEATHER_QUERY_TIMEOUT_SECS", "5")
            .env_remove("RUST_LOG")
            .output()
            .expect("run weather-query")
    })
    .await
    .expect("join")
}

async fn mount(server: &MockServer, route: &str, template: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(calls)
        .mount(server)
        .await;
}

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_place_prints_usage_and_exits_1_without_http() {
    let server = MockServer::start().await;
    mount(&server, "/navn", json(GEONORGE_OSLO), 0).await;
    mount(&server, "/compact.json", json(MET_NO_ONE_STEP), 0).await;

    let output = run_cli(&[], &server).await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: "), "stdout: {stdout}");
    assert!(stdout.contains("<place>"));
    assert!(stdout.contains("Location string argument missing"));
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_eight_line_report_on_success() {
    let server = MockServer::start().await;
    mount(&server, "/navn", json(GEONORGE_OSLO), 1).await;
    mount(&server, "/compact.json", json(MET_NO_ONE_STEP), 1).await;

    let output = run_cli(&["oslo"], &server).await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Current weather in:           Oslo");
    assert_eq!(lines[2], "Observation timestamp:        2021-03-01 12:00:00 +0000 UTC");
    assert_eq!(lines[3], "Temperature (celsius):        5°C");
    assert_eq!(lines[4], "Temperature (fahrenheit):     41°F");
    assert_eq!(lines[5], "Airpressure at sea level:     1013.2 hPa");
    assert_eq!(lines[6], "Current humidity:             71.3 %");
}

#[tokio::test(flavor = "multi_thread")]
async fn extra_arguments_after_place_are_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/navn"))
        .and(query_param("sok", "Bø"))
        .respond_with(json(GEONORGE_OSLO))
        .expect(1)
        .mount(&server)
        .await;
    mount(&server, "/compact.json", json(MET_NO_ONE_STEP), 1).await;

    let output = run_cli(&["Bø", "i", "Telemark"], &server).await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 8);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_geocode_result_fails_before_weather_call() {
    let server = MockServer::start().await;
    mount(&server, "/navn", json(r#"{"navn":[]}"#), 1).await;
    mount(&server, "/compact.json", json(MET_NO_ONE_STEP), 0).await;

    let output = run_cli(&["atlantis"], &server).await;

    assert_ne!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("geocoding failed"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_forecast_names_the_weather_stage() {
    let server = MockServer::start().await;
    mount(&server, "/navn", json(GEONORGE_OSLO), 1).await;
    mount(&server, "/compact.json", json("not json"), 1).await;

    let output = run_cli(&["oslo"], &server).await;

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("weather fetch failed"), "stderr: {stderr}");
}
