use assert_cmd::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

const COUNTRIES: &str = r#"[
  {"name": "Aland", "capital": "Mariehamn", "latitude": 60.116667, "longitude": 19.9,
   "alpha2code": "AX", "alt_spellings": ["AX", "Ahvenanmaa"], "currencies": [{"code": "EUR"}],
   "flag": "", "area": 1580, "languages": [{"name": "Swedish", "native_name": "svenska"}],
   "population": 28875, "subregion": "Northern Europe", "timezones": ["UTC+02:00"]}
]"#;

const RATES: &str = r#"{"success": true, "base": "RUB", "date": "2022-09-14",
  "rates": {"EUR": 0.016503, "USD": 0.016496}}"#;

const WEATHER: &str = r#"{"weather": [{"description": "scattered clouds"}],
  "main": {"temp": 13.92, "pressure": 1023, "humidity": 54}, "visibility": 10000,
  "wind": {"speed": 4.63}, "dt": 1677332220, "timezone": 7200}"#;

const NEWS: &str = r#"{"status": "ok", "articles": [
  {"source": {"name": "Yle"}, "author": null, "title": "Aland ferry traffic resumes",
   "description": null, "publishedAt": "2023-02-24T18:05:00Z"}
]}"#;

/// A mock of every provider plus a config pointing at it
struct Fixture {
    _temp: TempDir,
    config_path: PathBuf,
    cache_dir: PathBuf,
    server: ServerGuard,
}

impl Fixture {
    fn new() -> Self {
        let temp = tempdir().expect("tempdir");
        let server = mockito::Server::new();
        let cache_dir = temp.path().join("cache");
        let config_path = write_config(temp.path(), &server.url(), &cache_dir);
        Self {
            _temp: temp,
            config_path,
            cache_dir,
            server,
        }
    }

    fn mock(&mut self, path: &str, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .expect(hits)
            .create()
    }

    /// Every provider answering once with its payload
    fn mock_all(&mut self) -> Vec<Mock> {
        vec![
            self.mock("/geo/country/region/europe", 200, COUNTRIES, 1),
            self.mock("/fixer/latest", 200, RATES, 1),
            self.mock("/data/2.5/weather", 200, WEATHER, 1),
            self.mock("/v2/everything", 200, NEWS, 1),
        ]
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("geobrief"));
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("GEOBRIEF_CONFIG")
            .env_remove("GEOBRIEF_CACHE_DIR")
            .env_remove("GEOBRIEF_FORMAT")
            .env_remove("GEOBRIEF_DEBUG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

fn write_config(dir: &Path, base_url: &str, cache_dir: &Path) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "cache_dir: {cache}\n\
         providers:\n  \
           country:\n    api_key: geo-key\n    base_url: {url}\n  \
           currency:\n    api_key: fixer-key\n    base_url: {url}\n  \
           weather:\n    api_key: owm-key\n    base_url: {url}\n  \
           news:\n    api_key: news-key\n    base_url: {url}\n",
        cache = cache_dir.display(),
        url = base_url
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

#[test]
fn help_lists_commands() {
    Command::new(assert_cmd::cargo::cargo_bin!("geobrief"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("collect"))
        .stdout(predicate::str::contains("cache"));
}

#[test]
fn cache_path_honours_override() {
    let fixture = Fixture::new();
    let custom = fixture.cache_dir.join("elsewhere");

    fixture
        .cmd()
        .arg("cache")
        .arg("path")
        .arg("--cache-dir")
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains(custom.to_string_lossy().to_string()));
}

#[test]
fn report_collects_then_renders_every_section() {
    let mut fixture = Fixture::new();
    let mocks = fixture.mock_all();

    fixture
        .cmd()
        .arg("report")
        .arg("Aland")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aland (AX)"))
        .stdout(predicate::str::contains("Mariehamn"))
        .stdout(predicate::str::contains("1 EUR = 60.60 RUB"))
        .stdout(predicate::str::contains("scattered clouds"))
        .stdout(predicate::str::contains("Aland ferry traffic resumes"));

    for mock in mocks {
        mock.assert();
    }
}

#[test]
fn second_report_is_served_from_cache() {
    let mut fixture = Fixture::new();
    let mocks = fixture.mock_all();

    for _ in 0..2 {
        fixture.cmd().arg("report").arg("ax").assert().success();
    }

    // Each provider was hit exactly once across both runs
    for mock in mocks {
        mock.assert();
    }
}

#[test]
fn offline_report_on_empty_cache_fails() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .arg("report")
        .arg("Aland")
        .arg("--offline")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cached data for country"));
}

#[test]
fn unknown_country_fails() {
    let mut fixture = Fixture::new();
    let _mocks = fixture.mock_all();

    fixture
        .cmd()
        .arg("report")
        .arg("Atlantis")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}

#[test]
fn failing_weather_provider_only_blanks_its_section() {
    let mut fixture = Fixture::new();
    let _countries = fixture.mock("/geo/country/region/europe", 200, COUNTRIES, 1);
    let _rates = fixture.mock("/fixer/latest", 200, RATES, 1);
    let _weather = fixture.mock("/data/2.5/weather", 500, "oops", 1);
    let _news = fixture.mock("/v2/everything", 200, NEWS, 1);

    fixture
        .cmd()
        .arg("report")
        .arg("Aland")
        .assert()
        .success()
        .stdout(predicate::str::contains("unavailable: No cached data for weather:mariehamn_ax"))
        .stdout(predicate::str::contains("Aland ferry traffic resumes"));
}

#[test]
fn fixer_success_false_is_not_cached() {
    let mut fixture = Fixture::new();
    let _countries = fixture.mock("/geo/country/region/europe", 200, COUNTRIES, 1);
    let _rates = fixture.mock(
        "/fixer/latest",
        200,
        r#"{"success": false, "error": {"code": 101}}"#,
        1,
    );
    let _weather = fixture.mock("/data/2.5/weather", 200, WEATHER, 1);
    let _news = fixture.mock("/v2/everything", 200, NEWS, 1);

    fixture
        .cmd()
        .arg("report")
        .arg("Aland")
        .assert()
        .success()
        .stdout(predicate::str::contains("unavailable: No cached data for currency_rates"));
}

#[test]
fn collect_json_reports_summary() -> Result<(), Box<dyn std::error::Error>> {
    let mut fixture = Fixture::new();
    let _mocks = fixture.mock_all();

    let assert = fixture
        .cmd()
        .arg("collect")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(json["data"]["locations"], 1);
    assert_eq!(json["data"]["weather"]["refreshed"], 1);
    assert_eq!(json["data"]["country"]["category"], "country");
    assert!(json["meta"]["version"].is_string());

    Ok(())
}

#[test]
fn report_json_marks_missing_sections() -> Result<(), Box<dyn std::error::Error>> {
    let mut fixture = Fixture::new();
    let _countries = fixture.mock("/geo/country/region/europe", 200, COUNTRIES, 1);
    let _rates = fixture.mock("/fixer/latest", 200, RATES, 1);
    let _weather = fixture.mock("/data/2.5/weather", 200, WEATHER, 1);
    let _news = fixture.mock("/v2/everything", 404, "{}", 1);

    let assert = fixture
        .cmd()
        .arg("report")
        .arg("Ahvenanmaa")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(json["data"]["country"]["name"], "Aland");
    assert_eq!(json["data"]["weather"]["data"]["temp"], 13.92);
    assert!(json["data"]["news"]["error"].is_string());

    Ok(())
}

#[test]
fn countries_and_cache_maintenance() {
    let mut fixture = Fixture::new();
    let _mocks = fixture.mock_all();

    fixture.cmd().arg("collect").assert().success();

    fixture
        .cmd()
        .arg("countries")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mariehamn"))
        .stdout(predicate::str::contains("28.875"));

    fixture
        .cmd()
        .arg("cache")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries:        4"))
        .stdout(predicate::str::contains("weather:mariehamn_ax"));

    fixture
        .cmd()
        .arg("cache")
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 4 cache entries"));

    fixture
        .cmd()
        .arg("countries")
        .assert()
        .failure();
}

#[test]
fn status_reports_configured_keys() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("weather API key configured"))
        .stdout(predicate::str::contains(
            fixture.config_path.to_string_lossy().to_string(),
        ));
}

#[test]
fn missing_explicit_config_is_reported() {
    let temp = tempdir().expect("tempdir");

    Command::new(assert_cmd::cargo::cargo_bin!("geobrief"))
        .arg("countries")
        .arg("--config")
        .arg(temp.path().join("absent.yaml"))
        .env_remove("GEOBRIEF_CONFIG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
