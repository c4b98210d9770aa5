use super::*;

const MINIMAL: &str = r#"
[web]
site_addr = "127.0.0.1:3000"

[api]
base_url = "http://localhost:8000/"
"#;

#[test]
fn minimal_config_uses_defaults() {
    let config = Config::try_from_toml(MINIMAL).unwrap();
    assert_eq!(config.log_level, LevelFilter::INFO);
    assert_eq!(config.client.api_base_url, "http://localhost:8000");
    assert_eq!(config.client.asset_base_url, "http://localhost:8000");
    assert_eq!(
        config.leptos_options.site_addr,
        "127.0.0.1:3000".parse::<std::net::SocketAddr>().unwrap()
    );
}

#[test]
fn separate_asset_host() {
    let config = Config::try_from_toml(
        r#"
log_level = "debug"

[web]
site_addr = "0.0.0.0:8080"

[api]
base_url = "https://books.example.org/api"
asset_base_url = "https://cdn.example.org/covers/"
"#,
    )
    .unwrap();
    assert_eq!(config.log_level, LevelFilter::DEBUG);
    assert_eq!(config.client.api_base_url, "https://books.example.org/api");
    assert_eq!(config.client.asset_base_url, "https://cdn.example.org/covers");
}

#[test]
fn relative_base_url_is_rejected() {
    let res = Config::try_from_toml(
        r#"
[web]
site_addr = "127.0.0.1:3000"

[api]
base_url = "/api"
"#,
    );
    assert!(matches!(
        res,
        Err(ConfigError::BaseUrl {
            key: "api.base_url",
            ..
        })
    ));
}

#[test]
fn bad_log_level_is_rejected() {
    let res = Config::try_from_toml(&format!("log_level = \"chatty\"\n{MINIMAL}"));
    assert!(matches!(res, Err(ConfigError::LogLevel(_))));
}

#[test]
fn bad_site_addr_is_rejected() {
    let res = Config::try_from_toml(&MINIMAL.replace("127.0.0.1:3000", "localhost"));
    assert!(matches!(res, Err(ConfigError::SiteAddrParse(_))));
}

#[test]
fn missing_api_section_is_a_toml_error() {
    let res = Config::try_from_toml("[web]\nsite_addr = \"127.0.0.1:3000\"\n");
    assert!(matches!(res, Err(ConfigError::TomlParse(_))));
}
