use super::*;

#[test]
fn minimal_config_uses_defaults() {
    let config = Config::try_from_toml(
        r#"
        [web]
        site_addr = "127.0.0.1:3000"
        "#,
    )
    .expect("minimal config is valid");
    assert_eq!(config.log_level, LevelFilter::INFO);
    assert_eq!(config.log_directory, None);
    assert_eq!(config.client_settings, ClientSettings::default());
    assert_eq!(
        config.leptos_options.site_addr,
        SocketAddr::from_str("127.0.0.1:3000").unwrap()
    );
}

#[test]
fn full_config() {
    let config = Config::try_from_toml(
        r#"
        log_level = "debug"
        log_directory = "/var/log/bookshelf"

        [web]
        site_addr = "0.0.0.0:8000"

        [api]
        origin = "https://library.example.org/"
        hide_books_without_edition = true
        "#,
    )
    .expect("full config is valid");
    assert_eq!(config.log_level, LevelFilter::DEBUG);
    assert_eq!(config.log_directory.as_deref(), Some("/var/log/bookshelf"));
    assert_eq!(
        config.client_settings.api_origin.as_str(),
        "https://library.example.org"
    );
    assert_eq!(
        config.client_settings.edition_filter,
        EditionFilter::HideMissing
    );
}

#[test]
fn missing_web_section_is_a_parse_error() {
    let res = Config::try_from_toml(r#"log_level = "INFO""#);
    assert!(matches!(res, Err(ConfigError::TomlParse(_))));
}

#[test]
fn bad_site_addr() {
    let res = Config::try_from_toml(
        r#"
        [web]
        site_addr = "localhost"
        "#,
    );
    assert!(matches!(res, Err(ConfigError::SiteAddrParse(_))));
}

#[test]
fn bad_log_level() {
    let res = Config::try_from_toml(
        r#"
        log_level = "chatty"
        [web]
        site_addr = "127.0.0.1:3000"
        "#,
    );
    assert!(matches!(res, Err(ConfigError::LogLevel(_))));
}

#[test]
fn bad_api_origin() {
    let res = Config::try_from_toml(
        r#"
        [web]
        site_addr = "127.0.0.1:3000"
        [api]
        origin = "localhost:8080"
        "#,
    );
    assert!(matches!(
        res,
        Err(ConfigError::ApiOrigin(InvalidOrigin::Scheme(_)))
    ));
}
