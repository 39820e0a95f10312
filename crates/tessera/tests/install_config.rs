use tessera::{
    Config, ConfigError, Error,
    prelude::{ConversionRegistry, FallbackPolicy, Value},
};

#[test]
fn install_from_config_sets_global_registry() {
    let config = Config::from_toml_str("[registry]\nfallback = \"strict\"\n").expect("config");
    config.install().expect("first install");

    assert_eq!(ConversionRegistry::global().policy(), FallbackPolicy::Strict);
    assert_eq!(Value::from("7").get::<i32>(), Ok(7));

    match config.install() {
        Err(ConfigError::Registry(Error::RegistryInstalled)) => {}
        other => panic!("expected RegistryInstalled, got {other:?}"),
    }
}
