use elpris_core::config::AppConfig;
use elpris_menu::menu::Menu;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// # Summary
/// 按优先级叠加配置源并反序列化为 `AppConfig`。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 作为最底层。
/// 2. 叠加可选的配置文件（缺失时跳过）。
/// 3. 叠加 `{env_prefix}__` 前缀的环境变量，嵌套键以 `__` 分隔（如 `ELPRIS__CHART__HEIGHT=6`）。
///
/// # Arguments
/// * `file`: 可选的配置文件源。
/// * `env_prefix`: 环境变量前缀。
///
/// # Returns
/// 合并后的配置，来源格式错误时返回 `ConfigError`。
fn layered_config(
    file: Option<config::File<config::FileSourceFile, config::FileFormat>>,
    env_prefix: &str,
) -> Result<AppConfig, config::ConfigError> {
    let mut builder =
        config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);
    if let Some(file) = file {
        builder = builder.add_source(file.required(false));
    }
    builder
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

/// 工作目录下的 `elpris.{toml,yaml,json}` 与 `ELPRIS__*` 环境变量。
fn load_config() -> Result<AppConfig, config::ConfigError> {
    layered_config(Some(config::File::with_name("elpris")), "ELPRIS")
}

/// # Summary
/// 应用启动入口。
///
/// # Logic
/// 1. 初始化日志，输出到 stderr，避免干扰 stdout 上的菜单。
/// 2. 加载并校验配置。
/// 3. 在标准输入/输出上运行菜单直到退出或输入结束。
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. 加载配置
    let app_config = load_config()?;
    app_config.validate()?;
    info!(?app_config, "Configuration loaded");

    // 3. 运行菜单
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), app_config);
    menu.run()?;

    info!("Menu finished. Exiting...");
    Ok(())
}
