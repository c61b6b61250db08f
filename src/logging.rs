use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// ログファイル名の接頭辞
const LOG_FILE_PREFIX: &str = "postcraft.log";

/// ログ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// ログレベル (trace, debug, info, warn, error) または EnvFilter 式
    pub level: String,
    /// ログディレクトリ
    pub log_dir: PathBuf,
    /// ファイルローテーション設定
    pub rotation: LogRotation,
    /// 保持するログファイル数（未指定なら削除しない）
    pub max_files: Option<usize>,
    /// コンソール出力有効（標準エラー出力）
    pub console_enabled: bool,
    /// ファイル出力有効
    pub file_enabled: bool,
    /// JSON形式で出力
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// 日次ローテーション
    Daily,
    /// 時間毎ローテーション
    Hourly,
    /// ローテーションなし
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            rotation: LogRotation::Daily,
            max_files: None,
            console_enabled: true,
            file_enabled: false,
            json: false,
        }
    }
}

impl LogConfig {
    /// ログレベルを設定
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// カスタムログディレクトリを設定
    pub fn with_log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// ローテーション設定
    pub fn with_rotation(mut self, rotation: LogRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// 保持ファイル数設定
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = Some(max_files);
        self
    }

    /// コンソール出力制御
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    /// ファイル出力制御
    pub fn with_file(mut self, enabled: bool) -> Self {
        self.file_enabled = enabled;
        self
    }

    /// JSON出力制御
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }
}

/// ログディレクトリを確保
fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    Ok(())
}

/// 出力先ごとのレイヤーを作成
fn output_layer<W>(writer: W, json: bool, ansi: bool) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// ログシステムを初期化
///
/// ファイル出力が有効な場合は非同期書き込みのガードを返す。
/// 呼び出し側はプロセス終了までガードを保持すること。
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    let mut guard = None;

    if config.console_enabled || !config.file_enabled {
        // どちらも無効な場合もエラーだけは見えるようにする
        let console_filter = if config.console_enabled {
            None
        } else {
            Some(tracing::level_filters::LevelFilter::WARN)
        };
        let layer = output_layer(std::io::stderr, config.json, !config.json);
        layers.push(match console_filter {
            Some(level) => layer.with_filter(level).boxed(),
            None => layer,
        });
    }

    if config.file_enabled {
        ensure_log_dir(&config.log_dir)?;
        let file_appender = match config.rotation {
            LogRotation::Daily => rolling::daily(&config.log_dir, LOG_FILE_PREFIX),
            LogRotation::Hourly => rolling::hourly(&config.log_dir, LOG_FILE_PREFIX),
            LogRotation::Never => rolling::never(&config.log_dir, LOG_FILE_PREFIX),
        };
        let (writer, worker_guard) = non_blocking(file_appender);
        layers.push(output_layer(writer, config.json, false));
        guard = Some(worker_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("📝 ログシステム初期化完了");
    tracing::debug!("📊 ログレベル: {}", config.level);
    if config.file_enabled {
        tracing::debug!("📂 ログディレクトリ: {}", config.log_dir.display());

        if let Some(max_files) = config.max_files {
            if let Err(e) = cleanup_old_logs_by_count(&config.log_dir, max_files) {
                tracing::warn!("ログ保持ポリシー適用に失敗: {}", e);
            }
        }
    }

    Ok(guard)
}

/// ファイル数ベースでログファイルを削除
fn cleanup_old_logs_by_count(log_dir: &Path, max_count: usize) -> Result<usize> {
    let mut log_files = Vec::new();

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if is_log_file(&path) {
            if let Ok(modified) = entry.metadata().and_then(|m| m.modified()) {
                log_files.push((path, modified));
            }
        }
    }

    // 新しい順
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    let mut removed_count = 0;
    for (path, _) in log_files.iter().skip(max_count) {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("ログファイル削除失敗: {} - {}", path.display(), e);
        } else {
            removed_count += 1;
            tracing::debug!("古いログファイル削除: {}", path.display());
        }
    }

    if removed_count > 0 {
        tracing::info!(
            "🗑️  古いログファイル{}個削除（最大{}個保持）",
            removed_count,
            max_count
        );
    }

    Ok(removed_count)
}

/// ログファイルかどうかを判定
fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.starts_with(LOG_FILE_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console_enabled);
        assert!(!config.file_enabled);
        assert_eq!(config.rotation, LogRotation::Daily);
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::default()
            .with_level("debug")
            .with_log_dir("/tmp/postcraft")
            .with_rotation(LogRotation::Never)
            .with_file(true)
            .with_json(true);

        assert_eq!(config.level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/postcraft"));
        assert_eq!(config.rotation, LogRotation::Never);
        assert!(config.file_enabled);
        assert!(config.json);
    }

    #[test]
    fn test_log_config_deserialize_partial() {
        let config: LogConfig = toml::from_str("level = \"warn\"\nrotation = \"hourly\"").unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.rotation, LogRotation::Hourly);
        assert!(config.console_enabled);
    }

    #[test]
    fn test_ensure_log_dir() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("test_logs");

        assert!(ensure_log_dir(&log_dir).is_ok());
        assert!(log_dir.exists());
    }

    #[test]
    fn test_cleanup_keeps_newest_files() {
        let temp_dir = tempdir().unwrap();
        let now = SystemTime::now();

        for (i, name) in ["postcraft.log.1", "postcraft.log.2", "postcraft.log.3"]
            .iter()
            .enumerate()
        {
            let path = temp_dir.path().join(name);
            let file = fs::File::create(&path).unwrap();
            file.set_modified(now - Duration::from_secs(3600 * (3 - i as u64)))
                .unwrap();
        }
        fs::write(temp_dir.path().join("other.txt"), "keep").unwrap();

        let removed = cleanup_old_logs_by_count(temp_dir.path(), 2).unwrap();
        assert_eq!(removed, 1);
        assert!(!temp_dir.path().join("postcraft.log.1").exists());
        assert!(temp_dir.path().join("postcraft.log.3").exists());
        assert!(temp_dir.path().join("other.txt").exists());
    }
}
