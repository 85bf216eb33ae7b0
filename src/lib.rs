//! Hugging Face model snapshot fetcher
//!
//! Downloads every file of a named Hub repository into a local directory
//! and prints a manifest of the result.

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// Hubスナップショットダウンロード
pub mod fetcher;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ダウンロード結果のマニフェスト
pub mod manifest;
