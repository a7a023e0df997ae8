//! サブコマンド（extract / config）の入出力テスト

use clap::Parser;
use std::path::PathBuf;
use tempfile::tempdir;
use vinted_fit::cli::{Cli, Commands, ExtractArgs};
use vinted_fit::config::Config;
use vinted_fit::error::VintedFitError;
use vinted_fit::report;
use vinted_fit_common::{extract_all, MeasurementKind};

/// 寸法が見つからない場合のメッセージ
#[test]
fn test_format_extracted_empty() {
    assert_eq!(report::format_extracted(&[]), "寸法が見つかりません\n");
    assert_eq!(
        report::format_extracted(&extract_all("Très belle veste")),
        "寸法が見つかりません\n"
    );
}

/// 見つかった寸法を「区分.フィールド: 値」で1行ずつ
#[test]
fn test_format_extracted_lines() {
    let found = vec![
        (MeasurementKind::Shoulders, 45.0),
        (MeasurementKind::Sleeves, 60.5),
        (MeasurementKind::WaistWidth, 40.0),
    ];

    assert_eq!(
        report::format_extracted(&found),
        "  jacket.shoulders: 45\n  jacket.sleeves: 60.5\n  pants.width: 40\n"
    );
}

/// テキスト引数をそのまま使う
#[test]
fn test_extract_reads_text_argument() {
    let cli = Cli::try_parse_from(["vinted-fit", "extract", "Largeur épaule 45"]).unwrap();
    let Some(Commands::Extract(args)) = cli.command else {
        panic!("Expected extract");
    };

    let text = args.read_text().unwrap();
    assert_eq!(text, "Largeur épaule 45");
    assert_eq!(
        report::format_extracted(&extract_all(&text)),
        "  jacket.shoulders: 45\n"
    );
}

/// --file 指定時はファイルの内容を使う
#[test]
fn test_extract_reads_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("description.txt");
    std::fs::write(&path, "Hauteur de fourche 28\nOuverture de jambe 19,5").unwrap();

    let args = ExtractArgs {
        text: None,
        file: Some(path),
    };
    let text = args.read_text().unwrap();
    assert_eq!(
        report::format_extracted(&extract_all(&text)),
        "  pants.leg_opening: 19.5\n  pants.fork: 28\n"
    );
}

/// 存在しないファイルはIOエラー
#[test]
fn test_extract_missing_file() {
    let args = ExtractArgs {
        text: None,
        file: Some(PathBuf::from("/nonexistent/path/description.txt")),
    };
    assert!(matches!(args.read_text(), Err(VintedFitError::Io(_))));
}

/// テキストもファイルもない場合は引数エラー
#[test]
fn test_extract_without_input_is_usage_error() {
    let err = Cli::try_parse_from(["vinted-fit", "extract"]).err().expect("引数エラーになるはず");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

fn write_config(content: &str) -> (tempfile::TempDir, Config) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, content).unwrap();
    let config = Config::load_from(&path).expect("設定読み込み失敗");
    (dir, config)
}

/// --show なしは読み込み結果と警告のみ
#[test]
fn test_config_summary_without_show() {
    let (_dir, config) = write_config(
        r#"{"jacket": {"shoulders": "44-47", "chest": "50-55"}, "pants": {"width": "39,5-42"}}"#,
    );

    let summary = report::format_config_summary(&config, false);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("✔ 設定を読み込みました: "));
    assert!(lines[0].ends_with("config.json"));
    assert_eq!(lines[1], "⚠ 未対応のフィールド: jacket.chest");
}

/// --show で区分ごとの範囲を表示
#[test]
fn test_config_summary_with_show() {
    let (_dir, config) = write_config(
        r#"{"jacket": {"sleeves": "60-64", "shoulders": "44-47"}, "pants": {"width": "39,5-42"}}"#,
    );

    let summary = report::format_config_summary(&config, true);
    let lines: Vec<&str> = summary.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "jacket:",
            "  shoulders: 44-47",
            "  sleeves: 60-64",
            "pants:",
            "  width: 39.5-42",
        ]
    );
}
