use calc_builder::calculator::CalculatorId;
use calc_builder::commands::estimate::{export_command, quote_command};
use calc_builder::config::Config;
use calc_builder::export::Exporter;
use calc_builder::store::MemoryStore;

use tempfile::TempDir;

#[tokio::test]
async fn test_quote_uses_answers_without_saving() {
    let store = MemoryStore::seeded();
    let config = Config::default();
    let quote = quote_command(&store, &config, CalculatorId(1), vec!["1625100000002=10".into()])
        .await
        .unwrap();
    assert_eq!(quote.total, 2000.0);
    assert_eq!(quote.items.len(), 2);

    let untouched = quote_command(&store, &config, CalculatorId(1), vec![]).await.unwrap();
    assert_eq!(untouched.total, 1250.0);
    assert!(quote_command(&store, &config, CalculatorId(1), vec!["bogus".into()]).await.is_err());
}

#[tokio::test]
async fn test_export_html_and_text() {
    let store = MemoryStore::seeded();
    let mut config = Config::default();
    config.brand.company_name = "Pixel & Co".into();
    let dir = TempDir::new().unwrap();

    let html = dir.path().join("estimate.html");
    let written = export_command(&store, &config, &Exporter::new(), CalculatorId(1), "pdf".into(), Some(html.clone()), vec![])
        .await
        .unwrap();
    assert_eq!(written, html);
    let content = std::fs::read_to_string(&html).unwrap();
    assert!(content.contains("Pixel &amp; Co"));
    assert!(content.contains("Amount Due"));
    assert!(content.contains("$1250.00"));

    let text = dir.path().join("estimate.txt");
    export_command(&store, &config, &Exporter::new(), CalculatorId(1), "text".into(), Some(text.clone()), vec![])
        .await
        .unwrap();
    assert!(std::fs::read_to_string(&text).unwrap().contains("Number of Pages"));

}

#[tokio::test]
async fn test_jpg_without_rasterizer_writes_nothing() {
    let store = MemoryStore::seeded();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("estimate.jpg");

    let result = export_command(&store, &Config::default(), &Exporter::new(), CalculatorId(1), "jpg".into(), Some(path.clone()), vec![]).await;
    assert!(result.is_err());
    assert!(!path.exists());
    assert!(export_command(&store, &Config::default(), &Exporter::new(), CalculatorId(1), "docx".into(), None, vec![]).await.is_err());

}
